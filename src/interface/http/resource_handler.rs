use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    Json, Router,
    extract::{
        FromRequestParts, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::request::Parts,
    routing::{get, post},
};

use crate::application::authorization::{Role, RoleSet};
use crate::application::resource_service::{GenericMessage, ResourceService};
use crate::domain::errors::DomainError;
use crate::domain::resource::Resource;
use crate::interface::http::problem::{ApiProblem, ApiResult};

pub const ROLES_HEADER: &str = "x-api-roles";

/// Role set granted to the current request, read from the `x-api-roles`
/// header as a comma-separated list of `read` / `write`. Authentication
/// happens upstream of this service; this layer only consumes the granted
/// set. A missing header is an anonymous caller.
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub RoleSet);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let mut roles = RoleSet::anonymous();

        if let Some(raw) = parts
            .headers
            .get(ROLES_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            for label in raw.split(',') {
                if let Some(role) = Role::from_label(label.trim()) {
                    roles.grant(role);
                }
            }
        }

        Ok(Self(roles))
    }
}

/// Route group for one resource type: `{base}/all`, `{base}/post`, and
/// `{base}` itself for the keyed operations, mirroring the classic layout
/// `GET /all`, `POST /post`, `GET|PUT|DELETE ?<key>=...`.
pub fn resource_routes<E: Resource>(base: &str, service: ResourceService<E>) -> Router {
    let all = format!("{base}/all");
    let create = format!("{base}/post");

    Router::new()
        .route(&all, get(list_resources::<E>))
        .route(&create, post(create_resource::<E>))
        .route(
            base,
            get(get_resource::<E>)
                .put(update_resource::<E>)
                .delete(delete_resource::<E>),
        )
        .with_state(service)
}

pub async fn list_resources<E: Resource>(
    State(service): State<ResourceService<E>>,
    caller: Caller,
) -> ApiResult<Json<Vec<E>>> {
    let entities = service.list(&caller.0).await?;
    Ok(Json(entities))
}

pub async fn get_resource<E: Resource>(
    State(service): State<ResourceService<E>>,
    caller: Caller,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<E>> {
    // Deny before key parsing, so an unauthorized caller never sees
    // validation output.
    caller.0.require(Role::Read)?;
    let key = parse_key::<E>(&params)?;
    let entity = service.get(&caller.0, key).await?;
    Ok(Json(entity))
}

pub async fn create_resource<E: Resource>(
    State(service): State<ResourceService<E>>,
    caller: Caller,
    fields: Result<Query<E::Fields>, QueryRejection>,
) -> ApiResult<Json<E>> {
    caller.0.require(Role::Write)?;
    let Query(fields) = fields.map_err(|rejection| {
        ApiProblem::from_domain(DomainError::validation(rejection.body_text()))
    })?;
    let created = service.create(&caller.0, fields).await?;
    Ok(Json(created))
}

pub async fn update_resource<E: Resource>(
    State(service): State<ResourceService<E>>,
    caller: Caller,
    Query(params): Query<HashMap<String, String>>,
    body: Result<Json<E::Fields>, JsonRejection>,
) -> ApiResult<Json<E>> {
    caller.0.require(Role::Write)?;
    let key = parse_key::<E>(&params)?;
    let Json(fields) = body.map_err(|rejection| {
        ApiProblem::from_domain(DomainError::validation(rejection.body_text()))
    })?;
    let updated = service.update(&caller.0, key, fields).await?;
    Ok(Json(updated))
}

pub async fn delete_resource<E: Resource>(
    State(service): State<ResourceService<E>>,
    caller: Caller,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<GenericMessage>> {
    caller.0.require(Role::Write)?;
    let key = parse_key::<E>(&params)?;
    let confirmation = service.delete(&caller.0, key).await?;
    Ok(Json(confirmation))
}

fn parse_key<E: Resource>(params: &HashMap<String, String>) -> ApiResult<E::Key> {
    let raw = params.get(E::KEY_PARAM).ok_or_else(|| {
        ApiProblem::from_domain(DomainError::validation(format!(
            "query parameter '{}' is required",
            E::KEY_PARAM
        )))
    })?;

    raw.parse::<E::Key>().map_err(|_| {
        ApiProblem::from_domain(DomainError::validation(format!(
            "query parameter '{}' is not a valid key",
            E::KEY_PARAM
        )))
    })
}
