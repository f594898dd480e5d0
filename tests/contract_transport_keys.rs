mod support;

use axum::http::StatusCode;
use serde_json::{Value, json};
use support::{app, assert_error, json_request, request_json};

#[tokio::test]
async fn transport_uses_its_name_as_the_key() {
    let app = app();

    let (status, created) = request_json(
        app.clone(),
        json_request(
            "POST",
            "/api/transport/post?name=Lime&mode=scooter&cost=1.77",
            Some("write"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        created,
        json!({"name": "Lime", "mode": "scooter", "cost": "1.77"})
    );

    let (status, fetched) = request_json(
        app.clone(),
        json_request("GET", "/api/transport?name=Lime", Some("read"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, payload) = request_json(
        app,
        json_request("GET", "/api/transport?name=Bird", Some("read"), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(
        &payload,
        "EntityNotFoundException",
        "Transport with id Bird not found",
    );
}

#[tokio::test]
async fn update_keeps_the_query_key_even_when_the_body_names_another() {
    let app = app();

    let (status, _) = request_json(
        app.clone(),
        json_request(
            "POST",
            "/api/transport/post?name=Lime&mode=scooter&cost=1.77",
            Some("write"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, updated) = request_json(
        app.clone(),
        json_request(
            "PUT",
            "/api/transport?name=Lime",
            Some("write"),
            Some(json!({"name": "Bird", "mode": "scooter", "cost": "2.10"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"name": "Lime", "mode": "scooter", "cost": "2.10"})
    );

    // Nothing was created under the body's name.
    let (status, _) = request_json(
        app.clone(),
        json_request("GET", "/api/transport?name=Bird", Some("read"), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, listed) = request_json(
        app,
        json_request("GET", "/api/transport/all", Some("read"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn creating_an_existing_name_overwrites_it() {
    let app = app();

    for cost in ["1.77", "9.99"] {
        let (status, _) = request_json(
            app.clone(),
            json_request(
                "POST",
                &format!("/api/transport/post?name=Lime&mode=scooter&cost={cost}"),
                Some("write"),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, fetched) = request_json(
        app,
        json_request("GET", "/api/transport?name=Lime", Some("read"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched.get("cost").and_then(Value::as_str), Some("9.99"));
}

#[tokio::test]
async fn delete_confirmation_uses_the_string_key_verbatim() {
    let app = app();

    let (status, _) = request_json(
        app.clone(),
        json_request(
            "POST",
            "/api/transport/post?name=Lime&mode=scooter&cost=1.77",
            Some("write"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, confirmation) = request_json(
        app.clone(),
        json_request("DELETE", "/api/transport?name=Lime", Some("write"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        confirmation,
        json!({"message": "Transport with id Lime deleted"})
    );

    let (status, _) = request_json(
        app,
        json_request("GET", "/api/transport?name=Lime", Some("read"), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stores_are_independent_per_resource_type() {
    let app = app();

    let (status, _) = request_json(
        app.clone(),
        json_request(
            "POST",
            "/api/transport/post?name=Lime&mode=scooter&cost=1.77",
            Some("write"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for uri in ["/api/books/all", "/api/movies/all", "/api/trees/all"] {
        let (status, listed) =
            request_json(app.clone(), json_request("GET", uri, Some("read"), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([]), "{uri}");
    }
}
