use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::key::ResourceKey;

/// One persisted resource type. Stores, the generic service, and the HTTP
/// handlers are all written against this trait so that adding an entity type
/// means one struct, one field set, and one impl.
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    type Key: ResourceKey;

    /// The full set of non-key fields, as bound from a create request's query
    /// string or an update request's JSON body. Any key field embedded in an
    /// update body is simply not part of this type and deserializes away.
    type Fields: DeserializeOwned + Send + 'static;

    /// Human-readable type name used in error and confirmation messages.
    const TYPE_NAME: &'static str;

    /// Name of the query parameter carrying the key (`id` or `name`).
    const KEY_PARAM: &'static str;

    fn key(&self) -> Self::Key;

    /// The business key carried inside the field set, for natural-key
    /// resources. Generated-key resources return `None`.
    fn natural_key(fields: &Self::Fields) -> Option<Self::Key>;

    fn assemble(key: Self::Key, fields: Self::Fields) -> Self;

    /// Replace every non-key field from `fields`; the key stays untouched.
    fn replace_fields(&mut self, fields: Self::Fields);
}
