use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

/// Transport is the one natural-key resource: `name` is both a business field
/// and the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transport {
    pub name: String,
    pub mode: String,
    pub cost: String,
}

/// `name` defaults to empty so that update bodies may omit it; the key of an
/// existing entity is never taken from the body anyway. Create rejects an
/// absent name when the store asks for the natural key.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportFields {
    #[serde(default)]
    pub name: String,
    pub mode: String,
    pub cost: String,
}

impl Resource for Transport {
    type Key = String;
    type Fields = TransportFields;

    const TYPE_NAME: &'static str = "Transport";
    const KEY_PARAM: &'static str = "name";

    fn key(&self) -> String {
        self.name.clone()
    }

    fn natural_key(fields: &TransportFields) -> Option<String> {
        if fields.name.is_empty() {
            None
        } else {
            Some(fields.name.clone())
        }
    }

    fn assemble(key: String, fields: TransportFields) -> Self {
        Self {
            name: key,
            mode: fields.mode,
            cost: fields.cost,
        }
    }

    fn replace_fields(&mut self, fields: TransportFields) {
        self.mode = fields.mode;
        self.cost = fields.cost;
    }
}
