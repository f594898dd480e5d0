use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub id: i64,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeFields {
    pub name: String,
    pub category: String,
}

impl Resource for Tree {
    type Key = i64;
    type Fields = TreeFields;

    const TYPE_NAME: &'static str = "Tree";
    const KEY_PARAM: &'static str = "id";

    fn key(&self) -> i64 {
        self.id
    }

    fn natural_key(_fields: &TreeFields) -> Option<i64> {
        None
    }

    fn assemble(key: i64, fields: TreeFields) -> Self {
        Self {
            id: key,
            name: fields.name,
            category: fields.category,
        }
    }

    fn replace_fields(&mut self, fields: TreeFields) {
        self.name = fields.name;
        self.category = fields.category;
    }
}
