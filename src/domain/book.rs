use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    pub genre: String,
    pub wordcount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookFields {
    pub name: String,
    pub author: String,
    pub genre: String,
    pub wordcount: i64,
}

impl Resource for Book {
    type Key = i64;
    type Fields = BookFields;

    const TYPE_NAME: &'static str = "Book";
    const KEY_PARAM: &'static str = "id";

    fn key(&self) -> i64 {
        self.id
    }

    fn natural_key(_fields: &BookFields) -> Option<i64> {
        None
    }

    fn assemble(key: i64, fields: BookFields) -> Self {
        Self {
            id: key,
            name: fields.name,
            author: fields.author,
            genre: fields.genre,
            wordcount: fields.wordcount,
        }
    }

    fn replace_fields(&mut self, fields: BookFields) {
        self.name = fields.name;
        self.author = fields.author;
        self.genre = fields.genre;
        self.wordcount = fields.wordcount;
    }
}
