use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub genre: String,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieFields {
    pub name: String,
    pub genre: String,
    pub year: i32,
}

impl Resource for Movie {
    type Key = i64;
    type Fields = MovieFields;

    const TYPE_NAME: &'static str = "Movie";
    const KEY_PARAM: &'static str = "id";

    fn key(&self) -> i64 {
        self.id
    }

    fn natural_key(_fields: &MovieFields) -> Option<i64> {
        None
    }

    fn assemble(key: i64, fields: MovieFields) -> Self {
        Self {
            id: key,
            name: fields.name,
            genre: fields.genre,
            year: fields.year,
        }
    }

    fn replace_fields(&mut self, fields: MovieFields) {
        self.name = fields.name;
        self.genre = fields.genre;
        self.year = fields.year;
    }
}
