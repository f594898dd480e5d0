use std::sync::Arc;

use crate::application::resource_service::ResourceService;
use crate::domain::{book::Book, movie::Movie, transport::Transport, tree::Tree};
use crate::infrastructure::in_memory_store::InMemoryStore;

/// One service per resource type; each owns an independent store.
#[derive(Clone)]
pub struct AppState {
    pub books: ResourceService<Book>,
    pub movies: ResourceService<Movie>,
    pub trees: ResourceService<Tree>,
    pub transport: ResourceService<Transport>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self {
            books: ResourceService::new(Arc::new(InMemoryStore::new())),
            movies: ResourceService::new(Arc::new(InMemoryStore::new())),
            trees: ResourceService::new(Arc::new(InMemoryStore::new())),
            transport: ResourceService::new(Arc::new(InMemoryStore::new())),
        }
    }
}
