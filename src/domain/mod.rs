pub mod book;
pub mod errors;
pub mod key;
pub mod movie;
pub mod resource;
pub mod transport;
pub mod tree;
