pub mod problem;
pub mod resource_handler;
