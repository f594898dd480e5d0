pub mod authorization;
pub mod resource_service;
