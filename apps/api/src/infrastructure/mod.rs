// Infrastructure layer module
// Contains database adapters and external service integrations
// Follows Hexagonal Architecture

pub mod balance_client;
pub mod repositories;
pub mod templates;
