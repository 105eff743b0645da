// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod customer_repository;

pub use customer_repository::{CustomerRepository, RepositoryError, RepositoryResult};
