use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::{Customer, CustomerFields};

/// Errors raised by customer persistence
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Customer ID already exists: {0}")]
    DuplicateId(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for customers
///
/// Defines the contract shared by the in-memory and MySQL stores.
/// Handlers only ever see this trait.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List every customer
    ///
    /// The in-memory store returns insertion order, MySQL orders by ID.
    async fn list(&self) -> RepositoryResult<Vec<Customer>>;

    /// Find a customer by its ID, `None` when absent
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>>;

    /// Create a customer with a generated ID
    async fn create(&self, fields: CustomerFields) -> RepositoryResult<Customer>;

    /// Replace name, phone and email of an existing customer
    async fn update(&self, id: &str, fields: CustomerFields) -> RepositoryResult<Customer>;

    /// Delete a customer by ID; a missing ID is not an error
    async fn delete(&self, id: &str) -> RepositoryResult<()>;
}
