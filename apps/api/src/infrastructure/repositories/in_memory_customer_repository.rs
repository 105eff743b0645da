use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::customer::{Customer, CustomerFields};
use crate::domain::repositories::{CustomerRepository, RepositoryError, RepositoryResult};

/// In-memory implementation of CustomerRepository
///
/// Customers are kept in insertion order behind a single lock. Every
/// operation holds the lock for its whole duration, so writers never
/// interleave. Lookups return the first entry with a matching ID.
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given customers
    ///
    /// Seeds are stored as-is, duplicate IDs included.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(RwLock::new(customers)),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn list(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.customers.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, fields: CustomerFields) -> RepositoryResult<Customer> {
        let customer = Customer::new(fields);
        self.customers.write().await.push(customer.clone());
        Ok(customer)
    }

    async fn update(&self, id: &str, fields: CustomerFields) -> RepositoryResult<Customer> {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        customer.apply(fields);
        Ok(customer.clone())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut customers = self.customers.write().await;
        if let Some(index) = customers.iter().position(|c| c.id == id) {
            customers.remove(index);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, phone: &str, email: &str) -> CustomerFields {
        CustomerFields {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn create_echoes_fields_with_generated_id() {
        let repo = InMemoryCustomerRepository::new();

        let customer = repo.create(fields("A", "1", "a@x.com")).await.unwrap();

        assert!(!customer.id.is_empty());
        assert_eq!(customer.name, "A");
        assert_eq!(customer.phone, "1");
        assert_eq!(customer.email, "a@x.com");
    }

    #[tokio::test]
    async fn find_after_create_returns_same_customer() {
        let repo = InMemoryCustomerRepository::new();
        let created = repo.create(fields("A", "1", "a@x.com")).await.unwrap();

        let found = repo.find_by_id(&created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryCustomerRepository::new();

        let found = repo.find_by_id("does-not-exist").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn delete_then_find_returns_none() {
        let repo = InMemoryCustomerRepository::new();
        let created = repo.create(fields("A", "1", "a@x.com")).await.unwrap();

        repo.delete(&created.id).await.unwrap();

        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_is_a_no_op() {
        let repo = InMemoryCustomerRepository::with_customers(vec![Customer::with_id(
            "1",
            fields("A", "1", "a@x.com"),
        )]);

        repo.delete("2").await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let repo = InMemoryCustomerRepository::new();
        let created = repo.create(fields("A", "1", "a@x.com")).await.unwrap();

        let updated = repo
            .update(&created.id, fields("B", "2", "b@x.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "B");
        assert_eq!(updated.phone, "2");
        assert_eq!(updated.email, "b@x.com");
        assert_eq!(repo.find_by_id(&created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_missing_returns_not_found() {
        let repo = InMemoryCustomerRepository::new();

        let result = repo.update("nope", fields("B", "2", "b@x.com")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == "nope"));
    }

    #[tokio::test]
    async fn list_length_tracks_creates_minus_deletes() {
        let repo = InMemoryCustomerRepository::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            let customer = repo
                .create(fields(&format!("C{}", i), "1", "c@x.com"))
                .await
                .unwrap();
            ids.push(customer.id);
        }

        repo.delete(&ids[1]).await.unwrap();
        repo.delete(&ids[3]).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_never_lose_an_entry() {
        let repo = InMemoryCustomerRepository::new();

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(fields(&format!("C{}", i), "1", "c@x.com"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.list().await.unwrap().len(), 64);
    }

    #[tokio::test]
    async fn duplicate_ids_coexist_and_first_match_wins() {
        // Random IDs are never checked for collisions
        let repo = InMemoryCustomerRepository::with_customers(vec![
            Customer::with_id("7", fields("First", "1", "first@x.com")),
            Customer::with_id("7", fields("Second", "2", "second@x.com")),
        ]);

        let found = repo.find_by_id("7").await.unwrap().unwrap();
        assert_eq!(found.name, "First");

        repo.delete("7").await.unwrap();

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Second");
    }
}
