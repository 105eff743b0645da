use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::domain::customer::{Customer, CustomerFields};
use crate::domain::repositories::{CustomerRepository, RepositoryError, RepositoryResult};

/// MySQL implementation of CustomerRepository
///
/// Persists customers in a single `customers(id, name, phone, email)` table.
/// IDs are generated by the service, not by the database, so a colliding
/// random ID surfaces as `RepositoryError::DuplicateId`. The table keeps no
/// insertion order; `list` is ordered by ID.
#[derive(Clone)]
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    phone: String,
    email: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            email: row.email,
        }
    }
}

impl MySqlCustomerRepository {
    /// Creates a new MySqlCustomerRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for MySQL
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates the `customers` table if it does not exist yet
    pub async fn ensure_schema(&self) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                id VARCHAR(16) NOT NULL PRIMARY KEY,
                name VARCHAR(255) NOT NULL DEFAULT '',
                phone VARCHAR(64) NOT NULL DEFAULT '',
                email VARCHAR(255) NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Inserts a customer as-is, keeping its ID
    pub async fn insert(&self, customer: &Customer) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, phone, email)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(&customer.email)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepositoryError::DuplicateId(customer.id.clone())
            }
            other => RepositoryError::Database(other),
        })?;

        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn list(&self) -> RepositoryResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, email
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, email
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn create(&self, fields: CustomerFields) -> RepositoryResult<Customer> {
        let customer = Customer::new(fields);
        self.insert(&customer).await?;
        Ok(customer)
    }

    async fn update(&self, id: &str, fields: CustomerFields) -> RepositoryResult<Customer> {
        sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, phone = ?, email = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // MySQL reports zero affected rows for an unchanged row, so re-read
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            DELETE FROM customers WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
