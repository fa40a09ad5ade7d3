//! Employee store
//!
//! `employees(name, position, salary)` is assumed to exist; nothing here
//! creates or migrates it.

use async_trait::async_trait;

use super::connection::{acquire, release};
use super::DbError;
use crate::config::DatabaseConfig;
use crate::models::NewEmployee;

const LIST_NAMES_SQL: &str = "SELECT name FROM employees WHERE name IS NOT NULL";

const INSERT_SQL: &str = "INSERT INTO employees (name, position, salary) VALUES (?, ?, ?)";

/// Storage seam used by the HTTP handlers.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Names of all employees, in storage iteration order.
    async fn list_names(&self) -> Result<Vec<String>, DbError>;

    /// Insert exactly one employee row.
    async fn add(&self, employee: &NewEmployee) -> Result<(), DbError>;
}

/// MySQL-backed store that opens a fresh connection for every call.
#[derive(Debug, Clone)]
pub struct MySqlEmployeeStore {
    config: DatabaseConfig,
}

impl MySqlEmployeeStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Run a single-column name query on a fresh connection.
    async fn fetch_names(&self, sql: &'static str) -> Result<Vec<String>, DbError> {
        let mut conn = acquire(&self.config).await?;

        tracing::info!(query = sql, "Executing query");
        let result = sqlx::query_scalar::<_, String>(sql)
            .fetch_all(&mut conn)
            .await;

        release(conn).await;

        result.map_err(|e| {
            tracing::error!(error = %e, "Database query failed");
            DbError::Query(e)
        })
    }
}

#[async_trait]
impl EmployeeStore for MySqlEmployeeStore {
    async fn list_names(&self) -> Result<Vec<String>, DbError> {
        let names = self.fetch_names(LIST_NAMES_SQL).await?;

        if names.is_empty() {
            tracing::info!("Query result: no employees found");
        } else {
            tracing::info!(count = names.len(), "Query result: employees found");
        }

        Ok(names)
    }

    async fn add(&self, employee: &NewEmployee) -> Result<(), DbError> {
        let mut conn = acquire(&self.config).await?;

        tracing::info!(name = employee.name.as_str(), "Inserting employee");
        let result = sqlx::query(INSERT_SQL)
            .bind(employee.name.as_str())
            .bind(employee.position.as_str())
            .bind(employee.salary.amount())
            .execute(&mut conn)
            .await;

        release(conn).await;

        let done = result.map_err(|e| {
            tracing::error!(error = %e, "Employee insert failed");
            DbError::Query(e)
        })?;

        tracing::debug!(rows_affected = done.rows_affected(), "Employee inserted");
        Ok(())
    }
}
