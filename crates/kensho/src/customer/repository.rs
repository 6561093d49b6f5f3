use async_trait::async_trait;

use super::{Customer, CustomerId, Result};

/// Read-only repository for customer records
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Get a customer by ID, failing with `NotFound` when absent
    async fn get(&self, id: CustomerId) -> Result<Customer>;

    /// Check if a customer exists
    async fn exists(&self, id: CustomerId) -> Result<bool>;

    /// List all customers ordered by ID
    async fn list(&self) -> Result<Vec<Customer>>;
}
