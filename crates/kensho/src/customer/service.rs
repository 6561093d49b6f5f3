use std::sync::Arc;
use tracing::debug;

use super::{Customer, CustomerId, CustomerRepository, InMemoryCustomerRepository, Result, SampleData};

/// Lookups the support agent performs against the customer store
#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Service over one of the built-in data sets
    pub fn sample(data: SampleData) -> Self {
        Self::new(Arc::new(InMemoryCustomerRepository::sample(data)))
    }

    /// Name of the customer, or `NotFound` carrying the requested ID
    pub async fn customer_name(&self, id: CustomerId) -> Result<String> {
        debug!(customer_id = %id, "looking up customer name");
        Ok(self.repository.get(id).await?.name)
    }

    /// Balance of the customer, or `NotFound` carrying the requested ID.
    ///
    /// `include_pending` is accepted for API compatibility and does not
    /// change the result: pending and settled balances are not tracked
    /// separately.
    pub async fn customer_balance(&self, id: CustomerId, include_pending: bool) -> Result<f64> {
        debug!(customer_id = %id, include_pending, "looking up customer balance");
        Ok(self.repository.get(id).await?.balance)
    }

    pub async fn contains(&self, id: CustomerId) -> Result<bool> {
        self.repository.exists(id).await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::CustomerError;

    #[tokio::test]
    async fn test_lookup_returns_stored_values() {
        let service = CustomerService::sample(SampleData::Extended);

        for customer in SampleData::Extended.customers() {
            assert_eq!(service.customer_name(customer.id).await.unwrap(), customer.name);
            assert_eq!(
                service.customer_balance(customer.id, true).await.unwrap(),
                customer.balance
            );
        }
    }

    #[tokio::test]
    async fn test_lookup_missing_id() {
        let service = CustomerService::sample(SampleData::Basic);
        let id = CustomerId::new(789);

        assert_eq!(
            service.customer_name(id).await.unwrap_err(),
            CustomerError::NotFound(id)
        );
        assert_eq!(
            service.customer_balance(id, false).await.unwrap_err(),
            CustomerError::NotFound(id)
        );
        assert!(!service.contains(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_include_pending_is_a_no_op() {
        let service = CustomerService::sample(SampleData::Extended);
        let id = CustomerId::new(456);

        let with_pending = service.customer_balance(id, true).await.unwrap();
        let settled = service.customer_balance(id, false).await.unwrap();
        assert_eq!(with_pending, settled);
        assert_eq!(with_pending, 678.90);
    }
}
