use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumString};

use super::{Customer, CustomerError, CustomerId, CustomerRepository, Result};

/// Built-in sample data sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SampleData {
    /// ジョン and ジェーン
    Basic,
    /// Basic plus マツダ
    #[default]
    Extended,
}

impl SampleData {
    pub fn customers(self) -> Vec<Customer> {
        let mut customers = vec![
            Customer::new(123, "ジョン", 123.45),
            Customer::new(456, "ジェーン", 678.90),
        ];
        if self == SampleData::Extended {
            customers.push(Customer::new(789, "マツダ", 1_000_000_000_000.0));
        }
        customers
    }
}

/// In-memory implementation of CustomerRepository
///
/// Populated once at construction; there is no write path, so the map is
/// shared without a lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: HashMap<CustomerId, Customer>,
}

impl InMemoryCustomerRepository {
    /// Build a repository from a fixed set of records.
    ///
    /// Rejects ID 0, empty names and duplicate IDs.
    pub fn from_customers(customers: impl IntoIterator<Item = Customer>) -> Result<Self> {
        let mut map = HashMap::new();
        for customer in customers {
            if customer.id.get() == 0 {
                return Err(CustomerError::InvalidRecord(
                    "Customer ID must be positive".to_string(),
                ));
            }
            if customer.name.is_empty() {
                return Err(CustomerError::InvalidRecord(format!(
                    "Customer {} has an empty name",
                    customer.id
                )));
            }
            if map.contains_key(&customer.id) {
                return Err(CustomerError::AlreadyExists(customer.id));
            }
            map.insert(customer.id, customer);
        }
        Ok(Self { customers: map })
    }

    /// Repository seeded with one of the built-in data sets
    pub fn sample(data: SampleData) -> Self {
        let customers = data
            .customers()
            .into_iter()
            .map(|customer| (customer.id, customer))
            .collect();
        Self { customers }
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get(&self, id: CustomerId) -> Result<Customer> {
        self.customers
            .get(&id)
            .cloned()
            .ok_or(CustomerError::NotFound(id))
    }

    async fn exists(&self, id: CustomerId) -> Result<bool> {
        Ok(self.customers.contains_key(&id))
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        let mut customers: Vec<Customer> = self.customers.values().cloned().collect();
        customers.sort_by_key(|c| c.id);
        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_data_sets() {
        let basic = InMemoryCustomerRepository::sample(SampleData::Basic);
        assert_eq!(basic.len(), 2);
        assert!(!basic.exists(CustomerId::new(789)).await.unwrap());

        let extended = InMemoryCustomerRepository::sample(SampleData::Extended);
        assert_eq!(extended.len(), 3);
        let matsuda = extended.get(CustomerId::new(789)).await.unwrap();
        assert_eq!(matsuda.name, "マツダ");
        assert_eq!(matsuda.balance, 1_000_000_000_000.0);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = InMemoryCustomerRepository::from_customers(vec![
            Customer::new(9, "Zed", 1.0),
            Customer::new(2, "Amy", 2.0),
        ])
        .unwrap();

        let ids: Vec<u64> = repo.list().await.unwrap().iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[test]
    fn test_from_customers_rejects_bad_records() {
        let duplicate = InMemoryCustomerRepository::from_customers(vec![
            Customer::new(1, "A", 0.0),
            Customer::new(1, "B", 0.0),
        ]);
        assert_eq!(
            duplicate.unwrap_err(),
            CustomerError::AlreadyExists(CustomerId::new(1))
        );

        let empty_name = InMemoryCustomerRepository::from_customers(vec![Customer::new(1, "", 0.0)]);
        assert!(matches!(empty_name, Err(CustomerError::InvalidRecord(_))));

        let zero_id = InMemoryCustomerRepository::from_customers(vec![Customer::new(0, "A", 0.0)]);
        assert!(matches!(zero_id, Err(CustomerError::InvalidRecord(_))));
    }

    #[test]
    fn test_sample_data_parses_from_str() {
        assert_eq!("basic".parse::<SampleData>().unwrap(), SampleData::Basic);
        assert_eq!(SampleData::Extended.to_string(), "extended");
    }
}
