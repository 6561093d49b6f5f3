use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer number, the store's unique key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

impl CustomerId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    /// Display name, never empty
    pub name: String,
    /// Account balance; fractional, no declared range
    pub balance: f64,
}

impl Customer {
    pub fn new(id: u64, name: impl Into<String>, balance: f64) -> Self {
        Self {
            id: CustomerId::new(id),
            name: name.into(),
            balance,
        }
    }
}
