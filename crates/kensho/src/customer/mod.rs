pub mod entity;
pub mod error;
pub mod in_memory_repository;
pub mod repository;
pub mod service;

pub use entity::{Customer, CustomerId};
pub use error::{CustomerError, Result};
pub use in_memory_repository::{InMemoryCustomerRepository, SampleData};
pub use repository::CustomerRepository;
pub use service::CustomerService;
