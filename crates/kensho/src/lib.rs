//! Main crate for Kensho
//!
//! A read-only customer store, declarative validation rules for flat user
//! records, and LLM agents that use both: the store as a typed run
//! dependency and the rules to validate structured model output.

pub mod agent;
pub mod app;
pub mod config;
pub mod customer;
pub mod error;
pub mod validation;

// Re-export core types
pub use kensho_core::{
    CoreError, Processor, ProcessorMetadata, Request, RequestId, Response,
    ResponseMetadata, Result,
};

pub use app::{AppMetadata, AppMode, KenshoApp, KenshoAppBuilder};
pub use config::KenshoConfig;
pub use customer::{Customer, CustomerError, CustomerId, CustomerService};
pub use error::{KenshoError, Result as KenshoResult};
pub use validation::{Model, ValidationError, ValidationRule};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{AppMode, KenshoApp};
    pub use crate::validation::Model;
    pub use kensho_core::{Processor, Request, Response};
}
