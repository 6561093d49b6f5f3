//! CLI command handlers

pub mod ask;
pub mod customers;
pub mod demo;
pub mod support;
pub mod validate;

pub use ask::run_ask;
pub use customers::run_customers;
pub use demo::run_demo;
pub use support::run_support;
pub use validate::run_validate;
