//! # Kensho Core
//!
//! Request/response envelope and the `Processor` seam shared by the Kensho
//! application layer and the CLI.

pub mod error;
pub mod processor;
pub mod request;

pub use error::{CoreError, Result};
pub use processor::{Processor, ProcessorMetadata, SharedProcessor};
pub use request::{Request, RequestId, Response, ResponseMetadata};
