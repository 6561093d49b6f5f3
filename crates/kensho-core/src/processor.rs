//! Processor trait for kensho-core
//!
//! A processor turns one user request into one response. Agents, echo
//! handlers and test doubles all sit behind this seam so the CLI loop does
//! not care which one it drives.

use crate::{Request, Response, Result};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Processor: Send + Sync {
    /// Process a request and generate a response
    async fn process(&self, request: Request) -> Result<Response>;

    fn metadata(&self) -> ProcessorMetadata {
        ProcessorMetadata::default()
    }
}

/// Metadata about a processor
#[derive(Debug, Clone, Default)]
pub struct ProcessorMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Tool names the processor may call on the user's behalf
    pub capabilities: Vec<String>,
}

/// Arc-wrapped processor for thread-safe sharing
pub type SharedProcessor = Arc<dyn Processor>;
