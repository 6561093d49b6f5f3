//! Application layer for Kensho
//!
//! `KenshoApp` pairs a processor with its metadata so front ends (the CLI
//! loop, tests) can drive any agent the same way.

use kensho_core::{Processor, Request, Response, Result as CoreResult};
use std::sync::Arc;
use strum_macros::Display;

use crate::error::{KenshoError, Result};

pub struct KenshoApp {
    processor: Arc<dyn Processor>,
    metadata: AppMetadata,
}

/// Metadata about the Kensho application
#[derive(Debug, Clone)]
pub struct AppMetadata {
    pub name: String,
    pub version: String,
    pub mode: AppMode,
}

#[derive(Debug, Clone, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AppMode {
    /// Plain prompt in, text out
    Llm,
    /// Tools, dependencies and structured output
    Agent,
}

impl KenshoApp {
    pub async fn process(&self, request: Request) -> CoreResult<Response> {
        self.processor.process(request).await
    }

    pub fn metadata(&self) -> &AppMetadata {
        &self.metadata
    }

    /// One-line description printed when a session starts, e.g.
    /// `kensho-support 0.1.0 [agent] support: Bank support for customer 123 (tools: customer_balance)`
    pub fn banner(&self) -> String {
        let processor = self.processor.metadata();
        let mut banner = format!(
            "{} {} [{}]",
            self.metadata.name, self.metadata.version, self.metadata.mode
        );
        if let Some(name) = processor.name {
            banner.push(' ');
            banner.push_str(&name);
            if let Some(description) = processor.description {
                banner.push_str(": ");
                banner.push_str(&description);
            }
        }
        if !processor.capabilities.is_empty() {
            banner.push_str(&format!(" (tools: {})", processor.capabilities.join(", ")));
        }
        banner
    }

    pub fn builder(name: impl Into<String>) -> KenshoAppBuilder {
        KenshoAppBuilder::new(name)
    }
}

/// Builder for creating Kensho applications
pub struct KenshoAppBuilder {
    name: String,
    version: String,
    mode: AppMode,
    processor: Option<Arc<dyn Processor>>,
}

impl KenshoAppBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            mode: AppMode::Llm,
            processor: None,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn llm_mode(mut self) -> Self {
        self.mode = AppMode::Llm;
        self
    }

    pub fn agent_mode(mut self) -> Self {
        self.mode = AppMode::Agent;
        self
    }

    pub fn processor(mut self, processor: impl Processor + 'static) -> Self {
        self.processor = Some(Arc::new(processor));
        self
    }

    pub fn build(self) -> Result<KenshoApp> {
        let processor = self
            .processor
            .ok_or_else(|| KenshoError::Build("No processor configured".to_string()))?;

        Ok(KenshoApp {
            processor,
            metadata: AppMetadata {
                name: self.name,
                version: self.version,
                mode: self.mode,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Upper;

    #[async_trait]
    impl Processor for Upper {
        async fn process(&self, request: Request) -> CoreResult<Response> {
            Ok(Response::simple(request.id, request.message.to_uppercase()))
        }
    }

    #[tokio::test]
    async fn test_app_builder() {
        let app = KenshoApp::builder("test-app")
            .version("1.0.0")
            .agent_mode()
            .processor(Upper)
            .build()
            .unwrap();

        assert_eq!(app.metadata().name, "test-app");
        assert_eq!(app.metadata().mode, AppMode::Agent);

        let response = app.process(Request::simple("hello")).await.unwrap();
        assert_eq!(response.message, "HELLO");
    }

    #[test]
    fn test_banner_without_processor_metadata() {
        let app = KenshoApp::builder("kensho-ask")
            .version("0.2.0")
            .processor(Upper)
            .build()
            .unwrap();

        assert_eq!(app.banner(), "kensho-ask 0.2.0 [llm]");
    }

    #[test]
    fn test_build_without_processor() {
        let result = KenshoApp::builder("empty").build();
        assert!(matches!(result, Err(KenshoError::Build(_))));
    }
}
