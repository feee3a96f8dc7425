use common::branch::{BranchDirectory, HttpBranchDirectory};
use common::create_template_engine;
use common::error::AppError;
use common::utils::config::AppConfig;
use common::utils::template_engine::{ProvidesTemplateEngine, TemplateEngine};
use std::sync::Arc;
use tracing::debug;

use crate::utils::clipboard::ClipboardCapability;

#[derive(Clone)]
pub struct HtmlState {
    pub templates: Arc<TemplateEngine>,
    pub config: AppConfig,
    pub branches: Arc<dyn BranchDirectory>,
    pub clipboard: ClipboardCapability,
}

impl HtmlState {
    /// State backed by the HTTP branch directory described in `config`.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let branches = Arc::new(HttpBranchDirectory::from_config(&config)?);
        debug!(
            base_url = %config.ifsc_api_base_url,
            timeout_secs = config.upstream_timeout_secs,
            "Branch directory configured"
        );
        Ok(Self::new_with_resources(config, branches, None))
    }

    pub fn new_with_resources(
        config: AppConfig,
        branches: Arc<dyn BranchDirectory>,
        template_engine: Option<Arc<TemplateEngine>>,
    ) -> Self {
        let templates =
            template_engine.unwrap_or_else(|| Arc::new(create_template_engine!("templates")));
        debug!("Template engine configured for html_router.");

        Self {
            templates,
            clipboard: ClipboardCapability::from_config(&config),
            config,
            branches,
        }
    }
}

impl ProvidesTemplateEngine for HtmlState {
    fn template_engine(&self) -> &Arc<TemplateEngine> {
        &self.templates
    }
}

impl crate::middlewares::response_middleware::ProvidesHtmlState for HtmlState {
    fn html_state(&self) -> &HtmlState {
        self
    }
}
