use crate::adapters::http::HttpQuoteApi;
use crate::config::WidgetConfig;
use crate::core::loader::ReferenceDataLoader;
use crate::core::workflow::QuoteWorkflow;
use crate::core::{FormSurface, QuoteApi};
use std::sync::Arc;

/// One quote form wired to its backend: the reference-data loader run on
/// page ready plus the calculate/submit workflow.
pub struct QuoteWidget<A: QuoteApi, S: FormSurface + 'static> {
    loader: ReferenceDataLoader<A, S>,
    workflow: QuoteWorkflow<A, S>,
}

impl<S: FormSurface + 'static> QuoteWidget<HttpQuoteApi, S> {
    /// Widget talking to the backend at `config.base_url`.
    pub fn connect(config: WidgetConfig, surface: Arc<S>) -> Self {
        let api = Arc::new(HttpQuoteApi::new(config.base_url.clone()));
        Self::new(api, surface, config)
    }
}

impl<A: QuoteApi, S: FormSurface + 'static> QuoteWidget<A, S> {
    pub fn new(api: Arc<A>, surface: Arc<S>, config: WidgetConfig) -> Self {
        Self {
            loader: ReferenceDataLoader::new(api.clone(), surface.clone(), config.elements.clone()),
            workflow: QuoteWorkflow::new(api, surface, config),
        }
    }

    pub async fn on_page_ready(&self) {
        tracing::info!("Loading pricing data from {}", self.workflow.config().base_url);
        self.loader.load().await;
        self.workflow.sync_camera_count();
    }

    pub fn loader(&self) -> &ReferenceDataLoader<A, S> {
        &self.loader
    }

    pub fn workflow(&self) -> &QuoteWorkflow<A, S> {
        &self.workflow
    }
}
