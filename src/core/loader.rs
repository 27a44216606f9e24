use crate::config::ElementIds;
use crate::core::{FormSurface, QuoteApi, ReferenceData};
use crate::utils::error::Result;
use crate::utils::numbers::format_price_label;
use std::sync::Arc;

/// Fills the location, resolution and difficulty selects from the backend's
/// reference data.
pub struct ReferenceDataLoader<A: QuoteApi, S: FormSurface> {
    api: Arc<A>,
    surface: Arc<S>,
    elements: ElementIds,
}

impl<A: QuoteApi, S: FormSurface> ReferenceDataLoader<A, S> {
    pub fn new(api: Arc<A>, surface: Arc<S>, elements: ElementIds) -> Self {
        Self {
            api,
            surface,
            elements,
        }
    }

    /// Page-ready entry point. Failures are logged and the selects stay as
    /// they were; nothing is shown to the user.
    pub async fn load(&self) {
        if let Err(e) = self.try_load().await {
            tracing::error!("Error loading data: {}", e);
        }
    }

    /// Fetches and appends the options. Calling it twice appends twice.
    pub async fn try_load(&self) -> Result<()> {
        let data = self.api.reference_data().await?;
        self.populate(&data);
        tracing::debug!(
            "Loaded {} locations, {} resolutions, {} difficulties",
            data.locations.len(),
            data.resolutions.len(),
            data.difficulties.len()
        );
        Ok(())
    }

    fn populate(&self, data: &ReferenceData) {
        let e = &self.elements;

        for location in &data.locations {
            self.surface
                .append_option(&e.location, &location.id.to_string(), &location.name);
        }

        for res in &data.resolutions {
            let label = format!(
                "{} - ${}",
                res.resolution,
                format_price_label(res.base_price)
            );
            self.surface
                .append_option(&e.resolution, &res.resolution, &label);
        }

        for difficulty in &data.difficulties {
            self.surface
                .append_option(&e.difficulty, &difficulty.level, &difficulty.level);
        }
    }
}
