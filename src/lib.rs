pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpQuoteApi, MemoryForm};
pub use config::{ElementIds, FeedbackStyle, WidgetConfig};
pub use core::{loader::ReferenceDataLoader, widget::QuoteWidget, workflow::QuoteWorkflow};
pub use domain::model::MessageBody;
pub use domain::ports::{FormSurface, QuoteApi};
pub use utils::error::{QuoteError, Result};
