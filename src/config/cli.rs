use crate::config::WidgetConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "quote-widget")]
#[command(about = "Drive the CCTV price-quote form against a quote backend")]
pub struct CliConfig {
    /// Path to a TOML widget configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Backend base URL, overrides the configuration file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Use the full-site page profile (rich feedback, secondary displays)
    #[arg(long)]
    pub site: bool,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub cameras: Option<String>,

    #[arg(long)]
    pub resolution: Option<String>,

    #[arg(long)]
    pub difficulty: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub service: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Submit the quote form after calculating the price
    #[arg(long)]
    pub submit: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Widget configuration: file (or preset) first, then flag overrides.
    pub fn widget_config(&self) -> Result<WidgetConfig> {
        let mut config = match &self.config {
            Some(path) => WidgetConfig::from_file(path)?,
            None if self.site => WidgetConfig::site(),
            None => WidgetConfig::standalone(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }

        Ok(config)
    }

    /// Form field values given on the command line, keyed by element id.
    pub fn field_values(&self, config: &WidgetConfig) -> Vec<(String, String)> {
        let e = &config.elements;
        [
            (&e.location, &self.location),
            (&e.cameras, &self.cameras),
            (&e.resolution, &self.resolution),
            (&e.difficulty, &self.difficulty),
            (&e.name, &self.name),
            (&e.email, &self.email),
            (&e.phone, &self.phone),
            (&e.service, &self.service),
            (&e.message, &self.message),
        ]
        .into_iter()
        .filter_map(|(id, value)| value.as_ref().map(|v| (id.clone(), v.clone())))
        .collect()
    }
}
