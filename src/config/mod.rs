#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::MessageBody;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_NOTICE_CLEAR_MS: u64 = 5000;

/// Everything that differs between pages hosting the quote form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub base_url: String,
    pub elements: ElementIds,
    pub feedback: FeedbackStyle,
    pub notice_clear_ms: u64,
}

/// Element ids of the host page markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub location: String,
    pub cameras: String,
    pub resolution: String,
    pub difficulty: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub total_price: String,
    pub total_price_secondary: Option<String>,
    pub camera_count_display: Option<String>,
    pub camera_cost: String,
    pub labor_cost: String,
    pub travel_fee: String,
    pub price_result: String,
    pub form_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStyle {
    #[default]
    Plain,
    Rich,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            elements: ElementIds::default(),
            feedback: FeedbackStyle::Plain,
            notice_clear_ms: DEFAULT_NOTICE_CLEAR_MS,
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            location: "location".to_string(),
            cameras: "cameras".to_string(),
            resolution: "resolution".to_string(),
            difficulty: "difficulty".to_string(),
            name: "name".to_string(),
            email: "email".to_string(),
            phone: "phone".to_string(),
            service: "service".to_string(),
            message: "message".to_string(),
            total_price: "totalPrice".to_string(),
            total_price_secondary: None,
            camera_count_display: None,
            camera_cost: "cameraCost".to_string(),
            labor_cost: "laborCost".to_string(),
            travel_fee: "travelFee".to_string(),
            price_result: "priceResult".to_string(),
            form_message: "formMessage".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Standalone quote page: plain feedback, single price display.
    pub fn standalone() -> Self {
        Self::default()
    }

    /// Full site page: rich feedback, a second total display and a live
    /// camera-count readout next to the slider.
    pub fn site() -> Self {
        Self {
            elements: ElementIds {
                total_price_secondary: Some("totalPrice2".to_string()),
                camera_count_display: Some("cameraCount".to_string()),
                ..ElementIds::default()
            },
            feedback: FeedbackStyle::Rich,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn notice_clear_delay(&self) -> Duration {
        Duration::from_millis(self.notice_clear_ms)
    }
}

impl FeedbackStyle {
    /// Text for a blocking notice or an error line.
    pub fn error_text(&self, text: &str) -> String {
        match self {
            FeedbackStyle::Plain => text.to_string(),
            FeedbackStyle::Rich => format!("❌ {}", text),
        }
    }

    pub fn success_class(&self) -> &'static str {
        match self {
            FeedbackStyle::Plain => "success",
            FeedbackStyle::Rich => "form-message success",
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            FeedbackStyle::Plain => "error",
            FeedbackStyle::Rich => "form-message error",
        }
    }

    /// Class left on the message area once the success notice is cleared.
    pub fn cleared_class(&self) -> &'static str {
        match self {
            FeedbackStyle::Plain => "success",
            FeedbackStyle::Rich => "form-message",
        }
    }

    pub fn success_body(&self) -> MessageBody {
        match self {
            FeedbackStyle::Plain => {
                MessageBody::Text("Quote submitted successfully! Check your email.".to_string())
            }
            FeedbackStyle::Rich => MessageBody::Markup(
                "✅ <strong>Quote submitted successfully!</strong><br>Check your email for confirmation."
                    .to_string(),
            ),
        }
    }
}
