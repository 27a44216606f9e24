use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub locations: Vec<Location>,
    pub resolutions: Vec<Resolution>,
    pub difficulties: Vec<Difficulty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub resolution: String,
    pub base_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRequest {
    pub camera_count: i64,
    pub resolution: String,
    pub location_id: i64,
    pub difficulty_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    pub total_price: f64,
    pub breakdown: PriceBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub camera_cost: f64,
    pub labor_cost: f64,
    pub travel_fee: f64,
}

/// Body of a rejected price calculation: `{"error": ...}`, or the
/// `{"success": false, "message": ...}` shape some handlers answer with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceRejection {
    Error { error: String },
    Message { message: String },
}

impl PriceRejection {
    pub fn into_reason(self) -> String {
        match self {
            PriceRejection::Error { error } => error,
            PriceRejection::Message { message } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub location_id: Option<i64>,
    pub camera_count: Option<i64>,
    pub resolution: String,
    pub difficulty_level: String,
    pub estimated_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub success: bool,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl QuoteResponse {
    /// JSON rendering of the failure detail: `errors` when it holds a value,
    /// otherwise `message`, otherwise `null`.
    pub fn failure_detail(&self) -> String {
        self.errors
            .as_ref()
            .filter(|errors| is_truthy(errors))
            .or(self.message.as_ref())
            .map(|value| value.to_string())
            .unwrap_or_else(|| "null".to_string())
    }
}

/// `false`, `0`, `""` and `null` count as no value; empty arrays and objects
/// still count.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

/// Content written into the form message area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Markup(String),
}

impl MessageBody {
    pub fn is_empty(&self) -> bool {
        match self {
            MessageBody::Text(s) | MessageBody::Markup(s) => s.is_empty(),
        }
    }
}
