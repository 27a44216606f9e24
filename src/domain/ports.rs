use crate::domain::model::{
    MessageBody, PriceRequest, PriceResponse, QuoteRequest, QuoteResponse, ReferenceData,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The host page, addressed by element id.
///
/// Methods take `&self`; implementations own whatever interior mutability
/// the underlying document needs.
pub trait FormSurface: Send + Sync {
    /// Current value of an input control, empty when unset.
    fn field_value(&self, id: &str) -> String;

    /// Text content of a display element.
    fn display_value(&self, id: &str) -> String;

    fn set_display_value(&self, id: &str, value: &str);

    fn set_visibility(&self, id: &str, visible: bool);

    fn append_option(&self, list_id: &str, value: &str, label: &str);

    fn set_message(&self, id: &str, class: &str, body: MessageBody);

    /// Clears every field of the quote form.
    fn reset_form(&self);

    /// Blocking notice shown to the user.
    fn alert(&self, message: &str);
}

/// The quote backend.
#[async_trait]
pub trait QuoteApi: Send + Sync {
    async fn reference_data(&self) -> Result<ReferenceData>;

    /// Non-success statuses surface as `QuoteError::Rejected`.
    async fn calculate_price(&self, request: &PriceRequest) -> Result<PriceResponse>;

    /// Logical failures come back as `success: false`, not as errors.
    async fn submit_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse>;
}
