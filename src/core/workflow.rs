use crate::config::WidgetConfig;
use crate::core::notice::NoticeTimer;
use crate::core::{FormSurface, QuoteApi};
use crate::domain::model::{MessageBody, PriceRequest, PriceResponse, QuoteRequest, QuoteResponse};
use crate::utils::error::{QuoteError, Result};
use crate::utils::numbers::{format_amount, optional_count, parse_float_prefix, parse_int_prefix};
use std::sync::Arc;

const FILL_ALL_FIELDS: &str = "Please fill all fields";

/// Price calculation and quote submission for one form.
///
/// Each call is a single request with its outcome rendered onto the
/// surface. Nothing is retried and overlapping calls are not prevented.
pub struct QuoteWorkflow<A: QuoteApi, S: FormSurface + 'static> {
    api: Arc<A>,
    surface: Arc<S>,
    config: WidgetConfig,
    notice: NoticeTimer,
}

impl<A: QuoteApi, S: FormSurface + 'static> QuoteWorkflow<A, S> {
    pub fn new(api: Arc<A>, surface: Arc<S>, config: WidgetConfig) -> Self {
        Self {
            api,
            surface,
            config,
            notice: NoticeTimer::new(),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Whether a success notice is still waiting to be cleared.
    pub fn notice_pending(&self) -> bool {
        self.notice.is_pending()
    }

    /// Sends the current selection for pricing and renders the breakdown.
    ///
    /// Returns the priced response, or `None` once the failure has been shown
    /// to the user.
    pub async fn calculate_price(&self) -> Option<PriceResponse> {
        let style = self.config.feedback;

        let request = match self.price_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Price calculation skipped: {}", e);
                self.surface.alert(&style.error_text(FILL_ALL_FIELDS));
                return None;
            }
        };

        match self.api.calculate_price(&request).await {
            Ok(response) => {
                self.render_price(&response);
                Some(response)
            }
            Err(QuoteError::Rejected { status, message }) => {
                tracing::warn!("Price calculation rejected ({}): {}", status, message);
                self.surface
                    .alert(&style.error_text(&format!("Error: {}", message)));
                None
            }
            Err(e) => {
                tracing::error!("Error calculating price: {}", e);
                self.surface
                    .alert(&style.error_text("Error calculating price"));
                None
            }
        }
    }

    /// Form submission handler.
    ///
    /// Returns the backend's answer when one was decoded, whether or not it
    /// reports success.
    pub async fn submit_quote(&self) -> Option<QuoteResponse> {
        let e = &self.config.elements;
        let style = self.config.feedback;
        let request = self.quote_request();

        match self.api.submit_quote(&request).await {
            Ok(response) if response.success => {
                tracing::info!("Quote submitted for {}", request.email);
                self.show_message(style.success_class(), style.success_body());
                self.surface.reset_form();
                self.surface.set_visibility(&e.price_result, false);
                self.schedule_notice_clear();
                Some(response)
            }
            Ok(response) => {
                let detail = response.failure_detail();
                tracing::warn!("Quote refused: {}", detail);
                self.show_message(
                    style.error_class(),
                    MessageBody::Text(style.error_text(&format!("Error: {}", detail))),
                );
                Some(response)
            }
            Err(err) => {
                tracing::error!("Error submitting quote: {}", err);
                self.show_message(
                    style.error_class(),
                    MessageBody::Text(
                        style.error_text(&format!("Error submitting quote: {}", err)),
                    ),
                );
                None
            }
        }
    }

    /// Mirrors the camera slider into its readout, when the page has one.
    pub fn sync_camera_count(&self) {
        let e = &self.config.elements;
        if let Some(display) = &e.camera_count_display {
            let value = self.surface.field_value(&e.cameras);
            self.surface.set_display_value(display, &value);
        }
    }

    fn price_request(&self) -> Result<PriceRequest> {
        let e = &self.config.elements;
        let location = self.surface.field_value(&e.location);
        let cameras = self.surface.field_value(&e.cameras);
        let resolution = self.surface.field_value(&e.resolution);
        let difficulty = self.surface.field_value(&e.difficulty);

        if location.is_empty() || cameras.is_empty() || resolution.is_empty() || difficulty.is_empty() {
            return Err(QuoteError::ValidationError {
                message: FILL_ALL_FIELDS.to_string(),
            });
        }

        let (Some(location_id), Some(camera_count)) =
            (parse_int_prefix(&location), parse_int_prefix(&cameras))
        else {
            return Err(QuoteError::ValidationError {
                message: format!("non-numeric location '{}' or camera count '{}'", location, cameras),
            });
        };

        Ok(PriceRequest {
            camera_count,
            resolution,
            location_id,
            difficulty_level: difficulty,
        })
    }

    fn quote_request(&self) -> QuoteRequest {
        let e = &self.config.elements;
        let surface = &self.surface;

        QuoteRequest {
            name: surface.field_value(&e.name),
            email: surface.field_value(&e.email),
            phone: surface.field_value(&e.phone),
            service: surface.field_value(&e.service),
            message: surface.field_value(&e.message),
            location_id: optional_count(&surface.field_value(&e.location)),
            camera_count: optional_count(&surface.field_value(&e.cameras)),
            resolution: surface.field_value(&e.resolution),
            difficulty_level: surface.field_value(&e.difficulty),
            estimated_price: parse_float_prefix(&surface.display_value(&e.total_price))
                .unwrap_or(0.0),
        }
    }

    fn render_price(&self, response: &PriceResponse) {
        let e = &self.config.elements;
        let total = format_amount(response.total_price);

        self.surface.set_display_value(&e.total_price, &total);
        if let Some(secondary) = &e.total_price_secondary {
            self.surface.set_display_value(secondary, &total);
        }
        self.surface
            .set_display_value(&e.camera_cost, &format_amount(response.breakdown.camera_cost));
        self.surface
            .set_display_value(&e.labor_cost, &format_amount(response.breakdown.labor_cost));
        self.surface
            .set_display_value(&e.travel_fee, &format_amount(response.breakdown.travel_fee));
        self.surface.set_visibility(&e.price_result, true);
    }

    /// Any write to the message area supersedes a pending clear.
    fn show_message(&self, class: &str, body: MessageBody) {
        self.notice.cancel();
        self.surface
            .set_message(&self.config.elements.form_message, class, body);
    }

    fn schedule_notice_clear(&self) {
        let surface = Arc::clone(&self.surface);
        let id = self.config.elements.form_message.clone();
        let class = self.config.feedback.cleared_class();

        self.notice.schedule(self.config.notice_clear_delay(), move || {
            surface.set_message(&id, class, MessageBody::Text(String::new()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FormMessage, MemoryForm};
    use crate::core::test_support::{MockApi, Reply};
    use crate::domain::model::PriceBreakdown;
    use serde_json::json;
    use std::time::Duration;

    fn workflow(config: WidgetConfig) -> (Arc<MockApi>, Arc<MemoryForm>, QuoteWorkflow<MockApi, MemoryForm>) {
        let api = Arc::new(MockApi::default());
        let form = Arc::new(MemoryForm::new());
        let workflow = QuoteWorkflow::new(api.clone(), form.clone(), config);
        (api, form, workflow)
    }

    fn fill_selection(form: &MemoryForm) {
        form.set_field("location", "2");
        form.set_field("cameras", "4");
        form.set_field("resolution", "1080p");
        form.set_field("difficulty", "easy");
    }

    fn fill_contact(form: &MemoryForm) {
        form.set_field("name", "Amina");
        form.set_field("email", "amina@example.com");
        form.set_field("phone", "0612345678");
        form.set_field("service", "installation");
        form.set_field("message", "Four cameras for the warehouse");
    }

    fn priced() -> PriceResponse {
        PriceResponse {
            total_price: 150.5,
            breakdown: PriceBreakdown {
                camera_cost: 100.0,
                labor_cost: 40.5,
                travel_fee: 10.0,
            },
        }
    }

    fn succeeded() -> QuoteResponse {
        QuoteResponse {
            success: true,
            errors: None,
            message: None,
        }
    }

    #[tokio::test]
    async fn test_calculate_requires_all_fields() {
        for missing in ["location", "cameras", "resolution", "difficulty"] {
            let (api, form, workflow) = workflow(WidgetConfig::standalone());
            api.reply_price(Reply::Ok(priced()));
            fill_selection(&form);
            form.set_field(missing, "");

            assert!(workflow.calculate_price().await.is_none());

            assert!(api.price_requests().is_empty(), "request sent without {missing}");
            assert_eq!(form.alerts(), vec!["Please fill all fields".to_string()]);
            assert!(!form.is_visible("priceResult"));
        }
    }

    #[tokio::test]
    async fn test_calculate_rejects_non_numeric_count() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        fill_selection(&form);
        form.set_field("cameras", "many");

        workflow.calculate_price().await;

        assert!(api.price_requests().is_empty());
        assert_eq!(form.alerts().len(), 1);
    }

    #[tokio::test]
    async fn test_calculate_renders_breakdown() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_price(Reply::Ok(priced()));
        fill_selection(&form);

        let response = workflow.calculate_price().await;

        assert_eq!(response, Some(priced()));
        assert_eq!(
            api.price_requests(),
            vec![PriceRequest {
                camera_count: 4,
                resolution: "1080p".to_string(),
                location_id: 2,
                difficulty_level: "easy".to_string(),
            }]
        );
        assert_eq!(form.display_value("totalPrice"), "150.50");
        assert_eq!(form.display_value("cameraCost"), "100.00");
        assert_eq!(form.display_value("laborCost"), "40.50");
        assert_eq!(form.display_value("travelFee"), "10.00");
        assert_eq!(form.display_value("totalPrice2"), "");
        assert!(form.is_visible("priceResult"));
        assert!(form.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_calculate_twice_is_stable() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_price(Reply::Ok(priced()));
        fill_selection(&form);

        workflow.calculate_price().await;
        let first = form.display_value("totalPrice");
        workflow.calculate_price().await;

        assert_eq!(form.display_value("totalPrice"), first);
        assert_eq!(form.display_value("laborCost"), "40.50");
        assert_eq!(api.price_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_calculate_rejection_keeps_panel_hidden() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_price(Reply::Rejected {
            status: 400,
            message: "invalid resolution".to_string(),
        });
        fill_selection(&form);

        assert!(workflow.calculate_price().await.is_none());

        assert_eq!(form.alerts(), vec!["Error: invalid resolution".to_string()]);
        assert!(!form.is_visible("priceResult"));
        assert_eq!(form.display_value("totalPrice"), "");
    }

    #[tokio::test]
    async fn test_calculate_transport_failure_is_generic() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_price(Reply::Undecodable);
        fill_selection(&form);

        workflow.calculate_price().await;

        assert_eq!(form.alerts(), vec!["Error calculating price".to_string()]);
        assert!(!form.is_visible("priceResult"));
    }

    #[tokio::test]
    async fn test_site_profile_fills_secondary_total() {
        let (api, form, workflow) = workflow(WidgetConfig::site());
        api.reply_price(Reply::Ok(priced()));
        fill_selection(&form);

        workflow.calculate_price().await;
        assert_eq!(form.display_value("totalPrice2"), "150.50");

        form.set_field("difficulty", "");
        workflow.calculate_price().await;
        assert_eq!(form.alerts(), vec!["❌ Please fill all fields".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_builds_quote_from_form() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_quote(Reply::Ok(succeeded()));
        fill_selection(&form);
        fill_contact(&form);
        form.set_display_value("totalPrice", "150.50");

        workflow.submit_quote().await;

        let sent = api.quote_requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Amina");
        assert_eq!(sent[0].location_id, Some(2));
        assert_eq!(sent[0].camera_count, Some(4));
        assert_eq!(sent[0].resolution, "1080p");
        assert_eq!(sent[0].difficulty_level, "easy");
        assert_eq!(sent[0].estimated_price, 150.5);
    }

    #[tokio::test]
    async fn test_submit_without_selection_sends_absent_ids() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_quote(Reply::Ok(succeeded()));
        fill_contact(&form);
        form.set_field("cameras", "0");

        workflow.submit_quote().await;

        let sent = &api.quote_requests()[0];
        assert_eq!(sent.location_id, None);
        assert_eq!(sent.camera_count, None);
        assert_eq!(sent.estimated_price, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_success_resets_and_clears_notice() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_price(Reply::Ok(priced()));
        api.reply_quote(Reply::Ok(succeeded()));
        fill_selection(&form);
        fill_contact(&form);
        workflow.calculate_price().await;
        assert!(form.is_visible("priceResult"));

        workflow.submit_quote().await;

        for id in ["name", "email", "phone", "service", "message", "location", "cameras", "resolution", "difficulty"] {
            assert_eq!(form.field_value(id), "", "{id} not cleared");
        }
        assert!(!form.is_visible("priceResult"));
        assert_eq!(
            form.message("formMessage"),
            Some(FormMessage {
                class: "success".to_string(),
                body: MessageBody::Text("Quote submitted successfully! Check your email.".to_string()),
            })
        );
        assert!(workflow.notice_pending());

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(!form.message("formMessage").unwrap().body.is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let cleared = form.message("formMessage").unwrap();
        assert!(cleared.body.is_empty());
        assert_eq!(cleared.class, "success");
        assert!(!workflow.notice_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rich_success_notice() {
        let (api, form, workflow) = workflow(WidgetConfig::site());
        api.reply_quote(Reply::Ok(succeeded()));
        fill_contact(&form);

        workflow.submit_quote().await;

        let shown = form.message("formMessage").unwrap();
        assert_eq!(shown.class, "form-message success");
        assert!(matches!(shown.body, MessageBody::Markup(ref m) if m.contains("<strong>")));

        tokio::time::sleep(Duration::from_millis(5001)).await;
        let cleared = form.message("formMessage").unwrap();
        assert_eq!(cleared.class, "form-message");
        assert!(cleared.body.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_earlier_timer_does_not_clear_newer_notice() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_quote(Reply::Ok(succeeded()));
        fill_contact(&form);
        workflow.submit_quote().await;

        tokio::time::sleep(Duration::from_millis(3000)).await;
        api.reply_quote(Reply::Ok(QuoteResponse {
            success: false,
            errors: Some(json!({"email": "Invalid email address"})),
            message: None,
        }));
        workflow.submit_quote().await;

        tokio::time::sleep(Duration::from_millis(10_000)).await;
        let shown = form.message("formMessage").unwrap();
        assert_eq!(shown.class, "error");
        assert_eq!(
            shown.body,
            MessageBody::Text(r#"Error: {"email":"Invalid email address"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_submit_logical_failure_renders_errors() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_quote(Reply::Ok(QuoteResponse {
            success: false,
            errors: Some(json!(["email invalid"])),
            message: None,
        }));
        fill_contact(&form);

        let response = workflow.submit_quote().await;

        assert_eq!(response.map(|r| r.success), Some(false));
        let shown = form.message("formMessage").unwrap();
        assert_eq!(shown.class, "error");
        assert_eq!(shown.body, MessageBody::Text(r#"Error: ["email invalid"]"#.to_string()));
        assert_eq!(form.field_value("name"), "Amina");
        assert!(!workflow.notice_pending());
    }

    #[tokio::test]
    async fn test_submit_logical_failure_falls_back_to_message() {
        let (api, form, workflow) = workflow(WidgetConfig::site());
        api.reply_quote(Reply::Ok(QuoteResponse {
            success: false,
            errors: None,
            message: Some(json!("Server error")),
        }));

        workflow.submit_quote().await;

        let shown = form.message("formMessage").unwrap();
        assert_eq!(shown.class, "form-message error");
        assert_eq!(shown.body, MessageBody::Text(r#"❌ Error: "Server error""#.to_string()));
    }

    #[tokio::test]
    async fn test_submit_request_failure_shows_description() {
        let (api, form, workflow) = workflow(WidgetConfig::standalone());
        api.reply_quote(Reply::Undecodable);
        fill_contact(&form);

        assert!(workflow.submit_quote().await.is_none());

        let shown = form.message("formMessage").unwrap();
        assert_eq!(shown.class, "error");
        match shown.body {
            MessageBody::Text(text) => {
                assert!(text.starts_with("Error submitting quote: Serialization error"));
            }
            other => panic!("unexpected body: {other:?}"),
        }
        assert_eq!(form.field_value("email"), "amina@example.com");
    }

    #[tokio::test]
    async fn test_sync_camera_count() {
        let (_api, form, workflow) = workflow(WidgetConfig::site());
        form.set_field("cameras", "6");
        workflow.sync_camera_count();
        assert_eq!(form.display_value("cameraCount"), "6");

        let (_api, form, workflow) = self::workflow(WidgetConfig::standalone());
        form.set_field("cameras", "6");
        workflow.sync_camera_count();
        assert_eq!(form.display_value("cameraCount"), "");
    }
}
