use crate::domain::model::{
    PriceRequest, PriceResponse, QuoteRequest, QuoteResponse, ReferenceData,
};
use crate::domain::ports::QuoteApi;
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted backend answer.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Rejected { status: u16, message: String },
    Undecodable,
}

impl<T: Clone> Reply<T> {
    fn resolve(reply: &Mutex<Option<Reply<T>>>) -> Result<T> {
        match reply.lock().unwrap().clone() {
            Some(Reply::Ok(value)) => Ok(value),
            Some(Reply::Rejected { status, message }) => Err(QuoteError::Rejected { status, message }),
            Some(Reply::Undecodable) | None => Err(QuoteError::SerializationError(
                serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
            )),
        }
    }
}

/// In-process `QuoteApi` recording every call. Unscripted endpoints fail
/// with a decode error.
#[derive(Debug, Default)]
pub struct MockApi {
    reference: Mutex<Option<Reply<ReferenceData>>>,
    price: Mutex<Option<Reply<PriceResponse>>>,
    quote: Mutex<Option<Reply<QuoteResponse>>>,
    reference_calls: AtomicUsize,
    price_requests: Mutex<Vec<PriceRequest>>,
    quote_requests: Mutex<Vec<QuoteRequest>>,
}

impl MockApi {
    pub fn with_reference_data(data: ReferenceData) -> Self {
        let api = Self::default();
        *api.reference.lock().unwrap() = Some(Reply::Ok(data));
        api
    }

    pub fn reply_price(&self, reply: Reply<PriceResponse>) {
        *self.price.lock().unwrap() = Some(reply);
    }

    pub fn reply_quote(&self, reply: Reply<QuoteResponse>) {
        *self.quote.lock().unwrap() = Some(reply);
    }

    pub fn reference_calls(&self) -> usize {
        self.reference_calls.load(Ordering::SeqCst)
    }

    pub fn price_requests(&self) -> Vec<PriceRequest> {
        self.price_requests.lock().unwrap().clone()
    }

    pub fn quote_requests(&self) -> Vec<QuoteRequest> {
        self.quote_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteApi for MockApi {
    async fn reference_data(&self) -> Result<ReferenceData> {
        self.reference_calls.fetch_add(1, Ordering::SeqCst);
        Reply::resolve(&self.reference)
    }

    async fn calculate_price(&self, request: &PriceRequest) -> Result<PriceResponse> {
        self.price_requests.lock().unwrap().push(request.clone());
        Reply::resolve(&self.price)
    }

    async fn submit_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        self.quote_requests.lock().unwrap().push(request.clone());
        Reply::resolve(&self.quote)
    }
}
