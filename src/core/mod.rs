pub mod loader;
pub mod notice;
pub mod widget;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    PriceRequest, PriceResponse, QuoteRequest, QuoteResponse, ReferenceData,
};
pub use crate::domain::ports::{FormSurface, QuoteApi};
pub use crate::utils::error::Result;
