// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod memory;

pub use http::HttpQuoteApi;
pub use memory::MemoryForm;
