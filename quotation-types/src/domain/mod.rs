//! Pure domain types.

mod quotation;

pub use quotation::{FetchedQuotation, Quotation, UpstreamEnvelope, UsdBrlQuote};
