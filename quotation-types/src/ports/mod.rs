//! Port traits implemented by adapters.

pub mod repository;
pub mod upstream;

pub use repository::QuotationRepository;
pub use upstream::RateProvider;
