//! Company-data lookup used to prefill the onboarding form.
//!
//! The `brandfetch` module wraps the Brandfetch brand endpoint: it normalises
//! free-text input to a domain, fetches the company record for it, picks the
//! best-fit logo, and downloads image assets into memory for form prefill.
pub mod brandfetch;

pub use brandfetch::client::{BrandClient, DownloadedImage, LookupError, LookupSession};
pub use brandfetch::extract::extract_domain;
pub use brandfetch::logo::best_logo;
pub use brandfetch::types::CompanyRecord;
