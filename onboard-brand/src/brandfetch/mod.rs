//! Brandfetch API integration surface.
//!
//! Submodules provide the domain extractor, the HTTP client wrapper, the logo
//! selection helper, and strongly typed response models.
pub mod client;
pub mod extract;
pub mod logo;
pub mod types;

pub use client::BrandClient;
