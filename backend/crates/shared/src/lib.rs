//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed entity IDs shared by the auth and event crates
//! - A JSON body extractor that rejects with [`error::app_error::AppError`]
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
