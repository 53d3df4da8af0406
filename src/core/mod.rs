//! Core components shared by every feature module.
//!
//! This module contains the foundational building blocks of the crate:
//! - The shared HTTP client ([`NewsClient`]) and its builder.
//! - The primary [`NewsError`] type.
//! - The data models that flow through the pipeline.

/// The shared HTTP client (`NewsClient`) and builder.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// Data models used across modules (`Symbol`, `NewsCandidate`, ...).
pub mod models;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{NewsClient, NewsClientBuilder};
pub use error::NewsError;
pub use models::{NewsCandidate, NewsRecord, ScoredArticle, Symbol};
