/// Advice layer: the motivational insight boundary and its implementations
///
/// This module defines the async provider interface the dashboard consults
/// for its daily quote/advice pair, the Gemini-backed implementation, and
/// the service that owns the currently displayed insight.

pub mod gemini;
pub mod service;

// Re-export the advice types
pub use gemini::*;
pub use service::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DailyInsight, Habit};

/// Errors that can occur while fetching an insight
///
/// None of these ever reach the user: the insight service swallows them all
/// and substitutes the fallback pair.
#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned no usable candidates")]
    EmptyResponse,

    #[error("Malformed insight payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Trait defining the advice provider boundary
///
/// Implementations take the current habit list and produce a quote/advice
/// pair. Keeping this behind a trait lets tests substitute canned or failing
/// providers for the real HTTP client.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Generate a motivational insight for the given habits
    async fn fetch_insight(&self, habits: &[Habit]) -> Result<DailyInsight, AdviceError>;
}
