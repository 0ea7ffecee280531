/// Daily motivational insight value object
///
/// A quote and a piece of advice shown together on the dashboard. Not part of
/// the durable model: it is recomputed per session and never persisted.

use serde::{Deserialize, Serialize};

/// A motivational quote/advice pair produced by the advice provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyInsight {
    /// Short motivational quote
    pub quote: String,
    /// One concrete, actionable piece of advice
    pub advice: String,
}

impl DailyInsight {
    /// The fixed pair shown whenever the provider is absent or fails
    ///
    /// Product copy ships in Brazilian Portuguese, matching the language the
    /// provider is prompted to answer in.
    pub fn fallback() -> Self {
        Self {
            quote: "Acredite que você pode e você já está no meio do caminho.".to_string(),
            advice: "Consistência é mais importante que intensidade. Apenas continue aparecendo."
                .to_string(),
        }
    }
}
