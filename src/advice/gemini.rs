/// Gemini-backed advice provider
///
/// Calls the generateContent REST endpoint with a structured-output request
/// so the model answers with exactly the two-field JSON object the insight
/// type deserializes from. Copy is requested in Brazilian Portuguese to
/// match the product's shipped language.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::advice::{AdviceError, AdviceProvider};
use crate::domain::{DailyInsight, Habit};

/// Environment variable the credential is read from
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Model used when none is specified
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Base URL for the generateContent family of endpoints
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Advice provider backed by the Gemini API
pub struct GeminiAdvice {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiAdvice {
    /// Create a provider with an explicit API key and the default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create a provider pinned to a specific model
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a provider from the environment, if a credential is present
    ///
    /// Returns None when GEMINI_API_KEY is unset or blank. Callers treat
    /// None as "never attempt a request" and go straight to the fallback.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(GEMINI_API_KEY_VAR).ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        Some(Self::new(api_key))
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", API_BASE, self.model)
    }
}

#[async_trait]
impl AdviceProvider for GeminiAdvice {
    async fn fetch_insight(&self, habits: &[Habit]) -> Result<DailyInsight, AdviceError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(habits),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AdviceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(AdviceError::EmptyResponse)?;

        let insight: DailyInsight = serde_json::from_str(text.trim())?;

        tracing::debug!("Fetched insight for {} habits", habits.len());
        Ok(insight)
    }
}

/// Build the natural-language prompt from the habit list
///
/// Habits appear as "name (category)" pairs so the model can relate its
/// advice to what the user is actually tracking.
fn build_prompt(habits: &[Habit]) -> String {
    let listed = habits
        .iter()
        .map(|h| format!("{} ({})", h.name, h.category))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Com base nestes hábitos: {}, forneça uma frase motivacional diária e \
         um conselho curto para hoje. Responda obrigatoriamente em Português \
         do Brasil (PT-BR).",
        listed
    )
}

/// JSON schema the model is constrained to answer with
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "quote": {
                "type": "STRING",
                "description": "A motivational quote in Portuguese (PT-BR)."
            },
            "advice": {
                "type": "STRING",
                "description": "A short advice related to the habits in Portuguese (PT-BR)."
            }
        },
        "required": ["quote", "advice"]
    })
}

// Wire format for the generateContent endpoint
//
// Only the fields this provider touches are modeled; everything else in the
// API response is ignored during deserialization.

/// Request body for generateContent
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    /// Conversation turns; a single user turn carrying the prompt
    contents: Vec<Content>,
    /// Output constraints (MIME type + schema)
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

/// One conversation turn
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

/// One piece of turn content
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Structured-output configuration
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

/// Response body for generateContent
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One generated candidate
///
/// Content can be absent when generation stops early (safety filters), in
/// which case the provider reports EmptyResponse.
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
