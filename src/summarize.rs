use async_trait::async_trait;
use eyre::{Result, bail};
use log::debug;

/// Returned as-is when no API key is configured
pub const MISSING_KEY_ERROR: &str = "Error: API Key missing on server.";

/// Produces a summary string for a transcript. Faults never escape: a failed
/// model call comes back as an in-band error string.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(&self, transcript: &str) -> String;
}

/// Summarizer backed by the Gemini generateContent API
pub struct GeminiSummarizer {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiSummarizer {
    pub fn new(client: reqwest::Client, api_key: Option<String>, model: String) -> Self {
        Self { client, api_key, model }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        debug!("Summarizing via Gemini API with model {}", self.model);

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("Gemini API returned {status}: {body}");
        }

        let json: serde_json::Value = resp.json().await?;
        extract_gemini_text(&json)
    }
}

#[async_trait]
impl Summarize for GeminiSummarizer {
    async fn summarize(&self, transcript: &str) -> String {
        let Some(api_key) = self.api_key.clone() else {
            return MISSING_KEY_ERROR.to_string();
        };

        let prompt = build_prompt(transcript);
        match self.generate(&api_key, &prompt).await {
            Ok(summary) => summary,
            Err(e) => format!("Error summarizing: {e}"),
        }
    }
}

/// Fixed prompt: always summarize into Brazilian Portuguese, whatever the
/// transcript language is.
fn build_prompt(transcript: &str) -> String {
    format!(
        "Analyze the following YouTube video transcript (which may be in Portuguese or English). \
Ignore any intro/outro fluff. \
Write a detailed and structured summary in **Brazilian Portuguese** (Português do Brasil). \
Ensure the output is entirely in Portuguese, even if the source is English.\n\n\
Transcript Text: \n\n{transcript}"
    )
}

fn extract_gemini_text(json: &serde_json::Value) -> Result<String> {
    if let Some(text) = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
    {
        return Ok(text.to_string());
    }
    bail!("unexpected Gemini API response format");
}
