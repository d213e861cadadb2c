use log::debug;

/// Failure from the generative-text service
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("summarization request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("summarization service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response format from summarization service")]
    MalformedResponse,
}

/// Instruction template prepended to every transcript
pub const PROMPT: &str = "You are a YouTube video summarizer. Analyze the transcript text and:\n\
1. Identify the main topics discussed\n\
2. Extract key points for each topic\n\
3. Provide concise bullet points\n\
4. Keep summary under 250 words\n\
5. Maintain original context and meaning\n\
\n\
Transcript:\n";

/// The exact model input: template plus transcript, nothing else.
/// The full transcript is sent in one request, no truncation or chunking.
pub fn build_prompt(transcript: &str) -> String {
    format!("{PROMPT}{transcript}")
}

/// Client for the generative-text service.
///
/// Holds the credential and model resolved once at startup; nothing is
/// read from the environment mid-pipeline.
pub struct Summarizer {
    client: reqwest::Client,
    model: String,
    api_key: String,
}

impl Summarizer {
    pub fn new(client: reqwest::Client, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Summarize a flattened transcript with a single model call
    pub async fn generate(&self, transcript: &str) -> Result<String, GenerationError> {
        let prompt = build_prompt(transcript);

        if is_anthropic_model(&self.model) {
            self.generate_anthropic(&prompt).await
        } else {
            self.generate_openai(&prompt).await
        }
    }

    async fn generate_anthropic(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!("Summarizing via Anthropic API with model {}", self.model);

        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": 4096,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let resp = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, body });
        }

        let json: serde_json::Value = resp.json().await?;
        extract_anthropic_text(&json)
    }

    async fn generate_openai(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!("Summarizing via OpenAI API with model {}", self.model);

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let resp = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, body });
        }

        let json: serde_json::Value = resp.json().await?;
        extract_openai_text(&json)
    }
}

pub fn is_anthropic_model(model: &str) -> bool {
    model.starts_with("claude")
}

fn extract_anthropic_text(json: &serde_json::Value) -> Result<String, GenerationError> {
    if let Some(content) = json.get("content").and_then(|c| c.as_array()) {
        let text: String = content
            .iter()
            .filter_map(|block| {
                if block.get("type")?.as_str()? == "text" {
                    block.get("text")?.as_str().map(|s| s.to_string())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    Err(GenerationError::MalformedResponse)
}

fn extract_openai_text(json: &serde_json::Value) -> Result<String, GenerationError> {
    if let Some(text) = json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
    {
        return Ok(text.to_string());
    }
    Err(GenerationError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_is_template_plus_transcript() {
        let transcript = "Hello world";
        let prompt = build_prompt(transcript);
        assert_eq!(prompt, format!("{PROMPT}{transcript}"));
        assert!(prompt.starts_with(PROMPT));
        assert!(prompt.ends_with(transcript));
    }

    #[test]
    fn test_build_prompt_no_truncation() {
        let transcript = "x".repeat(500_000);
        let prompt = build_prompt(&transcript);
        assert_eq!(prompt.len(), PROMPT.len() + transcript.len());
    }

    #[test]
    fn test_is_anthropic_model() {
        assert!(is_anthropic_model("claude-sonnet-4-6"));
        assert!(is_anthropic_model("claude-3-opus-20240229"));
        assert!(!is_anthropic_model("gpt-4o"));
        assert!(!is_anthropic_model("gpt-4o-mini"));
    }

    #[test]
    fn test_extract_anthropic_text() {
        let json = serde_json::json!({
            "content": [
                {
                    "type": "text",
                    "text": "Here is the summary."
                }
            ]
        });
        assert_eq!(extract_anthropic_text(&json).unwrap(), "Here is the summary.");
    }

    #[test]
    fn test_extract_anthropic_text_empty() {
        let json = serde_json::json!({"content": []});
        assert!(matches!(
            extract_anthropic_text(&json),
            Err(GenerationError::MalformedResponse)
        ));
    }

    #[test]
    fn test_extract_openai_text() {
        let json = serde_json::json!({
            "choices": [
                {
                    "message": {
                        "role": "assistant",
                        "content": "Summary of the video."
                    }
                }
            ]
        });
        assert_eq!(extract_openai_text(&json).unwrap(), "Summary of the video.");
    }

    #[test]
    fn test_extract_openai_text_empty() {
        let json = serde_json::json!({"choices": []});
        assert!(matches!(
            extract_openai_text(&json),
            Err(GenerationError::MalformedResponse)
        ));
    }
}
