use crate::models::ExtractedEvent;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the extraction API
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Empty completion: {0}")]
    EmptyCompletion(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Instructions sent ahead of the organizer's description
const EXTRACTION_PROMPT: &str = r#"You are an assistant for a university event automation system. Extract structured JSON from the event description that follows.

Return strictly valid JSON with these fields:
- "event_type": (string) e.g. seminar, workshop, sports, cultural, festival, meeting
- "title": (string) a concise title, generated if not given
- "description": (string) a short clean summary
- "duration_days": (integer) number of days the event runs, default 1
- "preferred_venue": (string) venue name if specified
- "expected_attendance": (integer) estimated number of participants
- "constraints": (array of strings) e.g. "before Diwali", "not during exams"
- "resource_requirements": (array of strings) e.g. "projector", "mic", "cleaning"

Only include what is present or implied. Never add commentary, and never wrap the output in backticks."#;

/// Client for the hosted LLM extraction API
///
/// Forwards the organizer's free-text description behind a fixed extraction
/// prompt and reshapes the model's reply into an `ExtractedEvent`. Language
/// understanding happens on the remote side; this client is transport plus
/// JSON recovery only.
pub struct ExtractorClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ExtractorClient {
    /// Create a new extraction client
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            client,
        }
    }

    /// Extract structured event fields from a free-text description
    pub async fn extract_event(
        &self,
        description: &str,
    ) -> Result<ExtractedEvent, ExtractorError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key)
        );

        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": format!("{}\n{}", EXTRACTION_PROMPT, description) }]
            }],
            "generationConfig": {
                "temperature": 0.2,
                "topP": 1,
                "topK": 1,
                "maxOutputTokens": 2048
            }
        });

        tracing::debug!("Requesting extraction from model {}", self.model);

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(ExtractorError::ApiError(format!(
                "Extraction request failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let text = completion_text(&json)?;

        parse_extracted(text)
    }
}

/// Pull the first candidate's text out of a generateContent-style reply
fn completion_text(json: &Value) -> Result<&str, ExtractorError> {
    json.get("candidates")
        .and_then(|candidates| candidates.as_array())
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.pointer("/content/parts/0/text"))
        .and_then(|text| text.as_str())
        .ok_or_else(|| ExtractorError::EmptyCompletion("no candidate text in reply".into()))
}

/// Recover the JSON object from a completion that may be fenced or padded
/// with prose
fn parse_extracted(raw: &str) -> Result<ExtractedEvent, ExtractorError> {
    let object = slice_json_object(raw).ok_or_else(|| {
        ExtractorError::InvalidResponse(format!("no JSON object in completion: {:?}", raw))
    })?;

    serde_json::from_str(object)
        .map_err(|e| ExtractorError::InvalidResponse(format!("bad completion JSON: {}", e)))
}

/// Slice out the outermost `{ ... }`, dropping code fences and surrounding text
fn slice_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn reply_with_text(text: &str) -> String {
        serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": text }] } }
            ]
        })
        .to_string()
    }

    #[test]
    fn test_slice_json_object() {
        assert_eq!(slice_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
        assert_eq!(
            slice_json_object("```json\n{\"a\": 1}\n```"),
            Some(r#"{"a": 1}"#)
        );
        assert_eq!(
            slice_json_object("Here you go: {\"a\": 1} hope that helps"),
            Some(r#"{"a": 1}"#)
        );
        assert_eq!(slice_json_object("no json here"), None);
    }

    #[test]
    fn test_parse_extracted_defaults_missing_fields() {
        let extracted = parse_extracted(r#"{"title": "AI Workshop"}"#).unwrap();
        assert_eq!(extracted.title, "AI Workshop");
        assert_eq!(extracted.duration_days, 1);
        assert_eq!(extracted.preferred_venue, "");
        assert!(extracted.constraints.is_empty());
    }

    #[test]
    fn test_parse_extracted_rejects_garbage() {
        assert!(matches!(
            parse_extracted("the model refused"),
            Err(ExtractorError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_extracted("{not valid json}"),
            Err(ExtractorError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_extract_event_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply_with_text(
                "```json\n{\"event_type\": \"workshop\", \"title\": \"AI Workshop\", \
                 \"duration_days\": 2, \"preferred_venue\": \"main auditorium\", \
                 \"expected_attendance\": 150, \"constraints\": [\"before Diwali\"]}\n```",
            ))
            .create_async()
            .await;

        let client = ExtractorClient::new(
            server.url(),
            "test-key".to_string(),
            "gemini-2.5-pro".to_string(),
        );
        let extracted = client
            .extract_event("Plan a 2-day AI workshop before Diwali")
            .await
            .unwrap();

        assert_eq!(extracted.event_type, "workshop");
        assert_eq!(extracted.duration_days, 2);
        assert_eq!(extracted.preferred_venue, "main auditorium");
        assert_eq!(extracted.constraints, vec!["before Diwali"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_extract_event_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = ExtractorClient::new(
            server.url(),
            "test-key".to_string(),
            "gemini-2.5-pro".to_string(),
        );
        let result = client.extract_event("Plan a seminar").await;

        assert!(matches!(result, Err(ExtractorError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_extract_event_empty_candidates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let client = ExtractorClient::new(
            server.url(),
            "test-key".to_string(),
            "gemini-2.5-pro".to_string(),
        );
        let result = client.extract_event("Plan a seminar").await;

        assert!(matches!(result, Err(ExtractorError::EmptyCompletion(_))));
    }
}
