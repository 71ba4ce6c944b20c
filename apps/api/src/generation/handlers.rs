//! Axum route handlers for the Generation API.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use chrono::Utc;

use crate::errors::AppError;
use crate::generation::language::DEFAULT_LANGUAGE_KEY;
use crate::models::generation::{GenerationRequest, GenerationResult};
use crate::state::AppState;

pub const PROMPT_REQUIRED: &str = "Prompt is required";

/// A request that passed validation: non-empty prompt, language resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub prompt: String,
    pub language: String,
}

impl TryFrom<GenerationRequest> for ValidatedRequest {
    type Error = AppError;

    fn try_from(request: GenerationRequest) -> Result<Self, Self::Error> {
        let prompt = request
            .prompt
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::Validation(PROMPT_REQUIRED.to_string()))?;

        let language = request
            .language
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE_KEY.to_string());

        Ok(ValidatedRequest { prompt, language })
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| {
            let essence = essence.trim().to_ascii_lowercase();
            essence == "application/json" || essence.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Decodes the request body leniently: a body without a JSON content type,
/// or an empty one, reads as `{}` so it fails validation on the prompt.
/// Only a JSON body that does not decode is an `InvalidBody`.
pub fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<GenerationRequest, AppError> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GenerationRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))
}

/// POST /api/generate-code
///
/// Always 200 once the prompt is valid; an upstream failure shows up only as `note`.
pub async fn handle_generate_code(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<GenerationResult>, AppError> {
    let request = parse_body(&headers, &body)?;
    let request = ValidatedRequest::try_from(request)?;

    let outcome = state
        .relay
        .generate(&request.prompt, &request.language)
        .await;
    let (code, note) = outcome.into_parts();

    Ok(Json(GenerationResult {
        code,
        language: request.language,
        timestamp: Utc::now(),
        note,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: Option<&str>, language: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.map(str::to_string),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_prompt_is_rejected() {
        let err = ValidatedRequest::try_from(request(None, Some("python"))).unwrap_err();
        assert_eq!(err.to_string(), PROMPT_REQUIRED);
    }

    #[test]
    fn test_empty_prompt_is_rejected() {
        let err = ValidatedRequest::try_from(request(Some(""), None)).unwrap_err();
        assert_eq!(err.to_string(), PROMPT_REQUIRED);
    }

    #[test]
    fn test_whitespace_prompt_is_accepted_verbatim() {
        let v = ValidatedRequest::try_from(request(Some("  \n"), None)).unwrap();
        assert_eq!(v.prompt, "  \n");
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        headers
    }

    #[test]
    fn test_body_without_json_content_type_reads_as_empty() {
        let parsed = parse_body(&HeaderMap::new(), br#"{"prompt":"x"}"#).unwrap();
        assert_eq!(parsed.prompt, None);
        assert_eq!(parsed.language, None);
    }

    #[test]
    fn test_empty_json_body_reads_as_empty() {
        assert_eq!(parse_body(&json_headers(), b"").unwrap().prompt, None);
        assert_eq!(parse_body(&json_headers(), b" \n").unwrap().prompt, None);
    }

    #[test]
    fn test_json_content_type_with_charset() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "Application/JSON; charset=utf-8".parse().unwrap(),
        );
        let parsed = parse_body(&headers, br#"{"prompt":"x"}"#).unwrap();
        assert_eq!(parsed.prompt.as_deref(), Some("x"));
    }

    #[test]
    fn test_malformed_json_is_invalid_body() {
        let err = parse_body(&json_headers(), b"{not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidBody(_)));
    }

    #[test]
    fn test_language_defaults_to_javascript() {
        let v = ValidatedRequest::try_from(request(Some("x"), None)).unwrap();
        assert_eq!(v.language, "javascript");

        let v = ValidatedRequest::try_from(request(Some("x"), Some(""))).unwrap();
        assert_eq!(v.language, "javascript");
    }

    #[test]
    fn test_unknown_language_is_kept_verbatim() {
        let v = ValidatedRequest::try_from(request(Some("x"), Some("kotlin"))).unwrap();
        assert_eq!(v.language, "kotlin");
    }

    #[test]
    fn test_prompt_is_passed_through_untrimmed() {
        let v = ValidatedRequest::try_from(request(Some(" sort "), None)).unwrap();
        assert_eq!(v.prompt, " sort ");
    }
}
