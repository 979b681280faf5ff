//! Rendering of the publish outcome
//!
//! Success goes to stdout, failure to stderr, and exactly one of the two is
//! written per outcome.

use std::io::Write;
use std::str::FromStr;

use serde_json::json;

use crate::error::{PostxError, Result};
use crate::types::PostResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PostxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PostxError::InvalidInput(format!(
                "Invalid format '{}'. Must be 'text' or 'json'",
                s
            ))),
        }
    }
}

/// Write the outcome to the matching channel and return the process exit code.
pub fn report<O: Write, E: Write>(
    outcome: &Result<PostResult>,
    format: OutputFormat,
    stdout: &mut O,
    stderr: &mut E,
) -> i32 {
    match outcome {
        Ok(result) => {
            // A closed stdout leaves nothing to report to.
            let _ = writeln!(stdout, "{}", render_success(result, format));
            0
        }
        Err(e) => {
            let _ = writeln!(stderr, "{}", render_failure(e, format));
            e.exit_code()
        }
    }
}

pub fn render_success(result: &PostResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "Created Post: {}",
            json!({ "id": result.id, "text": result.text })
        ),
        OutputFormat::Json => json!({
            "status": "success",
            "id": result.id,
            "text": result.text,
        })
        .to_string(),
    }
}

pub fn render_failure(error: &PostxError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Error: {}", error),
        OutputFormat::Json => json!({
            "status": "error",
            "error": error.to_string(),
            "exit_code": error.exit_code(),
        })
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlatformError;

    fn hello() -> PostResult {
        PostResult {
            id: "123".to_string(),
            text: "Hello, World!".to_string(),
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_success_text_contains_id_and_text() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = report(&Ok(hello()), OutputFormat::Text, &mut out, &mut err);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            out,
            "Created Post: {\"id\":\"123\",\"text\":\"Hello, World!\"}\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_success_json() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        report(&Ok(hello()), OutputFormat::Json, &mut out, &mut err);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["id"], "123");
        assert_eq!(value["text"], "Hello, World!");
        assert!(err.is_empty());
    }

    #[test]
    fn test_failure_goes_to_stderr_only() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome: Result<PostResult> = Err(PlatformError::Authentication(
            "HTTP 401: Unauthorized".to_string(),
        )
        .into());

        let code = report(&outcome, OutputFormat::Text, &mut out, &mut err);

        assert_eq!(code, 2);
        assert!(out.is_empty());
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Error: "));
        assert!(err.contains("HTTP 401: Unauthorized"));
        assert!(!err.contains("Created Post"));
    }

    #[test]
    fn test_failure_json() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome: Result<PostResult> =
            Err(PlatformError::RateLimit("HTTP 429: Too Many Requests".to_string()).into());

        let code = report(&outcome, OutputFormat::Json, &mut out, &mut err);

        assert_eq!(code, 1);
        assert!(out.is_empty());
        let value: serde_json::Value = serde_json::from_slice(&err).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["exit_code"], 1);
        assert!(value["error"].as_str().unwrap().contains("429"));
    }
}
