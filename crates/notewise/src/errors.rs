use thiserror::Error;

/// Every way a single pipeline call can fail. None of these are retried.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to reach completion endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion endpoint returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed completion response: {source}, body: {body}")]
    MalformedUpstreamResponse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Completion response contained no choices")]
    EmptyUpstreamResponse,

    #[error("Completion reply was a content part list, expected plain text")]
    UnexpectedContentShape,

    #[error("Failed to decode knowledge analysis: {source}, reply: {text}")]
    ResponseDecode {
        #[source]
        source: serde_json::Error,
        text: String,
    },

    #[error("Expected {expected} {field}, got {actual}")]
    SchemaValidation {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl PipelineError {
    /// True when the completion endpoint did not answer within the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, PipelineError::Transport(e) if e.is_timeout())
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_detail() {
        let err = PipelineError::SchemaValidation {
            field: "prerequisites",
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Expected 5 prerequisites, got 4");

        let err = PipelineError::Upstream {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "Completion endpoint returned 500: boom");
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_decode_error_keeps_reply_text() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = PipelineError::ResponseDecode {
            source,
            text: "not json".into(),
        };
        assert!(err.to_string().ends_with("reply: not json"));
    }
}
