use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A host API call rejected or threw.
    #[error("{operation} failed: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },
    #[error("invalid motion config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    pub fn js(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Js {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_error_names_the_operation() {
        let error = SiteError::js("querySelectorAll", "SyntaxError");
        assert_eq!(error.to_string(), "querySelectorAll failed: SyntaxError");
    }

    #[test]
    fn config_error_wraps_parser_error() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        let error = SiteError::from(parse_error);
        assert!(error.to_string().starts_with("invalid motion config:"));
    }
}
