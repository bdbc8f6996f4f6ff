//! Wire shapes that only exist at the HTTP boundary

use serde::Deserialize;

/// Every successful response wraps its payload in `data`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error bodies carry either `message` or `error`
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_wins_over_error() -> Result<()> {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Course exists","error":"Conflict"}"#)?;
        assert_eq!(body.into_message(), Some("Course exists".to_owned()));
        Ok(())
    }

    #[test]
    fn test_blank_message_is_ignored() -> Result<()> {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"  "}"#)?;
        assert_eq!(body.into_message(), None);
        Ok(())
    }
}
