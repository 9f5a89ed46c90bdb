use crate::profile::form::ErrorMap;

pub type PfResult<T, E = PfError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum PfError {
    /// The API answered with a non-success status. `message` is what the
    /// server said, or the raw body when it was not a `{message}` object.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("profile form has invalid fields: {0}")]
    Validation(ErrorMap),

    #[error("http request failed")]
    Http(#[from] reqwest::Error),

    #[error("could not read image file")]
    Io(#[from] std::io::Error),

    #[error("an internal error occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl PfError {
    /// The server-provided message of a rejected request.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Message to show the user, preferring what the server said and
    /// otherwise falling back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self.rejection_message() {
            Some(message) => message.to_string(),
            None => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_exposes_server_message() {
        let error = PfError::Rejected {
            status: 422,
            message: "Zip code unknown".to_string(),
        };

        assert_eq!(Some("Zip code unknown"), error.rejection_message());
        assert_eq!("Zip code unknown", error.user_message("Failed"));
    }

    #[test]
    fn other_errors_fall_back() {
        let error = PfError::Anyhow(anyhow::anyhow!("boom"));

        assert_eq!(None, error.rejection_message());
        assert_eq!("Failed to update image", error.user_message("Failed to update image"));
    }
}
