use super::types::ChatError;

impl From<validator::ValidationErrors> for ChatError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

impl From<std::io::Error> for ChatError {
    fn from(err: std::io::Error) -> Self {
        Self::ServerError(err.to_string())
    }
}
