#[derive(Debug, thiserror::Error)]
pub enum HttpClientServiceError {
    #[error("{0} is required!")]
    MissingField(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl HttpClientServiceError {
    /// Status code the envelope carries when this error is folded into it.
    /// Validation failures map to 400, everything else to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            HttpClientServiceError::MissingField(_) => 400,
            _ => 500,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClientServiceErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}

#[cfg(test)]
mod tests {
    use crate::http_client::error::HttpClientServiceError;

    #[test]
    fn only_missing_field_maps_to_400() {
        assert_eq!(
            HttpClientServiceError::MissingField("url".to_string()).status_code(),
            400
        );
        assert_eq!(
            HttpClientServiceError::Network("boom".to_string()).status_code(),
            500
        );
        assert_eq!(
            HttpClientServiceError::InvalidRequest("boom".to_string()).status_code(),
            500
        );
        assert_eq!(HttpClientServiceError::Timeout.status_code(), 500);
        assert_eq!(
            HttpClientServiceError::Deserialization("boom".to_string()).status_code(),
            500
        );
    }
}
