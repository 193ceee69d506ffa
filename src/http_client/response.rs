use crate::http_client::error::HttpClientServiceError;

/// Uniform return value of every verb operation. `code` is always set, even
/// when the call never reached the network.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    pub code: u16,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResult<T> {
    pub fn is_successful(&self) -> bool {
        matches!(self.code, 200 | 201)
    }
}

impl<T> From<HttpClientServiceError> for ApiResult<T> {
    fn from(err: HttpClientServiceError) -> Self {
        ApiResult {
            code: err.status_code(),
            data: None,
            message: Some(err.to_string()),
        }
    }
}
