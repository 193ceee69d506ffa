use std::{
    collections::HashMap,
    ops::{Deref, DerefMut},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpClientHeaders(pub HashMap<String, String>);

impl HttpClientHeaders {
    pub fn get(&self, key: &str) -> Option<&String> {
        HashMap::get(self, key)
    }
}

impl Deref for HttpClientHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for HttpClientHeaders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[(String, String); N]> for HttpClientHeaders {
    fn from(arr: [(String, String); N]) -> Self {
        let map = arr.into_iter().collect();
        HttpClientHeaders(map)
    }
}

/// Describes one outbound call. Constructed per call and immutable for its
/// duration; fields left at `Default` are simply omitted from the request.
#[derive(Debug, Clone)]
pub struct HttpClientRequest<T> {
    /// Request URL, required and non-empty.
    pub url: String,

    /// Request body payload.
    pub data: Option<T>,

    /// When true, `token` is attached with OAuth bearer semantics instead of
    /// as a verbatim `Authorization` value.
    pub is_oauth_token: bool,

    /// Extra headers, applied last (overwrite wins).
    pub headers: HttpClientHeaders,

    /// Authorization token.
    pub token: Option<String>,
}

impl<T> Default for HttpClientRequest<T> {
    fn default() -> Self {
        Self {
            url: String::new(),
            data: None,
            is_oauth_token: false,
            headers: HttpClientHeaders::default(),
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::http_client::request::{HttpClientHeaders, HttpClientRequest};

    #[test]
    fn builds_headers_from_array_of_pairs() {
        let headers = HttpClientHeaders::from([
            ("content-type".to_string(), "application/json".to_string()),
            ("x-trace".to_string(), "abc".to_string()),
        ]);

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(headers.get("x-trace"), Some(&"abc".to_string()));
    }

    #[test]
    fn default_request_has_no_token_and_empty_headers() {
        let request: HttpClientRequest<()> = HttpClientRequest::default();

        assert_eq!(request.url, "");
        assert!(request.data.is_none());
        assert!(!request.is_oauth_token);
        assert!(request.headers.is_empty());
        assert!(request.token.is_none());
    }
}
