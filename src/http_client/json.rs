use std::any::{Any, TypeId};

use serde::de::DeserializeOwned;

use crate::http_client::error::HttpClientServiceError;

/// Deserializes a raw response body into `T`. A `String` target gets the raw
/// body back untouched, with no JSON parsing applied.
pub fn from_json_string<T>(raw: &str) -> Result<T, HttpClientServiceError>
where
    T: DeserializeOwned + 'static,
{
    if TypeId::of::<T>() == TypeId::of::<String>() {
        let raw: Box<dyn Any> = Box::new(raw.to_owned());
        let raw = raw
            .downcast::<T>()
            .expect("TypeId matched String");
        return Ok(*raw);
    }

    serde_json::from_str(raw).map_err(|e| HttpClientServiceError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::http_client::error::HttpClientServiceError;
    use crate::http_client::json::from_json_string;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: u32,
        name: String,
    }

    #[test]
    fn string_target_returns_the_raw_body_unchanged() {
        let raw = "\"hello\"";

        let parsed: String = from_json_string(raw).unwrap();

        // Quotes included: no JSON parsing for string targets.
        assert_eq!(parsed, "\"hello\"");
    }

    #[test]
    fn string_target_accepts_bodies_that_are_not_json() {
        let parsed: String = from_json_string("plain text, not json").unwrap();

        assert_eq!(parsed, "plain text, not json");
    }

    #[test]
    fn typed_target_parses_json() {
        let parsed: User = from_json_string(r#"{"id":7,"name":"Alice"}"#).unwrap();

        assert_eq!(
            parsed,
            User {
                id: 7,
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn typed_target_rejects_malformed_json() {
        let result: Result<User, _> = from_json_string("not json");

        assert!(matches!(
            result.unwrap_err(),
            HttpClientServiceError::Deserialization(_)
        ));
    }
}
