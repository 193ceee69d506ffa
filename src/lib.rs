//! Thin generic HTTP client over reqwest: six verb operations taking a typed
//! request descriptor and returning a normalized `ApiResult` envelope.

pub mod http_client;
