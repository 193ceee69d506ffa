pub mod error;
pub mod http_client_service;
pub mod json;
pub mod multipart;
pub mod request;
pub mod response;
pub mod reqwest_http_client_service;
