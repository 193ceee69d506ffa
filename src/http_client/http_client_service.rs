use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::http_client::{
    multipart::MultipartPayload, request::HttpClientRequest, response::ApiResult,
};

/// Generic verb operations over an HTTP transport. Every method folds all
/// failures into the returned envelope; callers inspect `code` and
/// `is_successful` instead of handling errors.
#[async_trait]
pub trait HttpClientService: Send + Sync {
    async fn get<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Send + Sync + 'static;

    async fn post<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Serialize + Send + Sync + 'static;

    async fn put<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Serialize + Send + Sync + 'static;

    async fn patch<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Serialize + Send + Sync + 'static;

    async fn delete<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Send + Sync + 'static;

    async fn post_form_data<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: MultipartPayload + Send + Sync + 'static;
}
