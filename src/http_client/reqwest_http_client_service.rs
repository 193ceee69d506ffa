use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue, Method, header::AUTHORIZATION};
use serde::{Serialize, de::DeserializeOwned};
use tracing::info;

use crate::http_client::{
    error::{HttpClientServiceError, HttpClientServiceErrorChecker},
    http_client_service::HttpClientService,
    json::from_json_string,
    multipart::{MultipartPayload, to_multipart_form},
    request::{HttpClientHeaders, HttpClientRequest},
    response::ApiResult,
};

#[derive(Clone)]
pub struct ReqwestHttpClientService {
    client: reqwest::Client,
}

impl ReqwestHttpClientService {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpClientService {
    fn default() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }
}

impl ReqwestHttpClientService {
    fn build_request<B>(
        &self,
        method: Method,
        request: &HttpClientRequest<B>,
    ) -> reqwest::RequestBuilder {
        info!("{} {}", method, request.url);

        let builder = self.client.request(method, request.url.as_str());

        let builder = match &request.token {
            Some(token) if request.is_oauth_token => builder.bearer_auth(token),
            Some(token) => builder.header(AUTHORIZATION, token),
            None => builder,
        };

        // Extra headers last: they overwrite anything set above.
        builder.headers((&request.headers).into())
    }

    async fn read_response<R>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<ApiResult<R>, HttpClientServiceError>
    where
        R: DeserializeOwned + 'static,
    {
        // reqwest does not error on non-2xx statuses, so every reachable
        // response lands here with its real status code.
        let response = builder.send().await.map_err(HttpClientServiceError::from)?;

        let code = response.status().as_u16();
        let message = response.status().canonical_reason().map(str::to_string);

        let raw = response
            .text()
            .await
            .map_err(|e| HttpClientServiceError::Network(e.to_string()))?;

        Ok(ApiResult {
            code,
            data: Some(from_json_string::<R>(&raw)?),
            message,
        })
    }

    async fn dispatch<R>(&self, builder: reqwest::RequestBuilder) -> ApiResult<R>
    where
        R: DeserializeOwned + 'static,
    {
        self.read_response(builder)
            .await
            .unwrap_or_else(ApiResult::from)
    }
}

fn validate<B>(request: &HttpClientRequest<B>) -> Result<(), HttpClientServiceError> {
    if request.url.is_empty() {
        return Err(HttpClientServiceError::MissingField("url".to_string()));
    }
    Ok(())
}

#[async_trait]
impl HttpClientService for ReqwestHttpClientService {
    async fn get<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Send + Sync + 'static,
    {
        if let Err(err) = validate(&request) {
            return err.into();
        }

        let builder = self.build_request(Method::GET, &request);
        self.dispatch(builder).await
    }

    async fn post<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Serialize + Send + Sync + 'static,
    {
        if let Err(err) = validate(&request) {
            return err.into();
        }

        let builder = self
            .build_request(Method::POST, &request)
            .json(&request.data);
        self.dispatch(builder).await
    }

    async fn put<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Serialize + Send + Sync + 'static,
    {
        if let Err(err) = validate(&request) {
            return err.into();
        }

        let builder = self.build_request(Method::PUT, &request).json(&request.data);
        self.dispatch(builder).await
    }

    async fn patch<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Serialize + Send + Sync + 'static,
    {
        if let Err(err) = validate(&request) {
            return err.into();
        }

        let builder = self
            .build_request(Method::PATCH, &request)
            .json(&request.data);
        self.dispatch(builder).await
    }

    async fn delete<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: Send + Sync + 'static,
    {
        if let Err(err) = validate(&request) {
            return err.into();
        }

        let builder = self.build_request(Method::DELETE, &request);
        self.dispatch(builder).await
    }

    async fn post_form_data<R, B>(&self, request: HttpClientRequest<B>) -> ApiResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        B: MultipartPayload + Send + Sync + 'static,
    {
        if let Err(err) = validate(&request) {
            return err.into();
        }

        let form = match &request.data {
            Some(data) => to_multipart_form(data),
            None => reqwest::multipart::Form::new(),
        };

        let builder = self.build_request(Method::POST, &request).multipart(form);
        self.dispatch(builder).await
    }
}

impl HttpClientServiceErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

impl<T: HttpClientServiceErrorChecker> From<T> for HttpClientServiceError {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            HttpClientServiceError::Timeout
        } else if err.is_connect() || err.is_request() {
            HttpClientServiceError::Network(err.error_string())
        } else {
            HttpClientServiceError::InvalidRequest(err.error_string())
        }
    }
}

impl From<&HttpClientHeaders> for HeaderMap {
    fn from(h: &HttpClientHeaders) -> Self {
        let mut header_map = HeaderMap::new();
        for (k, v) in h.iter() {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                header_map.insert(name, value);
            }
        }
        header_map
    }
}
