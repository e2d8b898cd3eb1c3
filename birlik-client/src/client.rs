use std::time::Duration;

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::download::{DocumentDownload, filename_from_disposition, mime_from_header};
use crate::error::{BirlikClientError, BirlikClientResult, extract_error_message};

#[derive(Debug, Clone)]
/// Типизированный клиент REST API портала.
///
/// Создаётся один раз с базовым URL и передаётся вызывающему коду;
/// токен авторизации хранится внутри и управляется через
/// `set_token`/`get_token`/`clear_token` либо заполняется автоматически
/// после `login`/`register`.
pub struct BirlikClient {
    base_url: String,
    http: Client,
    token: Option<String>,
}

impl BirlikClient {
    /// Создаёт клиент с базовым URL сервера, например `http://127.0.0.1:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            http,
            token: None,
        }
    }

    /// Устанавливает bearer-токен вручную.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Возвращает текущий bearer-токен, если он установлен.
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Очищает сохранённый bearer-токен.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn require_token(&self) -> BirlikClientResult<&str> {
        self.token.as_deref().ok_or(BirlikClientError::MissingToken)
    }

    /// Запрос к публичному эндпоинту: без заголовка `Authorization`,
    /// даже если токен установлен.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    /// Запрос к защищённому эндпоинту: требует установленный токен.
    pub(crate) fn authed(&self, method: Method, path: &str) -> BirlikClientResult<RequestBuilder> {
        let token = self.require_token()?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    async fn decode_error(response: Response) -> BirlikClientError {
        let status = response.status();
        let body = response.bytes().await.unwrap_or_default();
        let message = extract_error_message(status, &body);
        warn!("api request failed: status={} message={}", status.as_u16(), message);
        BirlikClientError::from_http_status(status, message)
    }

    /// Отправляет запрос и декодирует JSON-ответ в ожидаемый тип.
    pub(crate) async fn execute<T>(&self, request: RequestBuilder) -> BirlikClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(response.json::<T>().await?)
    }

    /// Отправляет запрос, игнорируя тело успешного ответа.
    pub(crate) async fn execute_empty(&self, request: RequestBuilder) -> BirlikClientResult<()> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(())
    }

    /// Отправляет запрос и читает тело ответа как скачиваемый файл.
    ///
    /// Путь ошибки общий с JSON-запросами: тело не-2xx ответа по-прежнему
    /// JSON. Тело успешного ответа читается в память целиком.
    pub(crate) async fn execute_download(
        &self,
        request: RequestBuilder,
    ) -> BirlikClientResult<DocumentDownload> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let mime_type = mime_from_header(header_str(&response, CONTENT_TYPE));
        let filename = filename_from_disposition(header_str(&response, CONTENT_DISPOSITION));
        let bytes = response.bytes().await?.to_vec();

        Ok(DocumentDownload {
            bytes,
            mime_type,
            filename,
        })
    }
}

fn header_str(response: &Response, name: reqwest::header::HeaderName) -> Option<&str> {
    response.headers().get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MemberListQuery, PageQuery};
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = BirlikClient::new("http://localhost:4000/");
        let full = client.endpoint("/api/news");
        assert_eq!(full, "http://localhost:4000/api/news");
    }

    #[test]
    fn token_round_trip() {
        let mut client = BirlikClient::new("http://localhost:4000");
        assert!(client.get_token().is_none());

        client.set_token("abc");
        assert_eq!(client.get_token(), Some("abc"));

        client.clear_token();
        assert!(client.get_token().is_none());
    }

    #[test]
    fn authed_request_carries_bearer_header() {
        let mut client = BirlikClient::new("http://localhost:4000");
        client.set_token("T");

        let request = client
            .authed(Method::GET, "/api/auth/me")
            .expect("token is set")
            .build()
            .expect("request should build");
        let header = request
            .headers()
            .get(AUTHORIZATION)
            .expect("authorization header must be present");
        assert_eq!(header.to_str().expect("ascii header"), "Bearer T");
    }

    #[test]
    fn public_request_never_sets_bearer_header() {
        let mut client = BirlikClient::new("http://localhost:4000");
        client.set_token("T");

        let request = client
            .request(Method::GET, "/api/news")
            .build()
            .expect("request should build");
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn authed_without_token_fails_fast() {
        let client = BirlikClient::new("http://localhost:4000");
        let result = client.authed(Method::GET, "/api/auth/me");
        assert!(matches!(result, Err(BirlikClientError::MissingToken)));
    }

    #[test]
    fn omitted_query_params_do_not_reach_url() {
        let client = BirlikClient::new("http://localhost:4000");
        let query = PageQuery::default();

        let request = client
            .request(Method::GET, "/api/news")
            .query(&query)
            .build()
            .expect("request should build");
        assert_eq!(request.url().as_str(), "http://localhost:4000/api/news");
    }

    #[test]
    fn provided_query_params_serialize_as_decimal() {
        let client = BirlikClient::new("http://localhost:4000");
        let query = PageQuery {
            page: Some(2),
            limit: Some(10),
        };

        let request = client
            .request(Method::GET, "/api/news")
            .query(&query)
            .build()
            .expect("request should build");
        assert_eq!(
            request.url().as_str(),
            "http://localhost:4000/api/news?page=2&limit=10"
        );
    }

    #[test]
    fn member_query_serializes_search_filters() {
        let client = BirlikClient::new("http://localhost:4000");
        let query = MemberListQuery {
            page: Some(1),
            limit: Some(50),
            search: Some("kaya".to_string()),
            company: None,
        };

        let request = client
            .request(Method::GET, "/api/members")
            .query(&query)
            .build()
            .expect("request should build");
        assert_eq!(
            request.url().as_str(),
            "http://localhost:4000/api/members?page=1&limit=50&search=kaya"
        );
    }
}
