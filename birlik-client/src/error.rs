use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `birlik-client`.
///
/// Сообщение каждой классифицированной ошибки — ровно тот текст, который
/// извлечён из тела ответа бэкенда (или запасной `Request failed: <status>`),
/// без префиксов со стороны клиента.
pub enum BirlikClientError {
    /// Ошибка транспорта или декодирования ответа (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Бэкенд ответил 401/403.
    #[error("{0}")]
    Unauthorized(String),

    /// Бэкенд ответил 404.
    #[error("{0}")]
    NotFound(String),

    /// Любой другой не-2xx ответ бэкенда.
    #[error("{message}")]
    Api {
        /// HTTP-статус ответа.
        status: u16,
        /// Нормализованное сообщение об ошибке.
        message: String,
    },

    /// Защищённая операция вызвана без установленного токена.
    #[error("missing auth token")]
    MissingToken,
}

/// Результат операций `birlik-client`.
pub type BirlikClientResult<T> = Result<T, BirlikClientError>;

impl BirlikClientError {
    pub(crate) fn from_http_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Тело ошибки бэкенда. Все поля опциональны: валидационные ответы несут
/// массив `errors`, доменные — `error` или `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ValidationIssue>,
    error: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ValidationIssue {
    msg: Option<String>,
}

/// Извлекает сообщение об ошибке из тела не-2xx ответа.
///
/// Приоритет зафиксирован контрактом бэкенда: первое сообщение из массива
/// `errors`, затем поле `error`, затем `message`, иначе запасной текст
/// `Request failed: <status>`. Непарсящееся тело равнозначно пустому.
pub(crate) fn extract_error_message(status: StatusCode, body: &[u8]) -> String {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

    parsed
        .errors
        .into_iter()
        .find_map(|issue| issue.msg)
        .or(parsed.error)
        .or(parsed.message)
        .unwrap_or_else(|| format!("Request failed: {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_array_wins_over_error_field() {
        let body = br#"{"errors":[{"msg":"A"}],"error":"B"}"#;
        let message = extract_error_message(StatusCode::BAD_REQUEST, body);
        assert_eq!(message, "A");
    }

    #[test]
    fn error_field_wins_over_message_field() {
        let body = br#"{"error":"B","message":"C"}"#;
        let message = extract_error_message(StatusCode::BAD_REQUEST, body);
        assert_eq!(message, "B");
    }

    #[test]
    fn message_field_used_when_alone() {
        let body = br#"{"message":"C"}"#;
        let message = extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert_eq!(message, "C");
    }

    #[test]
    fn empty_validation_entries_are_skipped() {
        let body = br#"{"errors":[{"param":"title"},{"msg":"A"}],"error":"B"}"#;
        let message = extract_error_message(StatusCode::BAD_REQUEST, body);
        assert_eq!(message, "A");
    }

    #[test]
    fn fallback_for_empty_body() {
        let message = extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert_eq!(message, "Request failed: 500");
    }

    #[test]
    fn fallback_for_unparseable_body() {
        let message = extract_error_message(StatusCode::BAD_GATEWAY, b"<html>oops</html>");
        assert_eq!(message, "Request failed: 502");
    }

    #[test]
    fn domain_message_passes_through_unchanged() {
        let body = "{\"error\":\"Duyuru bulunamad\u{131}.\"}".as_bytes().to_vec();
        let message = extract_error_message(StatusCode::NOT_FOUND, &body);
        assert_eq!(message, "Duyuru bulunamad\u{131}.");
    }

    #[test]
    fn status_classification_keeps_message() {
        let err = BirlikClientError::from_http_status(
            StatusCode::UNAUTHORIZED,
            "Request failed: 401".to_string(),
        );
        assert!(matches!(err, BirlikClientError::Unauthorized(_)));
        assert_eq!(err.to_string(), "Request failed: 401");

        let err = BirlikClientError::from_http_status(StatusCode::NOT_FOUND, "yok".to_string());
        assert!(matches!(err, BirlikClientError::NotFound(_)));
        assert_eq!(err.to_string(), "yok");

        let err = BirlikClientError::from_http_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            "A".to_string(),
        );
        match err {
            BirlikClientError::Api { status, ref message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "A");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
