use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use phonebook::StoreError;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// Every variant is rendered as a status code plus a plain-text message.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Unable to read body: {0}")]
    BadRequest(String),

    #[error("Unable to get id: {0}")]
    InvalidId(#[from] uuid::Error),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("404 page not found")]
    RouteNotFound,

    #[error("Unable to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) | ServerError::RouteNotFound => StatusCode::NOT_FOUND,
            ServerError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        (status, self.to_string()).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        ServerError::NotFound(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::Uuid;

    #[test]
    fn status_mapping() {
        let bad_id = "nope".parse::<Uuid>().unwrap_err();
        assert_eq!(
            ServerError::from(bad_id).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::BadRequest("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::from(StoreError::IdNotFound(Uuid::nil())).status_code(),
            StatusCode::NOT_FOUND
        );
        let encode = serde_json::from_str::<u8>("x").unwrap_err();
        assert_eq!(
            ServerError::Encode(encode).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_is_plain_text() {
        let response = ServerError::NotFound("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }
}
