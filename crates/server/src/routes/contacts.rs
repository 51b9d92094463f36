//! Contact endpoints.
//!
//! Every handler stops at the first failure and lets [`ServerError`] pick the
//! status. Bodies are decoded from raw bytes so a malformed, missing, or
//! oversized JSON body is always a 400, whatever the content type says.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use phonebook::{ContactDraft, Uuid};
use serde::Serialize;
use std::sync::Arc;

/// Path remainder after the route prefix. The bare prefix yields "".
type Suffix = Option<Path<String>>;

fn suffix(path: Suffix) -> String {
    path.map(|Path(rest)| rest).unwrap_or_default()
}

fn parse_id(path: Suffix) -> ServerResult<Uuid> {
    Ok(suffix(path).parse::<Uuid>()?)
}

/// Raw request body. Buffering failures (including the size limit) are kept
/// so they surface as a bad request rather than axum's own rejection.
type RawBody = Result<Bytes, BytesRejection>;

fn decode_draft(body: RawBody) -> ServerResult<ContactDraft> {
    let bytes = body.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    serde_json::from_slice(&bytes).map_err(|err| ServerError::BadRequest(err.to_string()))
}

fn json_response<T: Serialize + ?Sized>(value: &T) -> ServerResult<Response> {
    let body = serde_json::to_vec(value).map_err(ServerError::Encode)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// `/list`: every contact in insertion order
pub async fn list_contacts(State(state): State<Arc<ServerState>>) -> ServerResult<Response> {
    tracing::info!("Calling list contacts");
    let store = state.store.read().await;
    json_response(store.contacts())
}

/// `/add`: store the body as a new contact and answer with its id
pub async fn add_contact(
    State(state): State<Arc<ServerState>>,
    body: RawBody,
) -> ServerResult<String> {
    tracing::info!("Calling add contact");
    let draft = decode_draft(body)?;
    let id = state.store.write().await.add(draft);
    tracing::info!(%id, "Contact added");
    Ok(id.to_string())
}

/// `/delete/{id}`
pub async fn delete_contact(
    State(state): State<Arc<ServerState>>,
    path: Suffix,
) -> ServerResult<StatusCode> {
    let id = parse_id(path)?;
    tracing::info!(%id, "Calling delete contact");
    state.store.write().await.remove(id)?;
    Ok(StatusCode::OK)
}

/// `/update/{id}`: full replace, the id in the path always wins
pub async fn update_contact(
    State(state): State<Arc<ServerState>>,
    path: Suffix,
    body: RawBody,
) -> ServerResult<StatusCode> {
    let id = parse_id(path)?;
    tracing::info!(%id, "Calling update contact");
    let draft = decode_draft(body)?;
    state.store.write().await.replace(id, draft)?;
    Ok(StatusCode::OK)
}

/// `/find/{id}`
pub async fn find_contact(
    State(state): State<Arc<ServerState>>,
    path: Suffix,
) -> ServerResult<Response> {
    let id = parse_id(path)?;
    tracing::info!(%id, "Calling find contact");
    let store = state.store.read().await;
    let (contact, _) = store.find_by_id(id)?;
    json_response(contact)
}

/// `/find-by-name/{text}`: first contact whose name contains `text`
pub async fn find_contact_by_name(
    State(state): State<Arc<ServerState>>,
    path: Suffix,
) -> ServerResult<Response> {
    let text = suffix(path);
    tracing::info!(text = %text, "Calling find contact by name");
    let store = state.store.read().await;
    let contact = store.find_by_name(&text)?;
    json_response(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_prefix_is_an_invalid_id() {
        let err = parse_id(None).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_body_is_a_bad_request() {
        let err = decode_draft(Ok(Bytes::new())).unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(_)));
        assert!(decode_draft(Ok(Bytes::from_static(b"{\"name\": 3}"))).is_err());
    }

    #[test]
    fn decode_draft_drops_client_id() {
        let draft = decode_draft(Ok(Bytes::from_static(
            br#"{"id":"x","name":"Ana","number":"111"}"#,
        )))
        .unwrap();
        assert_eq!(draft, ContactDraft::new("Ana", "111", ""));
    }
}
