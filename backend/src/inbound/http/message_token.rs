//! Dietitian messaging-token lookup handler.
//!
//! ```text
//! GET /get/messageToken/{did}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Token payload for a successful lookup.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageTokenResponse {
    /// Push-messaging token registered by the dietitian's device.
    #[serde(rename = "MessageToken")]
    pub message_token: String,
}

/// Resolve a dietitian's push-messaging token by their identifier.
///
/// An unknown or non-numeric identifier answers 404, the same status the
/// router gives a missing path segment.
#[utoipa::path(
    get,
    path = "/get/messageToken/{did}",
    params(("did" = String, Path, description = "Dietitian identifier")),
    responses(
        (status = 200, description = "Token found", body = MessageTokenResponse),
        (status = 404, description = "Unknown dietitian"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["dietitians"],
    operation_id = "getMessageToken"
)]
#[get("/get/messageToken/{did}")]
pub async fn get_message_token(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let did: i64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::not_found(format!("no message token for dietitian {raw}")))?;
    let message_token = state
        .dietitians
        .find_message_token(did)
        .await
        .map_err(|err| Error::storage(format!("dietitian token lookup failed: {err}")))?
        .ok_or_else(|| Error::not_found(format!("no message token for dietitian {did}")))?;
    Ok(HttpResponse::Ok().json(MessageTokenResponse { message_token }))
}
