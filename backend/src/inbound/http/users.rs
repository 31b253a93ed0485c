//! User account handlers.
//!
//! ```text
//! POST /add/users          {"first_name":..,"last_name":..,"email":..,"profile_url":..,"message_token":..}
//! GET  /get/users          ?email=..&token=..
//! GET  /update/users       ?uid=..&first_name=..&last_name=..&email=..&profile_url=..
//! GET  /delete/users       ?uid=..
//! ```
//!
//! Update and delete ride on GET with query parameters; that is the shape the
//! deployed mobile client sends and it cannot be changed here.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::user::{NewUser, Uid, UserProfile, UserUpdate};
use crate::domain::{Error, MutationOutcome};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, required_param, require_field, string_field, uid_param,
};
use crate::inbound::http::{ApiResult, NO_ROWS_DELETED_BODY};

const FIRST_NAME: FieldName = FieldName::new("first_name");
const LAST_NAME: FieldName = FieldName::new("last_name");
const EMAIL: FieldName = FieldName::new("email");
const PROFILE_URL: FieldName = FieldName::new("profile_url");
const MESSAGE_TOKEN: FieldName = FieldName::new("message_token");
const TOKEN: FieldName = FieldName::new("token");
const UID: FieldName = FieldName::new("uid");

/// Registration request body for `POST /add/users`.
///
/// Fields are raw JSON values so absence and wrong shapes surface through the
/// field checker rather than the framework extractor.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddUserRequest {
    /// Given name.
    #[serde(default)]
    pub first_name: Option<serde_json::Value>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<serde_json::Value>,
    /// Unique email address.
    #[serde(default)]
    pub email: Option<serde_json::Value>,
    /// Avatar URL.
    #[serde(default)]
    pub profile_url: Option<serde_json::Value>,
    /// Push-messaging token for the registering device.
    #[serde(default)]
    pub message_token: Option<serde_json::Value>,
}

impl TryFrom<AddUserRequest> for NewUser {
    type Error = Error;

    fn try_from(body: AddUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: string_field(require_field(body.first_name.as_ref(), FIRST_NAME)?, FIRST_NAME)?,
            last_name: string_field(require_field(body.last_name.as_ref(), LAST_NAME)?, LAST_NAME)?,
            email: string_field(require_field(body.email.as_ref(), EMAIL)?, EMAIL)?,
            profile_url: string_field(
                require_field(body.profile_url.as_ref(), PROFILE_URL)?,
                PROFILE_URL,
            )?,
            message_token: string_field(
                require_field(body.message_token.as_ref(), MESSAGE_TOKEN)?,
                MESSAGE_TOKEN,
            )?,
        })
    }
}

/// Registration response carrying the server-assigned identifier.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RegisteredUser {
    /// Assigned user identifier.
    #[serde(rename = "UID")]
    #[schema(value_type = i64)]
    pub uid: Uid,
}

/// Register a new user account.
#[utoipa::path(
    post,
    path = "/add/users",
    request_body = AddUserRequest,
    responses(
        (status = 200, description = "User registered", body = RegisteredUser),
        (status = 500, description = "Missing or malformed field, or storage failure")
    ),
    tags = ["users"],
    operation_id = "addUser"
)]
#[post("/add/users")]
pub async fn add_user(
    state: web::Data<HttpState>,
    payload: web::Json<AddUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = NewUser::try_from(payload.into_inner())?;
    let uid = state.users.register(&user).await?;
    Ok(HttpResponse::Ok().json(RegisteredUser { uid }))
}

/// Query parameters for `GET /get/users`.
#[derive(Debug, Deserialize)]
pub struct GetUserQuery {
    /// Email to look up.
    pub email: Option<String>,
    /// Current device messaging token; replaces the stored one on a hit.
    pub token: Option<String>,
}

/// Look up a profile by email, refreshing the stored messaging token.
///
/// An unknown email answers 500, not 404: the deployed client treats any
/// non-200 from this endpoint as "not registered" and only this status was
/// ever observed in the field.
#[utoipa::path(
    get,
    path = "/get/users",
    params(
        ("email" = Option<String>, Query, description = "Account email"),
        ("token" = Option<String>, Query, description = "Device messaging token")
    ),
    responses(
        (status = 200, description = "Profile found", body = UserProfile),
        (status = 500, description = "Unknown email, missing parameter, or storage failure")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/get/users")]
pub async fn get_user(
    state: web::Data<HttpState>,
    query: web::Query<GetUserQuery>,
) -> ApiResult<HttpResponse> {
    let email = required_param(query.email.as_deref(), EMAIL)?;
    let token = required_param(query.token.as_deref(), TOKEN)?;
    let profile = state
        .users
        .profile_for_credentials(email, token)
        .await?
        .ok_or_else(|| Error::internal(format!("no account for email {email}")))?;
    Ok(HttpResponse::Ok().json(profile))
}

/// Query parameters for `GET /update/users`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserQuery {
    /// Account to update.
    pub uid: Option<String>,
    /// Replacement given name.
    pub first_name: Option<String>,
    /// Replacement family name.
    pub last_name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement avatar URL.
    pub profile_url: Option<String>,
}

/// Replace an account's profile fields.
///
/// Answers the success body even when the uid matched no rows; the legacy
/// storage layer reported zero affected rows as a completed update.
#[utoipa::path(
    get,
    path = "/update/users",
    params(
        ("uid" = Option<String>, Query, description = "Account identifier"),
        ("first_name" = Option<String>, Query, description = "Replacement given name"),
        ("last_name" = Option<String>, Query, description = "Replacement family name"),
        ("email" = Option<String>, Query, description = "Replacement email"),
        ("profile_url" = Option<String>, Query, description = "Replacement avatar URL")
    ),
    responses(
        (status = 200, description = "Update applied"),
        (status = 500, description = "Missing or malformed parameter, or storage failure")
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[get("/update/users")]
pub async fn update_user(
    state: web::Data<HttpState>,
    query: web::Query<UpdateUserQuery>,
) -> ApiResult<HttpResponse> {
    let uid = uid_param(query.uid.as_deref(), UID)?;
    let update = UserUpdate {
        first_name: required_param(query.first_name.as_deref(), FIRST_NAME)?.to_owned(),
        last_name: required_param(query.last_name.as_deref(), LAST_NAME)?.to_owned(),
        email: required_param(query.email.as_deref(), EMAIL)?.to_owned(),
        profile_url: required_param(query.profile_url.as_deref(), PROFILE_URL)?.to_owned(),
    };
    if state.users.update_profile(uid, &update).await? == MutationOutcome::NoRowsMatched {
        debug!(%uid, "profile update matched no rows");
    }
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Success update user"))
}

/// Query parameters for `GET /delete/users`.
#[derive(Debug, Deserialize)]
pub struct DeleteUserQuery {
    /// Account to delete.
    pub uid: Option<String>,
}

/// Delete an account.
///
/// A syntactically non-integer uid matches no rows by definition and answers
/// 200 with the no-rows body rather than a validation failure.
#[utoipa::path(
    get,
    path = "/delete/users",
    params(("uid" = Option<String>, Query, description = "Account identifier")),
    responses(
        (status = 200, description = "Deleted, or no rows matched"),
        (status = 500, description = "Missing uid or storage failure")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[get("/delete/users")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    query: web::Query<DeleteUserQuery>,
) -> ApiResult<HttpResponse> {
    let raw = required_param(query.uid.as_deref(), UID)?;
    let body = match raw.parse().map(Uid::new) {
        Ok(uid) => match state.users.remove(uid).await? {
            MutationOutcome::Applied(_) => "DELETED USER",
            MutationOutcome::NoRowsMatched => NO_ROWS_DELETED_BODY,
        },
        Err(_) => NO_ROWS_DELETED_BODY,
    };
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body))
}
