//! Pantry item handlers.
//!
//! ```text
//! GET  /get/items      ?uid=..
//! POST /add/items      {"uid":..,"upcs":[..],"expire_dates":[..],"item_counts":[..]}
//! POST /add/items_man  {"uid":..,"upc":-1,"expire_dates":[..],"item_counts":[..],"item_names":[..]}
//! POST /update/items   {"uid":..,"item_ids":[..],"upcs":[..],"expire_dates":[..],"item_counts":[..]}
//! POST /delete/items   {"uid":..,"item_ids":[..]}
//! ```
//!
//! The batch endpoints run the array-length reconciler before any element
//! coercion or storage call, so a mismatch always answers 400 with the
//! endpoint's historical literal.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::MutationOutcome;
use crate::domain::batch::reconciled_len;
use crate::domain::item::{Item, ItemBatch, ItemUpdateBatch};
use crate::domain::Error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, count_array_field, date_array_field, id_array_field, lenient_uid, raw_array_field,
    require_field, string_array_field, uid_field, uid_param, upc_array_field, upc_field,
};
use crate::inbound::http::{ApiResult, NO_ROWS_DELETED_BODY};

const UID: FieldName = FieldName::new("uid");
const UPC: FieldName = FieldName::new("upc");
const UPCS: FieldName = FieldName::new("upcs");
const EXPIRE_DATES: FieldName = FieldName::new("expire_dates");
const ITEM_COUNTS: FieldName = FieldName::new("item_counts");
const ITEM_NAMES: FieldName = FieldName::new("item_names");
const ITEM_IDS: FieldName = FieldName::new("item_ids");

/// Literal answered by `/add/items` on an arity mismatch.
pub(crate) const ADD_ITEMS_ARITY_BODY: &str = "Array lengths must match.";
/// Literal answered by `/add/items_man` and `/update/items` on a mismatch.
pub(crate) const SHARED_ARITY_BODY: &str = "Arrays should have the same length";

/// Query parameters for `GET /get/items`.
#[derive(Debug, Deserialize)]
pub struct GetItemsQuery {
    /// Owning user.
    pub uid: Option<String>,
}

/// List a user's pantry items.
///
/// A missing uid parameter answers 404; the legacy router had no route for
/// the bare path.
#[utoipa::path(
    get,
    path = "/get/items",
    params(("uid" = Option<String>, Query, description = "Owning user identifier")),
    responses(
        (status = 200, description = "Items for the user", body = [Item]),
        (status = 404, description = "Missing uid parameter"),
        (status = 500, description = "Malformed uid or storage failure")
    ),
    tags = ["items"],
    operation_id = "getItems"
)]
#[get("/get/items")]
pub async fn get_items(
    state: web::Data<HttpState>,
    query: web::Query<GetItemsQuery>,
) -> ApiResult<HttpResponse> {
    let Some(raw) = query.uid.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Err(Error::not_found("uid query parameter is required"));
    };
    let uid = uid_param(Some(raw), UID)?;
    let items = state.items.list(uid).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Request body for `POST /add/items` (scanned entries).
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddItemsRequest {
    /// Owning user, as integer or integer-valued string.
    #[serde(default)]
    pub uid: Option<Value>,
    /// One scanned barcode per row.
    #[serde(default)]
    pub upcs: Option<Value>,
    /// One `YYYY-MM-DD` expiry date per row.
    #[serde(default)]
    pub expire_dates: Option<Value>,
    /// One quantity per row.
    #[serde(default)]
    pub item_counts: Option<Value>,
}

/// Success body for `POST /add/items`; this endpoint alone answers JSON.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AddItemsResponse {
    /// Fixed success message.
    pub message: String,
}

/// Insert scanned items from parallel columns.
#[utoipa::path(
    post,
    path = "/add/items",
    request_body = AddItemsRequest,
    responses(
        (status = 200, description = "All rows inserted", body = AddItemsResponse),
        (status = 400, description = "Parallel arrays disagree on length"),
        (status = 500, description = "Missing or malformed field, or storage failure")
    ),
    tags = ["items"],
    operation_id = "addItems"
)]
#[post("/add/items")]
pub async fn add_items(
    state: web::Data<HttpState>,
    payload: web::Json<AddItemsRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let upcs = require_field(body.upcs.as_ref(), UPCS)?;
    let dates = require_field(body.expire_dates.as_ref(), EXPIRE_DATES)?;
    let counts = require_field(body.item_counts.as_ref(), ITEM_COUNTS)?;

    reconciled_len(&[
        raw_array_field(upcs, UPCS)?.len(),
        raw_array_field(dates, EXPIRE_DATES)?.len(),
        raw_array_field(counts, ITEM_COUNTS)?.len(),
    ])
    .map_err(|_| Error::arity_mismatch(ADD_ITEMS_ARITY_BODY))?;

    let uid = uid_field(require_field(body.uid.as_ref(), UID)?, UID)?;
    let batch = ItemBatch::from_columns(
        uid,
        upc_array_field(upcs, UPCS)?,
        date_array_field(dates, EXPIRE_DATES)?,
        count_array_field(counts, ITEM_COUNTS)?,
    )
    .map_err(|_| Error::arity_mismatch(ADD_ITEMS_ARITY_BODY))?;

    let written = state.items.add_batch(&batch).await?;
    debug!(%uid, written, "scanned item batch stored");
    Ok(HttpResponse::Ok().json(AddItemsResponse {
        message: "SUCCESS ADDED ITEMS".to_owned(),
    }))
}

/// Request body for `POST /add/items_man` (manual entries).
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddItemsManualRequest {
    /// Owning user, as integer or integer-valued string.
    #[serde(default)]
    pub uid: Option<Value>,
    /// Shared UPC for every row, normally the `-1` sentinel.
    #[serde(default)]
    pub upc: Option<Value>,
    /// One `YYYY-MM-DD` expiry date per row.
    #[serde(default)]
    pub expire_dates: Option<Value>,
    /// One quantity per row.
    #[serde(default)]
    pub item_counts: Option<Value>,
    /// One display name per row.
    #[serde(default)]
    pub item_names: Option<Value>,
}

/// Insert manually entered items from parallel columns.
#[utoipa::path(
    post,
    path = "/add/items_man",
    request_body = AddItemsManualRequest,
    responses(
        (status = 200, description = "All rows inserted"),
        (status = 400, description = "Parallel arrays disagree on length"),
        (status = 500, description = "Missing or malformed field, or storage failure")
    ),
    tags = ["items"],
    operation_id = "addItemsManual"
)]
#[post("/add/items_man")]
pub async fn add_items_manual(
    state: web::Data<HttpState>,
    payload: web::Json<AddItemsManualRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let dates = require_field(body.expire_dates.as_ref(), EXPIRE_DATES)?;
    let counts = require_field(body.item_counts.as_ref(), ITEM_COUNTS)?;
    let names = require_field(body.item_names.as_ref(), ITEM_NAMES)?;

    reconciled_len(&[
        raw_array_field(dates, EXPIRE_DATES)?.len(),
        raw_array_field(counts, ITEM_COUNTS)?.len(),
        raw_array_field(names, ITEM_NAMES)?.len(),
    ])
    .map_err(|_| Error::arity_mismatch(SHARED_ARITY_BODY))?;

    let uid = uid_field(require_field(body.uid.as_ref(), UID)?, UID)?;
    let upc = upc_field(require_field(body.upc.as_ref(), UPC)?, UPC)?;
    let batch = ItemBatch::from_manual_columns(
        uid,
        upc,
        date_array_field(dates, EXPIRE_DATES)?,
        count_array_field(counts, ITEM_COUNTS)?,
        string_array_field(names, ITEM_NAMES)?,
    )
    .map_err(|_| Error::arity_mismatch(SHARED_ARITY_BODY))?;

    let written = state.items.add_batch(&batch).await?;
    debug!(%uid, written, "manual item batch stored");
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("SUCCESS ADDED ITEMS MANUAL"))
}

/// Request body for `POST /update/items`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateItemsRequest {
    /// Owning user, as integer or integer-valued string.
    #[serde(default)]
    pub uid: Option<Value>,
    /// One existing item identifier per row.
    #[serde(default)]
    pub item_ids: Option<Value>,
    /// One replacement barcode per row, as string or number.
    #[serde(default)]
    pub upcs: Option<Value>,
    /// One replacement `YYYY-MM-DD` expiry date per row.
    #[serde(default)]
    pub expire_dates: Option<Value>,
    /// One replacement quantity per row.
    #[serde(default)]
    pub item_counts: Option<Value>,
}

/// Replace fields of existing items from parallel columns.
///
/// Rows whose item id matches nothing are skipped silently, as the legacy
/// storage layer did; the success body does not distinguish them.
#[utoipa::path(
    post,
    path = "/update/items",
    request_body = UpdateItemsRequest,
    responses(
        (status = 200, description = "Batch dispatched"),
        (status = 400, description = "Parallel arrays disagree on length"),
        (status = 500, description = "Missing or malformed field, or storage failure")
    ),
    tags = ["items"],
    operation_id = "updateItems"
)]
#[post("/update/items")]
pub async fn update_items(
    state: web::Data<HttpState>,
    payload: web::Json<UpdateItemsRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let ids = require_field(body.item_ids.as_ref(), ITEM_IDS)?;
    let upcs = require_field(body.upcs.as_ref(), UPCS)?;
    let dates = require_field(body.expire_dates.as_ref(), EXPIRE_DATES)?;
    let counts = require_field(body.item_counts.as_ref(), ITEM_COUNTS)?;

    reconciled_len(&[
        raw_array_field(ids, ITEM_IDS)?.len(),
        raw_array_field(upcs, UPCS)?.len(),
        raw_array_field(dates, EXPIRE_DATES)?.len(),
        raw_array_field(counts, ITEM_COUNTS)?.len(),
    ])
    .map_err(|_| Error::arity_mismatch(SHARED_ARITY_BODY))?;

    let uid = uid_field(require_field(body.uid.as_ref(), UID)?, UID)?;
    let batch = ItemUpdateBatch::from_columns(
        uid,
        id_array_field(ids, ITEM_IDS)?,
        upc_array_field(upcs, UPCS)?,
        date_array_field(dates, EXPIRE_DATES)?,
        count_array_field(counts, ITEM_COUNTS)?,
    )
    .map_err(|_| Error::arity_mismatch(SHARED_ARITY_BODY))?;

    let report = state.items.update_batch(&batch).await?;
    if !report.any_applied() && report.dispatched() > 0 {
        debug!(%uid, rows = report.dispatched(), "item update batch matched no rows");
    }
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("SUCCESS Updated items"))
}

/// Request body for `POST /delete/items`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteItemsRequest {
    /// Owning user, as integer or integer-valued string.
    #[serde(default)]
    pub uid: Option<Value>,
    /// Item identifiers to delete.
    #[serde(default)]
    pub item_ids: Option<Value>,
}

/// Delete the listed items for a user.
#[utoipa::path(
    post,
    path = "/delete/items",
    request_body = DeleteItemsRequest,
    responses(
        (status = 200, description = "Deleted, or no rows matched"),
        (status = 500, description = "Missing uid or item ids, or storage failure")
    ),
    tags = ["items"],
    operation_id = "deleteItems"
)]
#[post("/delete/items")]
pub async fn delete_items(
    state: web::Data<HttpState>,
    payload: web::Json<DeleteItemsRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let raw_uid = require_field(body.uid.as_ref(), UID)?;
    let item_ids = id_array_field(require_field(body.item_ids.as_ref(), ITEM_IDS)?, ITEM_IDS)?;

    let text = match lenient_uid(raw_uid) {
        Some(uid) => match state.items.delete_items(uid, &item_ids).await? {
            MutationOutcome::Applied(_) => "DELETED ITEM",
            MutationOutcome::NoRowsMatched => NO_ROWS_DELETED_BODY,
        },
        None => NO_ROWS_DELETED_BODY,
    };
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(text))
}
