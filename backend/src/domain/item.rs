//! Pantry item types and the batch value objects built from parallel columns.
//!
//! Batch constructors are the only way to obtain a batch value, so every
//! batch reaching a service has already passed the array-length reconciler.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::batch::{ArityMismatch, reconciled_len};
use crate::domain::user::Uid;

/// UPC recorded for manually entered items, which have no barcode.
pub const MANUAL_UPC_SENTINEL: &str = "-1";

/// Server-assigned pantry item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Wrap a raw identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value for persistence adapters.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored pantry item as returned by the inventory listing.
///
/// Serialised field names match the legacy wire contract consumed by the
/// mobile client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Item {
    /// Server-assigned identifier.
    #[serde(rename = "ItemID")]
    #[schema(value_type = i64)]
    pub item_id: ItemId,
    /// Barcode, or [`MANUAL_UPC_SENTINEL`] for manual entries.
    #[serde(rename = "UPC")]
    pub upc: String,
    /// Expiry date of this item.
    #[serde(rename = "ExpireDate")]
    pub expire_date: NaiveDate,
    /// Quantity held.
    #[serde(rename = "ItemCount")]
    pub item_count: i32,
    /// Display name, present for manual entries only.
    #[serde(rename = "ItemName")]
    pub item_name: Option<String>,
}

/// Fields for one item row awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Barcode, or [`MANUAL_UPC_SENTINEL`] for manual entries.
    pub upc: String,
    /// Expiry date of this item.
    pub expire_date: NaiveDate,
    /// Quantity held.
    pub item_count: i32,
    /// Display name, present for manual entries only.
    pub item_name: Option<String>,
}

/// Replacement fields for one existing item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemChange {
    /// Identifier of the row to update.
    pub item_id: ItemId,
    /// New barcode value.
    pub upc: String,
    /// New expiry date.
    pub expire_date: NaiveDate,
    /// New quantity.
    pub item_count: i32,
}

/// Reconciled multi-row insert request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBatch {
    uid: Uid,
    rows: Vec<NewItem>,
}

impl ItemBatch {
    /// Build a scanned-item batch from parallel columns.
    ///
    /// Fails with [`ArityMismatch`] when the columns disagree on length.
    pub fn from_columns(
        uid: Uid,
        upcs: Vec<String>,
        expire_dates: Vec<NaiveDate>,
        item_counts: Vec<i32>,
    ) -> Result<Self, ArityMismatch> {
        reconciled_len(&[upcs.len(), expire_dates.len(), item_counts.len()])?;

        let rows = upcs
            .into_iter()
            .zip(expire_dates)
            .zip(item_counts)
            .map(|((upc, expire_date), item_count)| NewItem {
                upc,
                expire_date,
                item_count,
                item_name: None,
            })
            .collect();
        Ok(Self { uid, rows })
    }

    /// Build a manual-entry batch from parallel columns.
    ///
    /// Manual entries carry a display name per row and share a single UPC
    /// value, normally [`MANUAL_UPC_SENTINEL`], supplied once by the caller.
    pub fn from_manual_columns(
        uid: Uid,
        upc: String,
        expire_dates: Vec<NaiveDate>,
        item_counts: Vec<i32>,
        item_names: Vec<String>,
    ) -> Result<Self, ArityMismatch> {
        reconciled_len(&[expire_dates.len(), item_counts.len(), item_names.len()])?;

        let rows = expire_dates
            .into_iter()
            .zip(item_counts)
            .zip(item_names)
            .map(|((expire_date, item_count), item_name)| NewItem {
                upc: upc.clone(),
                expire_date,
                item_count,
                item_name: Some(item_name),
            })
            .collect();
        Ok(Self { uid, rows })
    }

    /// Owning user.
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// Rows in submission order.
    pub fn rows(&self) -> &[NewItem] {
        &self.rows
    }

    /// True when the batch carries no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reconciled multi-row update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdateBatch {
    uid: Uid,
    rows: Vec<ItemChange>,
}

impl ItemUpdateBatch {
    /// Build an update batch from parallel columns.
    pub fn from_columns(
        uid: Uid,
        item_ids: Vec<ItemId>,
        upcs: Vec<String>,
        expire_dates: Vec<NaiveDate>,
        item_counts: Vec<i32>,
    ) -> Result<Self, ArityMismatch> {
        reconciled_len(&[
            item_ids.len(),
            upcs.len(),
            expire_dates.len(),
            item_counts.len(),
        ])?;

        let rows = item_ids
            .into_iter()
            .zip(upcs)
            .zip(expire_dates)
            .zip(item_counts)
            .map(|(((item_id, upc), expire_date), item_count)| ItemChange {
                item_id,
                upc,
                expire_date,
                item_count,
            })
            .collect();
        Ok(Self { uid, rows })
    }

    /// Owning user.
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// Rows in submission order.
    pub fn rows(&self) -> &[ItemChange] {
        &self.rows
    }
}
