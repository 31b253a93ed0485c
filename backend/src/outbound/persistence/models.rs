//! Internal Diesel row structs.
//!
//! Implementation details of the persistence layer, never exposed to the
//! domain. They exist to satisfy Diesel's type requirements for queries and
//! mutations.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{items, preferences, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub uid: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_url: String,
    #[expect(dead_code, reason = "read back only through the dedicated token update")]
    pub message_token: Option<String>,
}

/// Insertable struct for registering a user.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub profile_url: &'a str,
    pub message_token: Option<&'a str>,
}

/// Changeset struct for replacing a user's profile fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserProfileChangeset<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub profile_url: &'a str,
}

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub item_id: i64,
    #[expect(dead_code, reason = "listing is already scoped to the owning user")]
    pub uid: i64,
    pub upc: String,
    pub expire_date: NaiveDate,
    pub item_count: i32,
    pub item_name: Option<String>,
}

/// Insertable struct for one pantry item row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub uid: i64,
    pub upc: &'a str,
    pub expire_date: NaiveDate,
    pub item_count: i32,
    pub item_name: Option<&'a str>,
}

/// Changeset struct for replacing one item's fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = items)]
pub(crate) struct ItemChangeset<'a> {
    pub upc: &'a str,
    pub expire_date: NaiveDate,
    pub item_count: i32,
}

/// Insertable struct for one preference label.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = preferences)]
pub(crate) struct NewPreferenceRow<'a> {
    pub uid: i64,
    pub preference: &'a str,
}
