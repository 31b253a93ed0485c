//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations in `backend/migrations`
//! exactly; Diesel uses them for compile-time query validation.

diesel::table! {
    /// Registered user accounts.
    users (uid) {
        /// Primary key, assigned by the database.
        uid -> Int8,
        /// Given name.
        first_name -> Varchar,
        /// Family name.
        last_name -> Varchar,
        /// Unique email address.
        email -> Varchar,
        /// Avatar URL shown in the app.
        profile_url -> Varchar,
        /// Push-messaging token, refreshed on every credential lookup.
        message_token -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Pantry items, one row per stored entry.
    items (item_id) {
        /// Primary key, assigned by the database.
        item_id -> Int8,
        /// Owning user.
        uid -> Int8,
        /// Barcode, or the `-1` sentinel for manual entries.
        upc -> Varchar,
        /// Expiry date.
        expire_date -> Date,
        /// Quantity held.
        item_count -> Int4,
        /// Display name, present for manual entries only.
        item_name -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Dietary preference labels, append-only per user.
    preferences (id) {
        /// Primary key, assigned by the database.
        id -> Int8,
        /// Owning user.
        uid -> Int8,
        /// Preference label as entered in the app.
        preference -> Varchar,
    }
}

diesel::table! {
    /// Dietitians reachable through push messaging.
    dietitians (did) {
        /// Primary key.
        did -> Int8,
        /// Push-messaging token for the dietitian's device.
        message_token -> Varchar,
    }
}

#[cfg(test)]
mod tests {
    const UP_SQL: &str =
        include_str!("../../../migrations/2025-06-01-000000_create_core_tables/up.sql");

    #[test]
    fn user_deletion_is_not_blocked_by_owned_rows() {
        assert!(
            !UP_SQL.to_ascii_lowercase().contains("references"),
            "a foreign key onto users would make account deletion fail \
             while items or preferences still exist"
        );
    }
}
