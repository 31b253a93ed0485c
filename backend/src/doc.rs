//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering every HTTP
//! endpoint and the request and response schemas they exchange. Debug builds
//! serve the document at `/api-docs/openapi.json` for external tooling.

use utoipa::OpenApi;

use crate::domain::item::Item;
use crate::domain::user::UserProfile;
use crate::inbound::http::items::{
    AddItemsManualRequest, AddItemsRequest, AddItemsResponse, DeleteItemsRequest,
    UpdateItemsRequest,
};
use crate::inbound::http::message_token::MessageTokenResponse;
use crate::inbound::http::preferences::AddPreferencesRequest;
use crate::inbound::http::users::{AddUserRequest, RegisteredUser};

/// OpenAPI document for the pantry REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry backend API",
        description = "HTTP interface for household food inventory, user \
                       accounts, dietary preferences, and dietitian messaging \
                       tokens."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::add_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::items::get_items,
        crate::inbound::http::items::add_items,
        crate::inbound::http::items::add_items_manual,
        crate::inbound::http::items::update_items,
        crate::inbound::http::items::delete_items,
        crate::inbound::http::preferences::add_preferences,
        crate::inbound::http::message_token::get_message_token,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserProfile,
        Item,
        AddUserRequest,
        RegisteredUser,
        AddItemsRequest,
        AddItemsResponse,
        AddItemsManualRequest,
        UpdateItemsRequest,
        DeleteItemsRequest,
        AddPreferencesRequest,
        MessageTokenResponse,
    )),
    tags(
        (name = "users", description = "User account registration and profile upkeep"),
        (name = "items", description = "Pantry inventory and batch reconciliation"),
        (name = "preferences", description = "Dietary preference labels"),
        (name = "dietitians", description = "Dietitian messaging-token lookup"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn user_profile_schema_keeps_the_legacy_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("UserProfile").expect("UserProfile schema");

        assert_object_schema_has_field(schema, "UID");
        assert_object_schema_has_field(schema, "Email");
    }

    #[test]
    fn item_schema_keeps_the_legacy_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get("Item").expect("Item schema");

        assert_object_schema_has_field(schema, "ItemID");
        assert_object_schema_has_field(schema, "ExpireDate");
    }

    #[test]
    fn every_legacy_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/add/users",
            "/get/users",
            "/update/users",
            "/delete/users",
            "/get/items",
            "/add/items",
            "/add/items_man",
            "/update/items",
            "/delete/items",
            "/add/pref",
            "/get/messageToken/{did}",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "path '{path}' should be documented"
            );
        }
    }
}
