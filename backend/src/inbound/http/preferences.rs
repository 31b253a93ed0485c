//! Dietary preference handlers.
//!
//! ```text
//! POST /add/pref  {"uid":..,"preferences":["Vegan",..]}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::PreferenceOutcome;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, require_field, string_array_field, uid_field,
};

const UID: FieldName = FieldName::new("uid");
const PREFERENCES: FieldName = FieldName::new("preferences");

/// Request body for `POST /add/pref`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddPreferencesRequest {
    /// Owning user, as integer or integer-valued string.
    #[serde(default)]
    pub uid: Option<Value>,
    /// Preference labels to append to the user's profile.
    #[serde(default)]
    pub preferences: Option<Value>,
}

/// Append dietary preference labels to a user's profile.
///
/// An empty list is a successful no-op with its own body; the client sends
/// one whenever the preferences screen is saved untouched.
#[utoipa::path(
    post,
    path = "/add/pref",
    request_body = AddPreferencesRequest,
    responses(
        (status = 200, description = "Preferences stored, or nothing to add"),
        (status = 500, description = "Missing or malformed field, or storage failure")
    ),
    tags = ["preferences"],
    operation_id = "addPreferences"
)]
#[post("/add/pref")]
pub async fn add_preferences(
    state: web::Data<HttpState>,
    payload: web::Json<AddPreferencesRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let uid = uid_field(require_field(body.uid.as_ref(), UID)?, UID)?;
    let preferences =
        string_array_field(require_field(body.preferences.as_ref(), PREFERENCES)?, PREFERENCES)?;

    let text = match state.preferences.add_preferences(uid, &preferences).await? {
        PreferenceOutcome::Added(_) => "SUCCESS ADDED Pref",
        PreferenceOutcome::NothingToAdd => "No preferences provided",
    };
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        FixtureDietitianTokenQuery, FixtureItemRepository, FixtureUserRepository,
        MockPreferenceRepository,
    };
    use crate::domain::user::Uid;
    use crate::domain::{ItemService, PreferenceService, UserService};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use mockall::predicate::eq;
    use serde_json::json;
    use std::sync::Arc;

    fn state_with_preferences(repo: MockPreferenceRepository) -> HttpState {
        HttpState::new(
            UserService::new(Arc::new(FixtureUserRepository)),
            ItemService::new(Arc::new(FixtureItemRepository)),
            PreferenceService::new(Arc::new(repo)),
            Arc::new(FixtureDietitianTokenQuery),
        )
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(state)).service(add_preferences)
    }

    #[actix_web::test]
    async fn preferences_are_stored_and_acknowledged() {
        let mut repo = MockPreferenceRepository::new();
        repo.expect_insert()
            .with(eq(Uid::new(3)), eq("Vegan"))
            .times(1)
            .returning(|_, _| Ok(()));
        let app = actix_test::init_service(test_app(state_with_preferences(repo))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/add/pref")
                .set_json(json!({ "uid": 3, "preferences": ["Vegan"] }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert_eq!(body.as_ref(), b"SUCCESS ADDED Pref");
    }

    #[actix_web::test]
    async fn an_empty_list_answers_the_no_preferences_body() {
        let mut repo = MockPreferenceRepository::new();
        repo.expect_insert().times(0);
        let app = actix_test::init_service(test_app(state_with_preferences(repo))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/add/pref")
                .set_json(json!({ "uid": 3, "preferences": [] }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert_eq!(body.as_ref(), b"No preferences provided");
    }

    #[actix_web::test]
    async fn a_missing_uid_is_a_500() {
        let mut repo = MockPreferenceRepository::new();
        repo.expect_insert().times(0);
        let app = actix_test::init_service(test_app(state_with_preferences(repo))).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/add/pref")
                .set_json(json!({ "preferences": ["Preference1", "Preference2"] }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
