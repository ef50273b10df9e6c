use actix_web::{post, web, Responder};
use serde_json::Value;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::domain::ProfileResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Validates a candidate payload and echoes it back in normalized form.
///
/// The body is taken as raw JSON so that schema failures can name the exact
/// field instead of surfacing a serde message.
#[utoipa::path(
    post,
    path = "/api/profile/validate",
    tag = "profile",
    request_body = ProfileResponse,
    responses(
        (status = 200, description = "Payload conforms to the schema", body = inline(SuccessResponse<ProfileResponse>)),
        (
            status = 422,
            description = "Payload does not conform",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SCHEMA_VALIDATION_FAILED",
                    "message": "missing required field `intro.email`",
                    "path": "intro.email"
                }
            })
        ),
        (status = 400, description = "Body is not JSON", body = ErrorResponse)
    )
)]
#[post("/api/profile/validate")]
pub async fn validate_profile_handler(
    payload: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.validate.execute(&payload) {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => ApiResponse::unprocessable("SCHEMA_VALIDATION_FAILED", &e.to_string(), e.path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::profile_fixtures::{full_profile_json, minimal_profile_json};

    async fn post_json(body: Value) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .app_data(TestAppStateBuilder::default().build())
                .service(validate_profile_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/profile/validate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_validate_profile_accepts_conforming_payload() {
        let payload = full_profile_json();

        let (status, body) = post_json(payload.clone()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], payload);
    }

    #[actix_web::test]
    async fn test_validate_profile_drops_unknown_keys() {
        let mut payload = minimal_profile_json();
        payload["draft"] = json!(true);

        let (status, body) = post_json(payload).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].get("draft").is_none());
    }

    #[actix_web::test]
    async fn test_validate_profile_reports_missing_field() {
        let mut payload = minimal_profile_json();
        payload["intro"].as_object_mut().unwrap().remove("email");

        let (status, body) = post_json(payload).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "SCHEMA_VALIDATION_FAILED");
        assert_eq!(body["error"]["path"], "intro.email");
        assert_eq!(
            body["error"]["message"],
            "missing required field `intro.email`"
        );
    }

    #[actix_web::test]
    async fn test_validate_profile_rejects_malformed_json() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .app_data(TestAppStateBuilder::default().build())
                .service(validate_profile_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/profile/validate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
