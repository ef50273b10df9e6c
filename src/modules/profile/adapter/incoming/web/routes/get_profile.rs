use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::ports::incoming::use_cases::FetchProfileError;
use crate::modules::profile::domain::ProfileResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Maps a failed profile load to the response envelope.
pub(super) fn fetch_error_response(err: FetchProfileError) -> HttpResponse {
    match err {
        FetchProfileError::NotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        FetchProfileError::InvalidPayload(e) => {
            error!("Stored profile does not match the schema: {}", e);
            ApiResponse::unprocessable("INVALID_PROFILE", &e.to_string(), e.path())
        }
        FetchProfileError::SourceError(msg) => {
            error!("Failed to load profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Full profile payload", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 404, description = "No profile has been published", body = ErrorResponse),
        (status = 422, description = "Stored profile does not match the schema", body = ErrorResponse),
        (status = 500, description = "Profile source failure", body = ErrorResponse)
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.fetch.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => fetch_error_response(e),
    }
}
