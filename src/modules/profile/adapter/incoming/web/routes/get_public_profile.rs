use actix_web::{get, web, Responder};

use super::get_profile::fetch_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::domain::ProfileResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/public/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile without hidden projects, documents and media", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 404, description = "No profile has been published", body = ErrorResponse),
        (status = 422, description = "Stored profile does not match the schema", body = ErrorResponse),
        (status = 500, description = "Profile source failure", body = ErrorResponse)
    )
)]
#[get("/api/public/profile")]
pub async fn get_public_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_public.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => fetch_error_response(e),
    }
}
