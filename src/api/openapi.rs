use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::profile::domain::entities::{
    Document, Education, Intro, Media, ProfileResponse, Project, ResumeUrl, Technology,
    WorkExperience,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Profile API",
        version = "1.0.0",
        description = "Profile payload served to the portfolio front end",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::get_public_profile_handler,
        crate::profile::adapter::incoming::web::routes::validate_profile_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ProfileResponse>,
            ErrorResponse,
            ErrorDetail,

            // Profile schema
            ProfileResponse,
            Intro,
            Project,
            Technology,
            WorkExperience,
            Education,
            Document,
            Media,
            ResumeUrl
        )
    ),
    tags(
        (name = "profile", description = "Profile payload endpoints"),
    )
)]
pub struct ApiDoc;
