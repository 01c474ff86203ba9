use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::theme::application::domain::ThemeState;
use crate::modules::theme::application::ports::incoming::use_cases::ThemeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetThemeRequest {
    #[schema(example = true)]
    pub is_dark_mode: bool,
}

/// Set dark mode explicitly
#[utoipa::path(
    put,
    path = "/api/theme",
    tag = "theme",
    request_body = SetThemeRequest,
    responses(
        (status = 200, description = "Theme updated", body = inline(SuccessResponse<ThemeState>)),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Preference could not be persisted", body = ErrorResponse),
    )
)]
#[put("/api/theme")]
pub async fn set_theme_handler(
    req: web::Json<SetThemeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let is_dark_mode = req.into_inner().is_dark_mode;

    match data.theme.set_dark_mode(is_dark_mode).await {
        Ok(state) => {
            info!(is_dark_mode = state.is_dark_mode, "Theme set");
            ApiResponse::success(state)
        }
        Err(ThemeError::PersistFailed(msg)) => {
            error!("Failed to persist theme preference: {}", msg);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "THEME_PERSIST_FAILED",
                "Theme preference could not be saved",
            )
        }
    }
}
