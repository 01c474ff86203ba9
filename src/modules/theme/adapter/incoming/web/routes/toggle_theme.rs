use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::theme::application::domain::ThemeState;
use crate::modules::theme::application::ports::incoming::use_cases::ThemeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Toggle dark mode
///
/// Flips the flag and persists it before answering.
#[utoipa::path(
    post,
    path = "/api/theme/toggle",
    tag = "theme",
    responses(
        (status = 200, description = "Theme toggled", body = inline(SuccessResponse<ThemeState>)),
        (status = 500, description = "Preference could not be persisted", body = ErrorResponse),
    )
)]
#[post("/api/theme/toggle")]
pub async fn toggle_theme_handler(data: web::Data<AppState>) -> impl Responder {
    match data.theme.toggle().await {
        Ok(state) => {
            info!(is_dark_mode = state.is_dark_mode, "Theme toggled");
            ApiResponse::success(state)
        }
        Err(ThemeError::PersistFailed(msg)) => {
            error!("Failed to persist theme toggle: {}", msg);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "THEME_PERSIST_FAILED",
                "Theme preference could not be saved",
            )
        }
    }
}
