use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::ContactForm;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactError, ContactReceipt,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Send a contact message
///
/// Validates the form and relays it to the site owner by email.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message delivered", body = inline(SuccessResponse<ContactReceipt>)),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 409, description = "Identical submission already in flight", body = ErrorResponse),
        (status = 502, description = "Mail server rejected or failed", body = ErrorResponse),
        (status = 504, description = "Mail server did not answer in time", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit.execute(req.into_inner()).await {
        Ok(receipt) => ApiResponse::success(receipt),

        Err(ContactError::Validation(e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(ContactError::InProgress) => ApiResponse::conflict(
            "CONTACT_SUBMISSION_IN_PROGRESS",
            "This message is already being sent",
        ),

        Err(ContactError::Timeout(_)) => ApiResponse::gateway_timeout(
            "CONTACT_TIMEOUT",
            "The mail server did not respond in time, please try again",
        ),

        Err(ContactError::DeliveryFailed(_)) => ApiResponse::bad_gateway(
            "CONTACT_DELIVERY_FAILED",
            "Your message could not be delivered, please try again later",
        ),

        Err(ContactError::InvalidState(e)) => {
            error!("Contact submission in invalid state: {}", e);
            ApiResponse::internal_error()
        }
    }
}
