//! Contact form endpoint.
//!
//! ```text
//! POST /api/v1/contact {"name":"Ada","email":"ada@example.com","message":"..."}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ContactSubmission, NewContactSubmission};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{validate_email, validate_min_chars};
use crate::inbound::http::{ApiError, ApiResult};

/// Contact form payload for `POST /api/v1/contact`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body, at least ten characters.
    pub message: String,
    /// Optional company name.
    #[serde(default)]
    pub company: Option<String>,
}

/// Store a contact form submission.
///
/// Validation happens here; the store accepts the submission as-is and the
/// record is never read back by any endpoint.
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Submission stored", body = ContactSubmission),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    validate_email("email", &payload.email)?;
    validate_min_chars(
        "message",
        &payload.message,
        10,
        "Message must be at least 10 characters",
    )?;

    let submission = state
        .store
        .create_contact_submission(NewContactSubmission {
            name: payload.name,
            email: payload.email,
            message: payload.message,
            company: payload.company,
        })
        .await;
    Ok(HttpResponse::Created().json(submission))
}
