use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use mlvt_core::payment::SignPaymentRequest;
use mlvt_core::{AppError, MomoPaymentRequest};
use std::sync::Arc;
use validator::Validate;

/// Build and sign a MoMo payment request with the configured partner credentials.
#[utoipa::path(
    post,
    path = "/api/v1/payments/momo/signature",
    tag = "payments",
    request_body = SignPaymentRequest,
    responses(
        (status = 200, description = "Signed payment request", body = MomoPaymentRequest),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 503, description = "Payment signing not configured", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(order_id = %request.order_id, operation = "sign_momo_payment"))]
pub async fn sign_momo_payment(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<SignPaymentRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let momo = state.momo.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("payment signing is not configured".to_string())
    })?;
    if let Err(errors) = request.validate() {
        tracing::debug!(errors = %errors, "Payment request failed validation");
        return Err(AppError::from(errors).into());
    }

    let mut payment = MomoPaymentRequest::new(
        &momo.partner_code,
        &momo.access_key,
        request.request_id,
        request.amount,
        request.order_id,
    );
    payment.sign(&momo.secret_key)?;

    tracing::info!(request_id = %payment.request_id, "Payment request signed");
    Ok(Json(payment))
}
