// handler/balances.rs
use std::sync::Arc;

use axum::{extract::Path, response::IntoResponse, routing::post, Extension, Json, Router};
use sqlx::types::BigDecimal;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::paymentdb::PaymentExt,
    dtos::balancedtos::{DepositRequestDto, DepositResponseDto},
    error::HttpError,
    middleware::AuthenticatedProfile,
    utils::decimal::BigDecimalHelpers,
    AppState,
};

pub fn balances_handler() -> Router {
    Router::new().route("/deposit/:user_id", post(deposit))
}

pub async fn deposit(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<DepositRequestDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    let amount = BigDecimal::try_from(body.amount)
        .map_err(|_| HttpError::bad_request("Invalid deposit amount"))?;

    let profile = app_state
        .db_client
        .deposit_funds(user_id, auth.profile.id, amount)
        .await?;

    Ok(Json(DepositResponseDto {
        message: "Deposit successful".to_string(),
        balance: profile.balance.to_f64_or_zero(),
    }))
}
