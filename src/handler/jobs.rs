// handler/jobs.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::{
    db::{contractdb::ContractExt, paymentdb::PaymentExt},
    dtos::jobdtos::PaymentResponseDto,
    error::HttpError,
    middleware::AuthenticatedProfile,
    service::error::MarketError,
    AppState,
};

pub fn jobs_handler() -> Router {
    Router::new()
        .route("/unpaid", get(list_unpaid_jobs))
        .route("/:job_id/pay", post(pay_job))
}

pub async fn list_unpaid_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<impl IntoResponse, HttpError> {
    let jobs = app_state
        .db_client
        .get_unpaid_jobs_for_party(auth.profile.id)
        .await
        .map_err(MarketError::from)?;

    if jobs.is_empty() {
        return Err(HttpError::not_found("No unpaid jobs found"));
    }

    Ok(Json(jobs))
}

pub async fn pay_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .pay_job(job_id, auth.profile.id)
        .await?;

    tracing::info!("job {} paid by client {}", job.id, auth.profile.id);

    Ok(Json(PaymentResponseDto {
        message: "Payment successful".to_string(),
    }))
}
