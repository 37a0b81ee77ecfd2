// handler/admin.rs
use std::sync::Arc;

use axum::{
    extract::Query, response::IntoResponse, routing::get, Extension, Json, Router,
};
use chrono::{DateTime, Utc};

use crate::{
    db::reportdb::ReportExt,
    dtos::admindtos::{parse_date_range, BestClientDto, BestProfessionDto, ReportRangeQueryDto},
    error::HttpError,
    service::{error::MarketError, reports},
    AppState,
};

pub fn admin_handler() -> Router {
    Router::new()
        .route("/best-profession", get(best_profession))
        .route("/best-clients", get(best_clients))
}

pub async fn best_profession(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<ReportRangeQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let (start, end) = report_range(&query)?;

    let rows = app_state
        .db_client
        .get_paid_jobs_between(start, end)
        .await
        .map_err(MarketError::from)?;

    let best = reports::best_profession(&rows)
        .ok_or_else(|| HttpError::not_found("No profession found in given range"))?;

    Ok(Json(BestProfessionDto::from(best)))
}

pub async fn best_clients(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<ReportRangeQueryDto>,
) -> Result<impl IntoResponse, HttpError> {
    let (start, end) = report_range(&query)?;

    let limit = match query.limit {
        Some(limit) if limit < 1 => {
            return Err(HttpError::bad_request("limit must be a positive number"))
        }
        Some(limit) => limit as usize,
        None => reports::DEFAULT_BEST_CLIENTS_LIMIT,
    };

    let rows = app_state
        .db_client
        .get_paid_jobs_between(start, end)
        .await
        .map_err(MarketError::from)?;

    let top: Vec<BestClientDto> = reports::best_clients(&rows, limit)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(top))
}

fn report_range(query: &ReportRangeQueryDto) -> Result<(DateTime<Utc>, DateTime<Utc>), HttpError> {
    let (Some(start), Some(end)) = (query.start.as_deref(), query.end.as_deref()) else {
        return Err(HttpError::bad_request("start and end date are required"));
    };

    parse_date_range(start, end)
        .map_err(|_| HttpError::bad_request("Invalid date format, expected YYYY-MM-DD"))
}
