// handler/contracts.rs
use std::sync::Arc;

use axum::{extract::Path, response::IntoResponse, routing::get, Extension, Json, Router};
use uuid::Uuid;

use crate::{
    db::contractdb::ContractExt, error::HttpError, middleware::AuthenticatedProfile,
    service::error::MarketError, AppState,
};

pub fn contracts_handler() -> Router {
    Router::new()
        .route("/", get(list_contracts))
        .route("/:id", get(get_contract))
}

pub async fn get_contract(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedProfile>,
    Path(contract_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let contract = app_state
        .db_client
        .get_contract(contract_id)
        .await
        .map_err(MarketError::from)?
        .ok_or_else(|| HttpError::not_found("Contract not found"))?;

    if !contract.is_party(auth.profile.id) {
        return Err(HttpError::forbidden(
            "Forbidden: You do not own this contract",
        ));
    }

    Ok(Json(contract))
}

/// Non-terminated contracts for the requester. An empty result surfaces as
/// 404 rather than an empty array.
pub async fn list_contracts(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedProfile>,
) -> Result<impl IntoResponse, HttpError> {
    let contracts = app_state
        .db_client
        .get_contracts_for_party(auth.profile.id)
        .await
        .map_err(MarketError::from)?;

    if contracts.is_empty() {
        return Err(HttpError::not_found("No contracts found"));
    }

    Ok(Json(contracts))
}
