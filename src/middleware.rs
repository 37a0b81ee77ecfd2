use std::sync::Arc;

use axum::{extract::Request, middleware::Next, response::IntoResponse, Extension};
use uuid::Uuid;

use crate::{
    db::profiledb::ProfileExt,
    error::{ErrorMessage, HttpError},
    models::profilemodel::Profile,
    AppState,
};

/// Caller-asserted identity header. Authentication proper is somebody
/// else's problem; we only resolve the id to a stored profile.
pub const PROFILE_ID_HEADER: &str = "profile_id";

#[derive(Debug, Clone)]
pub struct AuthenticatedProfile {
    pub profile: Profile,
}

pub async fn resolve_profile(
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let header_value = req
        .headers()
        .get(PROFILE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            HttpError::unauthorized(ErrorMessage::ProfileIdNotProvided.to_string())
        })?;

    let profile_id = Uuid::parse_str(header_value)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::InvalidProfileId.to_string()))?;

    let profile = app_state
        .db_client
        .get_profile(profile_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to load profile {}: {}", profile_id, e);
            HttpError::server_error(ErrorMessage::ServerError.to_string())
        })?
        .ok_or_else(|| {
            HttpError::unauthorized(ErrorMessage::ProfileNoLongerExist.to_string())
        })?;

    req.extensions_mut().insert(AuthenticatedProfile { profile });

    Ok(next.run(req).await)
}
