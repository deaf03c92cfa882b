use axum::Json;
use axum::extract::State;
use tracing::error;

use crate::dto::TestDnsResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Create the fixed test record, surfacing Cloudflare's answer either way.
pub async fn test_dns(State(state): State<AppState>) -> Result<Json<TestDnsResponse>, ApiError> {
    let dns = state.provisioner.create_test_record().await.map_err(|e| {
        error!(error = %e, "test dns record failed");
        ApiError::from(e)
    })?;

    Ok(Json(TestDnsResponse { ok: true, dns }))
}
