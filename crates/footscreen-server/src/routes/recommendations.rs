use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use footscreen_core::models::risk::RiskTier;
use footscreen_instruments::recommendations::recommendations_for;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct TierRecommendations {
    tier: RiskTier,
    label: &'static str,
    color: &'static str,
    recommendations: &'static [&'static str],
}

pub async fn list_for_tier(Path(code): Path<String>) -> Result<Json<TierRecommendations>, ApiError> {
    let tier: RiskTier = code.parse()?;
    Ok(Json(TierRecommendations {
        tier,
        label: tier.label(),
        color: tier.color(),
        recommendations: recommendations_for(tier),
    }))
}
