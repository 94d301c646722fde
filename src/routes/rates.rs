use crate::error::AppError;
use crate::pricing::settings::ChannelKind;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;

#[derive(serde::Deserialize, Default)]
pub struct RatesQuery {
    pub channel: Option<String>,
}

/// GET /api/v1/rates — read-only rate catalog dump for the inspection
/// panel. `?channel=` narrows the dump to one channel's tables.
pub async fn rates(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    if let Some(ref label) = query.channel {
        let channel = ChannelKind::parse(label);
        if channel == ChannelKind::Other {
            return Err(AppError::BadRequest(format!("unknown channel: {}", label)));
        }
        return Ok(Json(state.catalog.channel_table(channel)));
    }

    Ok(Json(serde_json::to_value(&*state.catalog)?))
}
