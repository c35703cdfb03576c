use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use super::{ApiError, chart_failure, parse_date_param};
use crate::{server::AppState, types::ChartResponse, utils};

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    date: Option<String>,
}

pub async fn charts(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResponse>, ApiError> {
    let date = parse_date_param(query.date.as_deref())?;
    let songs = state.charts.fetch(date).await.map_err(chart_failure)?;

    Ok(Json(ChartResponse {
        date: utils::chart_label(date),
        total_songs: songs.len(),
        songs,
    }))
}
