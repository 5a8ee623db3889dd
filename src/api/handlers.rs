//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::AppState;
use crate::types::Player;

/// Fetch a single player
///
/// Responds 404 with an empty body when no player has this id.
pub async fn get_player(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.players.get_player_by_id(&id).await {
        Some(player) => Json(player).into_response(),
        None => {
            tracing::debug!(%id, "Player not found");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// List every player in insertion order
pub async fn list_players(State(state): State<AppState>) -> Json<Vec<Player>> {
    Json(state.players.get_all_players().await)
}
