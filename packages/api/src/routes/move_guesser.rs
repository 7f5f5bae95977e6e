use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use lambda_http::tracing::{error, info};
use serde::Deserialize;
use shared::models::piece::PieceKind;
use shared::models::position::Position;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct MoveGuesserQuery {
    pub piece: String,
    pub pos: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/moveGuesser", get(guess_moves))
}

#[tracing::instrument(skip(state))]
async fn guess_moves(
    State(state): State<AppState>,
    Query(query): Query<MoveGuesserQuery>,
) -> Result<String, ApiError> {
    let piece = PieceKind::from_string(&query.piece).map_err(|e| {
        error!("Rejected piece {:?}: {}", query.piece, e);
        ApiError::from(e)
    })?;
    let position = Position::from_algebraic(&query.pos).map_err(|e| {
        error!("Rejected position {:?}: {}", query.pos, e);
        ApiError::from(e)
    })?;

    let moves = state
        .move_guesser
        .get_possible_moves(&position, piece)
        .map_err(|e| {
            error!("Failed to guess moves for {} at {}: {}", piece, query.pos, e);
            ApiError::from(e)
        })?;

    info!("Guessed moves for {} at {}: [{}]", piece, query.pos, moves);
    Ok(moves)
}
