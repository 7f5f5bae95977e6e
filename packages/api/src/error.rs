use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::models::errors::model_errors::ModelError;
use shared::services::errors::move_guesser_service_errors::MoveGuesserServiceError;

#[derive(Debug)]
pub enum ApiError {
    Model(ModelError),
    MoveGuesser(MoveGuesserServiceError),
}

impl From<ModelError> for ApiError {
    fn from(error: ModelError) -> Self {
        ApiError::Model(error)
    }
}

impl From<MoveGuesserServiceError> for ApiError {
    fn from(error: MoveGuesserServiceError) -> Self {
        ApiError::MoveGuesser(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Model(e) => write!(f, "{}", e),
            ApiError::MoveGuesser(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Model(
                ModelError::InvalidPieceName(_) | ModelError::InvalidPositionFormat(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::Model(ModelError::InvalidBoardSize(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MoveGuesser(MoveGuesserServiceError::PositionOutOfBoard(_)) => {
                StatusCode::BAD_REQUEST
            }
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_piece_is_a_client_error() {
        let response =
            ApiError::from(ModelError::InvalidPieceName("BISHOP".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_position_is_a_client_error() {
        let response =
            ApiError::from(ModelError::InvalidPositionFormat("E10".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_out_of_board_is_a_client_error() {
        let response = ApiError::from(MoveGuesserServiceError::PositionOutOfBoard(
            "Z9".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_board_is_a_server_error() {
        let response = ApiError::from(ModelError::InvalidBoardSize(0)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_uses_underlying_message() {
        let err = ApiError::from(ModelError::InvalidPieceName("BISHOP".to_string()));
        assert_eq!(err.to_string(), "Invalid piece: BISHOP");
    }
}
