use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::types::{app_state::AppState, board_view::BoardView};

#[derive(Serialize, Deserialize)]
pub struct GetBoardResponsePolling {
    pub code: String,
    pub period_ms: u64,
}

#[derive(Serialize, Deserialize)]
pub struct GetBoardResponse {
    pub board: BoardView,
    pub stop_code: Option<String>,
    pub polling: Option<GetBoardResponsePolling>,
}

pub async fn get_board(State(state): State<AppState>) -> Json<GetBoardResponse> {
    let polling = state
        .controller
        .poll_status()
        .await
        .map(|p| GetBoardResponsePolling {
            code: p.code,
            period_ms: p.period.as_millis() as u64,
        });

    Json(GetBoardResponse {
        board: state.controller.view().await,
        stop_code: state.controller.last_stop_code().await,
        polling,
    })
}
