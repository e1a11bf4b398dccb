use axum::{
    routing::{get, post},
    Router,
};

use crate::types::app_state::AppState;

mod get_board;
mod get_board_page;
mod post_line;
mod post_refresh_interval;
mod post_stop_code;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/", get(get_board_page::get_board_page))
        .route("/board.json", get(get_board::get_board))
        .route("/stop", post(post_stop_code::post_stop_code))
        .route(
            "/interval",
            post(post_refresh_interval::post_refresh_interval),
        )
        .route("/line", post(post_line::post_line))
}
