use axum::{extract::State, response::Html};

use crate::{types::app_state::AppState, views::board_page::render_board_page};

pub async fn get_board_page(State(state): State<AppState>) -> Html<String> {
    let view = state.controller.view().await;
    let poll = state.controller.poll_status().await;
    let last_code = state.controller.last_stop_code().await;

    Html(render_board_page(
        &view,
        poll.as_ref(),
        last_code.as_deref(),
    ))
}
