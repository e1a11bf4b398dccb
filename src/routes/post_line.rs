use axum::{extract::State, response::Redirect};
use serde::Deserialize;
use validator::Validate;

use crate::{types::app_state::AppState, utils::validated_form::ValidatedForm};

#[derive(Validate, Deserialize)]
pub struct PostLinePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub line: String,
}

pub async fn post_line(
    State(state): State<AppState>,
    ValidatedForm(payload): ValidatedForm<PostLinePayload>,
) -> Redirect {
    state.controller.submit_line(payload.line).await;

    Redirect::to("/")
}
