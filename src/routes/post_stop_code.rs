use axum::{extract::State, response::Redirect};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use validator::Validate;

use crate::{types::app_state::AppState, utils::validated_form::ValidatedForm};

#[derive(Validate, Deserialize)]
pub struct PostStopCodePayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub code: String,
}

/// The stop form. Fetch failures are only logged, the page is shown either way.
#[cfg_attr(test, debug_handler)]
pub async fn post_stop_code(
    State(state): State<AppState>,
    ValidatedForm(payload): ValidatedForm<PostStopCodePayload>,
) -> Redirect {
    state.controller.submit_stop_code(payload.code).await;

    Redirect::to("/")
}
