use axum::{extract::State, response::Redirect};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{types::app_state::AppState, utils::validated_form::ValidatedForm};

#[derive(Validate, Deserialize)]
pub struct PostRefreshIntervalPayload {
    /// Seconds between refreshes.
    #[validate(
        range(min = 0.001, message = "Must be a positive number of seconds"),
        custom(function = "validate_finite", message = "Must be a finite number of seconds")
    )]
    pub time: f64,
}

// NaN slips through any range comparison.
fn validate_finite(time: f64) -> Result<(), ValidationError> {
    if time.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

pub async fn post_refresh_interval(
    State(state): State<AppState>,
    ValidatedForm(payload): ValidatedForm<PostRefreshIntervalPayload>,
) -> Redirect {
    state.controller.submit_refresh_interval(payload.time).await;

    Redirect::to("/")
}
