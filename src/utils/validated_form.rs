use std::error::Error;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::app_error::AppError;

/// `Form<T>` that also runs `T`'s validation rules.
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(data) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| match e.source() {
                Some(source) => AppError::bad_request(&format!("Invalid form: {}", source)),
                None => AppError::bad_request(&e.body_text()),
            })?;

        data.validate()
            .map_err(|e| AppError::bad_request(&format!("Invalid form: {}", e)))?;

        Ok(ValidatedForm(data))
    }
}
