pub mod app_error;
pub mod validated_form;
