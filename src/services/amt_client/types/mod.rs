pub mod amt_line_response;
pub mod amt_service_error;
pub mod amt_stop_response;
