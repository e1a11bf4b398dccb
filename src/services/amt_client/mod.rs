pub mod amt_service;
pub mod types;
