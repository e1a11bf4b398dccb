pub mod app_state;
pub mod board_view;
