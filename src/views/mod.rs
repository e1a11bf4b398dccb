pub mod board_page;
