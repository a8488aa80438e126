pub mod auth;
pub mod cell_values;
pub mod http_client;
pub mod sheet_guest_repository;
pub mod spreadsheet_manager;
pub mod spreadsheet_read;
pub mod spreadsheet_write;
pub mod value_range_factory;
