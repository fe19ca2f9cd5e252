pub mod products_api_controller;
pub mod products_controller;
pub mod views;
