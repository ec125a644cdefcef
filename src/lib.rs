pub mod config;
pub mod database;
pub mod dtos;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
