pub mod config;
pub mod database;
pub mod entities;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seeders;
pub mod services;
pub mod utils;

use axum::Router;
use config::AppState;

pub fn app(state: AppState) -> Router {
    routes::create_routes().with_state(state)
}
