pub mod error_middleware;
