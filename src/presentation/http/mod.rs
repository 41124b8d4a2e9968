pub mod controllers;
pub mod error;
pub mod routes;
pub mod state;
