//! HTTP verification service
//!
//! Stateless JSON endpoints over the verification pipeline.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use server::{create_app, ApiServer};
