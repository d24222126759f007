//! HTTP front end of the console: axum routes rendering minijinja pages.
//!
//! [`app::router`] is the embeddable entry point; [`app::build_app`] wires a
//! complete application (standalone, or a demo host with the console nested).

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
