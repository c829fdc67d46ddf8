//! HTTP implementation of the conversational backend.
//!
//! Endpoints, relative to the configured base URL:
//! `GET profiles`, `POST switch-profile/{title}`, `POST ask`,
//! `POST clear-session`, `GET health`.

mod api;
mod client;
mod config;

pub use client::HttpBackend;
pub use config::HttpBackendConfig;
