//! # Formdeck Client
//!
//! HTTP client for the Formdeck table store.
//!
//! The backend exposes collections of rows behind a small REST surface; this
//! crate consumes the two collections the desktop app needs - the `forms`
//! collection and the session endpoint - and nothing else. Every response
//! arrives in a `{ "data": ..., "error": ... }` envelope which is converted
//! into a [`FormdeckResult`](formdeck_core::FormdeckResult) at the crate
//! boundary, so callers never see transport details.

pub mod store;

pub use store::{ENV_API_KEY, ENV_API_URL, TableStoreClient};
