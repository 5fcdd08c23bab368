//! # Formdeck Core
//!
//! Core types for Formdeck.
//!
//! This crate provides the foundational building blocks used throughout
//! the Formdeck workspace, including:
//!
//! - **Form records**: the persisted `FormRecord` and its insert payload `NewForm`
//! - **Templates**: the immutable catalog of built-in form templates
//! - **Slug**: the pure slug normalization used for form URLs
//! - **Errors**: unified error handling with `FormdeckError` and `FormdeckResult`
//!
//! No UI or transport dependencies live here; everything in this crate is
//! unit-testable in isolation.

pub mod error;
pub mod form;
pub mod slug;
pub mod templates;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{FormdeckError, FormdeckResult};
pub use form::{FORM_TYPE_CUSTOM, FormRecord, NewForm};
pub use slug::{effective_slug, slugify};
pub use templates::{BLANK_TEMPLATE_ID, FormTemplate, builtin_templates, template_by_id};
pub use types::{Entitlements, FormId, ProjectContext, ProjectId, SessionInfo};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
