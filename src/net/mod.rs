//! Network modules for the external prediction service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The inference model is an external HTTP collaborator; this crate only
//! uploads the staged image and parses the classification it returns.

pub mod api;
pub mod types;
