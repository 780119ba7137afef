//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload and results surfaces from props derived from
//! page-owned state; none of them owns domain state beyond cosmetic flags.

pub mod image_upload;
pub mod results_display;
pub mod toast_tray;
