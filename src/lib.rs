// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions
)]

//! # Tinytidy
//!
//! Rich-text editor glue for CMS admin pages.
//!
//! The admin UI hands its editable fields to a third-party rich-text
//! editor. Tinytidy covers the two sides of that handoff the host owns:
//!
//! - Composing the options payload the editor's `init` call consumes
//!   (plugins, tools, external plugins, style formats)
//! - Cleaning the redundant paragraph and line-break markup the editor
//!   leaves in saved HTML before the content is persisted
//!
//! ## Modules
//!
//! - [`editor`]: per-field editor options, built immutably with registered
//!   extensions
//! - [`clean`]: the pure HTML cleanup function
//! - [`fields`]: batch cleanup over collected field values

pub mod clean;
pub mod editor;
pub mod fields;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::clean::normalize;
    pub use crate::editor::{EditorOptions, PluginRegistration};
    pub use crate::fields::sweep;
}
