//! Editor setup for admin-page rich-text fields.
//!
//! Every editable field gets its own [`EditorOptions`], composed through a
//! builder that starts from the stock plugin, tool, and style-format sets.
//! Extensions register on the builder, so there is no process-wide registry
//! to mutate, and the finished options serialize straight into the payload
//! the editor's `init` call consumes.

mod options;
mod plugins;
mod styles;

pub use options::{BuildError, EditorOptions, EditorOptionsBuilder};
pub use plugins::{ExternalPlugin, PluginRegistration};
pub use styles::{StyleFormat, StyleGroup, default_style_formats};
