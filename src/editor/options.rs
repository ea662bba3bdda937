//! Editor options and their builder.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::plugins::{ExternalPlugin, PluginRegistration};
use super::styles::{StyleGroup, default_style_formats};

/// Plugins every editor instance starts with.
const BASE_PLUGINS: &[&str] = &[
    "hr",
    "code",
    "fullscreen",
    "noneditable",
    "paste",
    "table",
    "lists",
];

/// Tools every editor instance starts with.
const BASE_TOOLS: &[&str] = &["inserttable"];

/// A registration the builder cannot turn into valid options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("field id is empty")]
    EmptyFieldId,
    #[error("plugin name is empty")]
    EmptyPluginName,
    #[error("tool name is empty")]
    EmptyToolName,
    #[error("language {language:?} on plugin {name:?} requires a source")]
    LanguageWithoutSource { name: String, language: String },
}

/// Immutable options for one editor instance.
///
/// Composed by [`EditorOptions::builder`]; serializes to the JSON payload
/// the editor's `init` call consumes. The change hook is carried as a plain
/// field for the host to wire up, it is not part of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorOptions {
    selector: String,
    style_formats: Vec<StyleGroup>,
    plugins: Vec<String>,
    tools: Vec<String>,
    #[serde(serialize_with = "sources_only")]
    external_plugins: BTreeMap<String, ExternalPlugin>,
    branding: bool,
    #[serde(skip)]
    save_on_change: bool,
}

/// The init payload maps external plugin names to their sources; language
/// packs travel out of band via [`EditorOptions::language_packs`].
fn sources_only<S: Serializer>(
    table: &BTreeMap<String, ExternalPlugin>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(table.len()))?;
    for (name, plugin) in table {
        map.serialize_entry(name, plugin.source())?;
    }
    map.end()
}

impl EditorOptions {
    /// Start from the stock plugin, tool, and style-format sets for the
    /// field with DOM id `field_id`.
    pub fn builder(field_id: impl Into<String>) -> EditorOptionsBuilder {
        EditorOptionsBuilder {
            field_id: field_id.into(),
            registrations: Vec::new(),
            tools: BASE_TOOLS.iter().map(ToString::to_string).collect(),
            style_formats: default_style_formats(),
            save_on_change: true,
        }
    }

    /// CSS selector the editor attaches to.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn external_plugins(&self) -> &BTreeMap<String, ExternalPlugin> {
        &self.external_plugins
    }

    pub fn style_formats(&self) -> &[StyleGroup] {
        &self.style_formats
    }

    /// Whether the host should save editor content on every change event.
    pub fn save_on_change(&self) -> bool {
        self.save_on_change
    }

    /// Language packs the host must request before initializing the editor,
    /// as `(plugin name, language)` pairs.
    pub fn language_packs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.external_plugins
            .iter()
            .filter_map(|(name, plugin)| Some((name.as_str(), plugin.language()?)))
    }

    /// Render the editor-init JSON payload.
    ///
    /// # Errors
    /// Returns an error if the options cannot be serialized.
    pub fn to_init_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Composes an [`EditorOptions`] value; every instance gets its own builder,
/// so registrations never leak between editor invocations.
#[derive(Debug, Clone)]
pub struct EditorOptionsBuilder {
    field_id: String,
    registrations: Vec<PluginRegistration>,
    tools: Vec<String>,
    style_formats: Vec<StyleGroup>,
    save_on_change: bool,
}

impl EditorOptionsBuilder {
    /// Register an extension. Bundled plugins append to the plugin list;
    /// external ones land in the external-plugin table, where a repeated
    /// name replaces the earlier entry.
    pub fn register(mut self, registration: PluginRegistration) -> Self {
        self.registrations.push(registration);
        self
    }

    /// Shorthand for registering a bundled plugin by name.
    pub fn plugin(self, name: impl Into<String>) -> Self {
        self.register(PluginRegistration::bundled(name))
    }

    /// Shorthand for registering an external plugin.
    pub fn external_plugin(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.register(PluginRegistration::external(name, source))
    }

    /// Add a tool to the toolbar.
    pub fn tool(mut self, name: impl Into<String>) -> Self {
        self.tools.push(name.into());
        self
    }

    /// Replace the stock style-format tree.
    pub fn style_formats(mut self, groups: Vec<StyleGroup>) -> Self {
        self.style_formats = groups;
        self
    }

    /// Control whether the host saves editor content on change (on by
    /// default).
    pub fn save_on_change(mut self, enabled: bool) -> Self {
        self.save_on_change = enabled;
        self
    }

    /// Validate the registrations and produce the immutable options.
    ///
    /// # Errors
    /// Rejects an empty field id, empty plugin or tool names, and a language
    /// on a registration without a source.
    pub fn build(self) -> Result<EditorOptions, BuildError> {
        if self.field_id.is_empty() {
            return Err(BuildError::EmptyFieldId);
        }
        for tool in &self.tools {
            if tool.is_empty() {
                return Err(BuildError::EmptyToolName);
            }
        }

        let mut plugins: Vec<String> = BASE_PLUGINS.iter().map(ToString::to_string).collect();
        let mut external_plugins = BTreeMap::new();
        for registration in self.registrations {
            if registration.name.is_empty() {
                return Err(BuildError::EmptyPluginName);
            }
            match (registration.source, registration.language) {
                (Some(source), language) => {
                    external_plugins
                        .insert(registration.name, ExternalPlugin { source, language });
                }
                (None, Some(language)) => {
                    return Err(BuildError::LanguageWithoutSource {
                        name: registration.name,
                        language,
                    });
                }
                (None, None) => plugins.push(registration.name),
            }
        }

        Ok(EditorOptions {
            selector: format!("#{}", self.field_id),
            style_formats: self.style_formats,
            plugins,
            tools: self.tools,
            external_plugins,
            branding: false,
            save_on_change: self.save_on_change,
        })
    }
}
