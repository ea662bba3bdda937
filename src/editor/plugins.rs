//! Plugin and tool registration.
//!
//! Extensions are registered by name. A registration that carries a source
//! locator lands in the options' external-plugin table and the editor loads
//! it from there; one without a source names a plugin bundled with the
//! editor and is appended to the plugin list.

/// A named editor extension, with an optional source locator and language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRegistration {
    pub(super) name: String,
    pub(super) source: Option<String>,
    pub(super) language: Option<String>,
}

impl PluginRegistration {
    /// A plugin that ships with the editor itself.
    pub fn bundled(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            language: None,
        }
    }

    /// A plugin the editor loads from `source`.
    pub fn external(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: Some(source.into()),
            language: None,
        }
    }

    /// Request a language pack alongside the plugin. Only meaningful for
    /// external plugins; [`build`](super::EditorOptionsBuilder::build)
    /// rejects it on a bundled one.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Resolved entry in the external-plugin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPlugin {
    pub(super) source: String,
    pub(super) language: Option<String>,
}

impl ExternalPlugin {
    /// Location the editor loads the plugin from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Language pack the host should request when initializing the editor.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_registration_has_no_source() {
        let reg = PluginRegistration::bundled("wordcount");
        assert_eq!(reg.name(), "wordcount");
        assert_eq!(reg.source, None);
        assert_eq!(reg.language, None);
    }

    #[test]
    fn test_external_registration_keeps_source_and_language() {
        let reg = PluginRegistration::external("imagelib", "/static/js/imagelib.js")
            .with_language("en_GB");
        assert_eq!(reg.source.as_deref(), Some("/static/js/imagelib.js"));
        assert_eq!(reg.language.as_deref(), Some("en_GB"));
    }
}
