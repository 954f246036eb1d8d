//! Host-supplied processor options and processor configuration.

use indexmap::IndexMap;
use serde::Deserialize;

/// Annotation the processor claims unless configured otherwise.
pub const DEFAULT_ROUTE_ANNOTATION: &str = "com.vanelst.annotation.ARouter";

/// The option forwarded verbatim to diagnostics at initialization.
pub const CONTENT_OPTION: &str = "content";

/// String options passed from the host build to the processor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Options(IndexMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an option value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set an option, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`Options::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Overlay `other` on top of these options.
    pub fn merge(&mut self, other: Options) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Processor settings from the `[processor]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessorConfig {
    /// The routing annotation type to claim.
    #[serde(default = "default_annotation")]
    pub annotation: String,
}

fn default_annotation() -> String {
    DEFAULT_ROUTE_ANNOTATION.to_string()
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            annotation: default_annotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides() {
        let mut options = Options::new().with("content", "from file").with("debug", "1");
        options.merge(Options::new().with("content", "from cli"));

        assert_eq!(options.get("content"), Some("from cli"));
        assert_eq!(options.get("debug"), Some("1"));
        assert_eq!(options.iter().count(), 2);
    }

    #[test]
    fn test_processor_config_default() {
        assert_eq!(
            ProcessorConfig::default().annotation,
            "com.vanelst.annotation.ARouter"
        );
    }
}
