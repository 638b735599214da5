//! Installer configuration as supplied by the registration layer.

use serde::{Deserialize, Serialize};

/// Normalize an optional string field: absent, empty and whitespace-only
/// values all become `None`; anything else is trimmed.
pub fn fix_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Configuration for one "find on path" installer.
///
/// `label` selects which agents the installer applies to and is only used
/// for display here. Both optional fields go through [`fix_empty`] on the
/// way in, so an unset field and a blank form field are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct InstallerConfig {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    executable_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relative_path: Option<String>,
}

impl InstallerConfig {
    /// Create a configuration with the given label and nothing else set.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            executable_name: None,
            relative_path: None,
        }
    }

    /// Set the executable name.
    #[must_use]
    pub fn with_executable_name(mut self, name: impl AsRef<str>) -> Self {
        self.set_executable_name(Some(name.as_ref()));
        self
    }

    /// Set the tool home offset, relative to the executable's directory.
    #[must_use]
    pub fn with_relative_path(mut self, path: impl AsRef<str>) -> Self {
        self.set_relative_path(Some(path.as_ref()));
        self
    }

    pub fn set_executable_name(&mut self, name: Option<&str>) {
        self.executable_name = fix_empty(name);
    }

    pub fn set_relative_path(&mut self, path: Option<&str>) {
        self.relative_path = fix_empty(path);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Name of the executable to locate, or `None` if unset.
    pub fn executable_name(&self) -> Option<&str> {
        self.executable_name.as_deref()
    }

    /// Offset from the executable's directory to the tool home.
    ///
    /// `None` means ".".
    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }
}
