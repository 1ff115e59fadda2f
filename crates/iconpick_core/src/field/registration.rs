//! Custom field declaration and validation.

use crate::model::identifier::is_valid_identifier;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field name the picker registers under.
pub const FIELD_NAME: &str = "lucide-icon";
/// Plugin identifier owning the field.
pub const PLUGIN_ID: &str = "lucide-icon-picker";

/// Column widths the host form grid accepts.
const SUPPORTED_INPUT_SIZES: &[u8] = &[4, 6, 8, 12];

/// Stored value type of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
        }
    }
}

/// Default width of the field in the host form grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSize {
    pub default: u8,
    pub is_resizable: bool,
}

/// Declarative custom field registration.
///
/// Declaration only: handing it to the host is the host adapter's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomFieldRegistration {
    /// Field identifier, e.g. `lucide-icon`.
    pub name: String,
    /// Owning plugin identifier, e.g. `lucide-icon-picker`.
    pub plugin: String,
    pub kind: FieldKind,
    pub input_size: InputSize,
    /// Default label shown in the content-type builder.
    pub label: String,
    /// Default description shown in the content-type builder.
    pub description: String,
}

impl CustomFieldRegistration {
    /// The icon picker field shipped by this plugin.
    pub fn lucide_icon() -> Self {
        Self {
            name: FIELD_NAME.to_string(),
            plugin: PLUGIN_ID.to_string(),
            kind: FieldKind::String,
            input_size: InputSize {
                default: 4,
                is_resizable: true,
            },
            label: "Lucide Icon".to_string(),
            description: "Select a Lucide icon".to_string(),
        }
    }

    /// Fully-qualified field UID as the host addresses it.
    pub fn uid(&self) -> String {
        format!("plugin::{}.{}", self.plugin, self.name)
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), RegistrationValidationError> {
        if self.name.trim().is_empty() {
            return Err(RegistrationValidationError::EmptyName);
        }
        if !is_valid_identifier(self.name.trim()) {
            return Err(RegistrationValidationError::InvalidName(self.name.clone()));
        }
        if self.plugin.trim().is_empty() {
            return Err(RegistrationValidationError::EmptyPlugin);
        }
        if !is_valid_identifier(self.plugin.trim()) {
            return Err(RegistrationValidationError::InvalidPlugin(
                self.plugin.clone(),
            ));
        }
        if !SUPPORTED_INPUT_SIZES.contains(&self.input_size.default) {
            return Err(RegistrationValidationError::UnsupportedInputSize(
                self.input_size.default,
            ));
        }
        Ok(())
    }
}

/// Registration declaration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    EmptyName,
    InvalidName(String),
    EmptyPlugin,
    InvalidPlugin(String),
    UnsupportedInputSize(u8),
}

impl Display for RegistrationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "field name must not be empty"),
            Self::InvalidName(value) => write!(f, "field name is invalid: {value}"),
            Self::EmptyPlugin => write!(f, "plugin id must not be empty"),
            Self::InvalidPlugin(value) => write!(f, "plugin id is invalid: {value}"),
            Self::UnsupportedInputSize(value) => write!(
                f,
                "input size {value} is unsupported (expected one of 4, 6, 8, 12)"
            ),
        }
    }
}

impl Error for RegistrationValidationError {}

#[cfg(test)]
mod tests {
    use super::{CustomFieldRegistration, FieldKind, RegistrationValidationError};

    #[test]
    fn validates_shipped_declaration() {
        let registration = CustomFieldRegistration::lucide_icon();
        assert!(registration.validate().is_ok());
        assert_eq!(registration.kind, FieldKind::String);
        assert_eq!(registration.kind.as_str(), "string");
        assert_eq!(registration.input_size.default, 4);
        assert!(registration.input_size.is_resizable);
        assert_eq!(registration.uid(), "plugin::lucide-icon-picker.lucide-icon");
    }

    #[test]
    fn rejects_empty_name() {
        let mut registration = CustomFieldRegistration::lucide_icon();
        registration.name = "  ".to_string();
        assert_eq!(
            registration.validate().unwrap_err(),
            RegistrationValidationError::EmptyName
        );
    }

    #[test]
    fn rejects_invalid_plugin_id() {
        let mut registration = CustomFieldRegistration::lucide_icon();
        registration.plugin = "Lucide Icons".to_string();
        assert!(matches!(
            registration.validate().unwrap_err(),
            RegistrationValidationError::InvalidPlugin(_)
        ));
    }

    #[test]
    fn rejects_unsupported_input_size() {
        let mut registration = CustomFieldRegistration::lucide_icon();
        registration.input_size.default = 5;
        assert_eq!(
            registration.validate().unwrap_err(),
            RegistrationValidationError::UnsupportedInputSize(5)
        );
    }
}
