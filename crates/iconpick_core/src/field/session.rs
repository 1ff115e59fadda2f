//! Picker session state for one icon field instance.
//!
//! # Responsibility
//! - Track the selected value, popover open state and query text.
//! - Report value changes to the host through [`FieldHost`].
//!
//! # Invariants
//! - A disabled field never opens, selects or clears.
//! - `select` and `clear` notify the host exactly once, then close the
//!   popover and reset the query.
//! - The stored value is not checked against the catalog.

use crate::catalog::Catalog;
use crate::config::PickerConfig;
use crate::field::view::{render, PickerView};
use crate::glyph::GlyphTable;
use crate::search::index::{group_icons, IconGroup};
use log::debug;

/// Props supplied by the host form for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldProps {
    /// Attribute name used in `on_change` callbacks.
    pub name: String,
    /// Current stored value; `None` behaves like an empty string.
    pub value: Option<String>,
    pub error: Option<String>,
    pub disabled: bool,
    pub required: bool,
    pub hint: Option<String>,
    pub label: String,
}

impl FieldProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Host form callback surface.
pub trait FieldHost {
    /// Called with the attribute name and its new string value.
    fn on_change(&mut self, name: &str, value: &str);
}

impl<F> FieldHost for F
where
    F: FnMut(&str, &str),
{
    fn on_change(&mut self, name: &str, value: &str) {
        (self)(name, value)
    }
}

/// Ephemeral UI state for one rendered icon field.
#[derive(Debug, Clone)]
pub struct PickerSession {
    props: FieldProps,
    config: PickerConfig,
    value: String,
    open: bool,
    query: String,
}

impl PickerSession {
    pub fn new(props: FieldProps, config: PickerConfig) -> Self {
        let value = props.value.clone().unwrap_or_default();
        Self {
            props,
            config: config.normalized(),
            value,
            open: false,
            query: String::new(),
        }
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Selected icon name, or `""` when nothing is selected.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_disabled(&self) -> bool {
        self.props.disabled
    }

    /// Applies fresh host props, keeping popover and query state.
    pub fn update_props(&mut self, props: FieldProps) {
        self.value = props.value.clone().unwrap_or_default();
        self.props = props;
        if self.props.disabled {
            self.open = false;
        }
    }

    /// Opens the popover. Returns `false` when the field is disabled.
    pub fn open(&mut self) -> bool {
        if self.props.disabled {
            return false;
        }
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Popover open-state change requested by the UI toolkit.
    pub fn set_open(&mut self, open: bool) -> bool {
        if open {
            self.open()
        } else {
            self.close();
            true
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Selects `icon_name` and reports it to the host.
    ///
    /// Returns `false` without side effects when the field is disabled.
    pub fn select(&mut self, icon_name: &str, host: &mut impl FieldHost) -> bool {
        if self.props.disabled {
            return false;
        }
        host.on_change(&self.props.name, icon_name);
        self.value = icon_name.to_string();
        self.finish_interaction();
        debug!(
            "event=field_select module=field status=ok field={} value={}",
            self.props.name, self.value
        );
        true
    }

    /// Clears the selection and reports `""` to the host.
    ///
    /// Returns `false` without side effects when the field is disabled.
    pub fn clear(&mut self, host: &mut impl FieldHost) -> bool {
        if self.props.disabled {
            return false;
        }
        host.on_change(&self.props.name, "");
        self.value.clear();
        self.finish_interaction();
        debug!(
            "event=field_clear module=field status=ok field={}",
            self.props.name
        );
        true
    }

    /// Grouped results for the current query, recomputed on every call.
    pub fn groups<'a>(&self, catalog: &'a Catalog) -> Vec<IconGroup<'a>> {
        group_icons(catalog, &self.query, self.config.result_cap)
    }

    pub fn view(&self, catalog: &Catalog, glyphs: &GlyphTable) -> PickerView {
        render(self, catalog, glyphs)
    }

    fn finish_interaction(&mut self) {
        self.open = false;
        self.query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldProps, PickerSession};
    use crate::config::PickerConfig;

    #[test]
    fn missing_value_reads_as_empty() {
        let session = PickerSession::new(FieldProps::new("icon"), PickerConfig::default());
        assert_eq!(session.value(), "");
        assert!(!session.has_value());
        assert!(!session.is_open());
    }

    #[test]
    fn closure_hosts_receive_changes() {
        let mut calls = Vec::new();
        let mut host = |name: &str, value: &str| calls.push((name.to_string(), value.to_string()));
        let mut session = PickerSession::new(FieldProps::new("icon"), PickerConfig::default());

        assert!(session.select("anchor", &mut host));
        assert_eq!(calls, vec![("icon".to_string(), "anchor".to_string())]);
    }

    #[test]
    fn disabling_through_props_closes_popover() {
        let mut session = PickerSession::new(FieldProps::new("icon"), PickerConfig::default());
        session.open();
        session.set_query("arr");

        let mut props = FieldProps::new("icon");
        props.disabled = true;
        session.update_props(props);

        assert!(!session.is_open());
        assert_eq!(session.query(), "arr");
        assert!(!session.set_open(true));
    }
}
