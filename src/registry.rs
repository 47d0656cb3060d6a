//! Layout registry: the shared mapping consumed by the rendering engine.
//!
//! The host creates one [`LayoutRegistry`], passes it `&mut` into the
//! registration calls, and hands the populated value to the rendering
//! engine. There is no global state; the registry is written once during a
//! single initialization pass and read afterward.

use crate::descriptor::LayoutDescriptor;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by strict-mode registration and grid construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A layout was registered with an empty label.
    #[error("Layout label must not be empty (namespace: {namespace})")]
    EmptyLabel {
        /// Namespace prefix the registration targeted.
        namespace: String,
    },

    /// A key was registered twice in strict mode.
    #[error("Duplicate layout key: {key}")]
    DuplicateKey {
        /// The colliding layout key.
        key: String,
    },

    /// A vocabulary list was empty where at least one element is required.
    #[error("Vocabulary list '{list}' must not be empty")]
    EmptyVocabulary {
        /// Name of the offending list.
        list: &'static str,
    },
}

/// A layout namespace prefix, e.g. `CTPPS/TrackingStrip/Layouts/`.
///
/// Keys are composed deterministically as `prefix + label`, so two runs
/// with identical constants produce identical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    prefix: &'static str,
}

impl Namespace {
    /// Creates a namespace from its prefix. The prefix is used verbatim,
    /// so it must carry its own trailing separator.
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Returns the prefix string.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Composes the full registry key for a label.
    pub fn key(&self, label: &str) -> String {
        format!("{}{}", self.prefix, label)
    }
}

/// The shared mapping from layout key to layout descriptor.
///
/// Backed by a `BTreeMap` so that iteration and serialization order are
/// deterministic: rebuilding from the same constants yields a
/// byte-identical dump.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LayoutRegistry {
    items: BTreeMap<String, LayoutDescriptor>,
    /// Keys that were written more than once, in overwrite order.
    /// Useful to flag accidental duplicates during migration.
    #[serde(skip)]
    overwritten: Vec<String>,
    #[serde(skip)]
    strict: bool,
}

impl LayoutRegistry {
    /// Creates an empty registry with last-write-wins semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry that rejects empty labels and duplicate
    /// keys instead of silently overwriting.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Registers a layout under `namespace.key(label)`.
    ///
    /// In lenient mode this cannot fail: a repeated key overwrites the
    /// earlier entry (logged at `warn` and recorded in
    /// [`overwritten_keys`](Self::overwritten_keys)). In strict mode an
    /// empty label or a repeated key is an error.
    pub fn register(
        &mut self,
        namespace: Namespace,
        label: &str,
        descriptor: impl Into<LayoutDescriptor>,
    ) -> Result<(), RegistryError> {
        if self.strict && label.is_empty() {
            return Err(RegistryError::EmptyLabel {
                namespace: namespace.prefix().to_string(),
            });
        }

        let key = namespace.key(label);
        if self.items.contains_key(&key) {
            if self.strict {
                return Err(RegistryError::DuplicateKey { key });
            }
            tracing::warn!(key = %key, "overwriting previously registered layout");
            self.overwritten.push(key.clone());
        }

        tracing::debug!(key = %key, "registering layout");
        self.items.insert(key, descriptor.into());
        Ok(())
    }

    /// Returns the descriptor registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&LayoutDescriptor> {
        self.items.get(key)
    }

    /// Returns the number of registered layouts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no layout has been registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all keys in deterministic (sorted) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Iterates over all entries in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LayoutDescriptor)> {
        self.items.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the keys that were written more than once, in the order the
    /// overwrites happened. Empty in strict mode.
    pub fn overwritten_keys(&self) -> &[String] {
        &self.overwritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{LayoutDescriptor, PlotReference};

    const TEST_NS: Namespace = Namespace::new("Test/Layouts/");

    fn one_cell(path: &str) -> LayoutDescriptor {
        LayoutDescriptor::single(PlotReference::simple(path))
    }

    #[test]
    fn key_is_prefix_plus_label() {
        assert_eq!(TEST_NS.key("active planes"), "Test/Layouts/active planes");
    }

    #[test]
    fn register_makes_descriptor_retrievable() {
        let mut registry = LayoutRegistry::new();
        registry.register(TEST_NS, "a", one_cell("x/y")).unwrap();
        let descriptor = registry.get("Test/Layouts/a").expect("layout should exist");
        assert_eq!(descriptor.rows[0][0], PlotReference::simple("x/y"));
    }

    #[test]
    fn repeated_label_is_last_write_wins() {
        let mut registry = LayoutRegistry::new();
        registry.register(TEST_NS, "a", one_cell("first")).unwrap();
        registry.register(TEST_NS, "a", one_cell("second")).unwrap();

        assert_eq!(registry.len(), 1);
        let descriptor = registry.get("Test/Layouts/a").unwrap();
        assert_eq!(descriptor.rows[0][0].path(), "second");
    }

    #[test]
    fn overwrites_are_recorded() {
        let mut registry = LayoutRegistry::new();
        registry.register(TEST_NS, "a", one_cell("first")).unwrap();
        assert!(registry.overwritten_keys().is_empty());

        registry.register(TEST_NS, "a", one_cell("second")).unwrap();
        assert_eq!(registry.overwritten_keys(), ["Test/Layouts/a".to_string()]);
    }

    #[test]
    fn strict_mode_rejects_duplicate_key() {
        let mut registry = LayoutRegistry::strict();
        registry.register(TEST_NS, "a", one_cell("first")).unwrap();
        let err = registry.register(TEST_NS, "a", one_cell("second")).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                key: "Test/Layouts/a".to_string()
            }
        );
        // First registration is untouched.
        assert_eq!(registry.get("Test/Layouts/a").unwrap().rows[0][0].path(), "first");
    }

    #[test]
    fn strict_mode_rejects_empty_label() {
        let mut registry = LayoutRegistry::strict();
        let err = registry.register(TEST_NS, "", one_cell("x")).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyLabel { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn lenient_mode_accepts_empty_label() {
        let mut registry = LayoutRegistry::new();
        registry.register(TEST_NS, "", one_cell("x")).unwrap();
        assert!(registry.get("Test/Layouts/").is_some());
    }

    #[test]
    fn keys_iterate_in_sorted_order() {
        let mut registry = LayoutRegistry::new();
        registry.register(TEST_NS, "b", one_cell("2")).unwrap();
        registry.register(TEST_NS, "a", one_cell("1")).unwrap();
        registry.register(TEST_NS, "c", one_cell("3")).unwrap();

        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(
            keys,
            vec!["Test/Layouts/a", "Test/Layouts/b", "Test/Layouts/c"]
        );
    }

    #[test]
    fn registry_serializes_as_key_to_rows_map() {
        let mut registry = LayoutRegistry::new();
        registry.register(TEST_NS, "a", one_cell("x/y")).unwrap();
        let value = serde_json::to_value(&registry).unwrap();
        assert_eq!(value, serde_json::json!({ "Test/Layouts/a": [["x/y"]] }));
    }

    #[test]
    fn duplicate_error_display_names_the_key() {
        let err = RegistryError::DuplicateKey {
            key: "Test/Layouts/a".to_string(),
        };
        assert!(err.to_string().contains("Test/Layouts/a"));
    }
}
