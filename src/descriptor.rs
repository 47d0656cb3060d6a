//! Layout descriptor types: plot references, rows, and grids.
//!
//! A layout is a named grid of plot references shown together in the
//! monitoring dashboard. Row order and cell order within a row encode the
//! on-screen grid position, so both are kept as ordered sequences.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rendering options attached to a plot reference, e.g. `{"withref": "no"}`.
///
/// A `BTreeMap` keeps serialization order deterministic.
pub type DrawOptions = BTreeMap<String, String>;

/// A reference to one plot within a layout cell.
///
/// Most cells are a bare path (`Simple`); cells that carry overlays, a
/// description, or rendering hints use the structured form (`Annotated`).
/// The serialized shape matches what the rendering engine reads: a plain
/// string for `Simple`, a map with empty fields omitted for `Annotated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlotReference {
    /// A bare path identifying one plot.
    Simple(String),
    /// A structured descriptor with overlay/drawing metadata.
    Annotated {
        /// Path of the primary plot.
        path: String,
        /// Paths of plots drawn superimposed on the primary plot's axes.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        overlays: Vec<String>,
        /// Human-readable description shown alongside the plot.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// Rendering-option name/value pairs.
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        draw: DrawOptions,
    },
}

impl PlotReference {
    /// Creates a bare path reference.
    pub fn simple(path: impl Into<String>) -> Self {
        PlotReference::Simple(path.into())
    }

    /// Creates a structured reference with no metadata set.
    pub fn annotated(path: impl Into<String>) -> Self {
        PlotReference::Annotated {
            path: path.into(),
            overlays: Vec::new(),
            description: None,
            draw: DrawOptions::new(),
        }
    }

    /// Returns this reference with the given overlay paths.
    ///
    /// No-op on `Simple`; overlays only exist on the structured form.
    pub fn with_overlays(mut self, paths: Vec<String>) -> Self {
        if let PlotReference::Annotated { overlays, .. } = &mut self {
            *overlays = paths;
        }
        self
    }

    /// Returns this reference with the given description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        if let PlotReference::Annotated { description, .. } = &mut self {
            *description = Some(text.into());
        }
        self
    }

    /// Returns this reference with one rendering option set.
    pub fn with_draw(mut self, option: impl Into<String>, value: impl Into<String>) -> Self {
        if let PlotReference::Annotated { draw, .. } = &mut self {
            draw.insert(option.into(), value.into());
        }
        self
    }

    /// Returns the primary plot path.
    pub fn path(&self) -> &str {
        match self {
            PlotReference::Simple(path) => path,
            PlotReference::Annotated { path, .. } => path,
        }
    }

    /// Returns the overlay paths (empty for `Simple`).
    pub fn overlays(&self) -> &[String] {
        match self {
            PlotReference::Simple(_) => &[],
            PlotReference::Annotated { overlays, .. } => overlays,
        }
    }
}

/// One visual row of a grid layout, in on-screen column order.
pub type LayoutRow = Vec<PlotReference>;

/// The full grid of a layout, in on-screen row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutDescriptor {
    /// Rows of the grid, top to bottom.
    pub rows: Vec<LayoutRow>,
}

impl LayoutDescriptor {
    /// Creates a descriptor from rows.
    pub fn new(rows: Vec<LayoutRow>) -> Self {
        Self { rows }
    }

    /// Creates a one-row, one-cell descriptor.
    pub fn single(reference: PlotReference) -> Self {
        Self {
            rows: vec![vec![reference]],
        }
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl From<Vec<LayoutRow>> for LayoutDescriptor {
    fn from(rows: Vec<LayoutRow>) -> Self {
        Self::new(rows)
    }
}
