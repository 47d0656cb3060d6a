//! DQM layout registry library
//!
//! This crate builds the static layout configuration consumed by the
//! detector-monitoring dashboard: named layouts mapping human-readable
//! labels to grids of plot references, with optional overlay, description,
//! and rendering-hint metadata.
//!
//! The crate only assembles the description. Rendering the layouts,
//! storing/retrieving the referenced histograms, and validating that the
//! referenced plot paths exist are all the job of the consuming dashboard.
//!
//! # Usage
//!
//! ```
//! use dqm_layouts::{layouts, LayoutRegistry};
//!
//! let mut registry = LayoutRegistry::new();
//! layouts::register_all(&mut registry).expect("built-in layouts are well-formed");
//! assert!(registry.get("CTPPS/TrackingStrip/Layouts/active planes").is_some());
//! ```

/// Grid construction over station/unit vocabularies.
pub mod builder;

/// Layout descriptor types (plot references, rows, grids).
pub mod descriptor;

/// Built-in layout definitions, one submodule per detector subsystem.
pub mod layouts;

/// Logging initialization for the CLI.
pub mod logging;

/// The shared key-to-descriptor mapping and its registration rules.
pub mod registry;

pub use descriptor::{DrawOptions, LayoutDescriptor, LayoutRow, PlotReference};
pub use registry::{LayoutRegistry, Namespace, RegistryError};
