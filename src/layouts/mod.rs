//! Built-in layout definitions for the monitoring dashboard.
//!
//! Each submodule covers one detector subsystem and exposes a
//! `register` function that populates a [`LayoutRegistry`]. The host calls
//! [`register_all`] once at startup, before the rendering engine reads the
//! registry.

pub mod ctpps;
pub mod pixel_timing;

use crate::registry::{LayoutRegistry, RegistryError};

/// Registers every built-in layout family into `registry`.
pub fn register_all(registry: &mut LayoutRegistry) -> Result<(), RegistryError> {
    ctpps::register(registry)?;
    pixel_timing::register(registry)?;
    tracing::info!(layouts = registry.len(), "layout registry populated");
    Ok(())
}
