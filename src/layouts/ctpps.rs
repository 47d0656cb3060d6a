//! CTPPS layouts: tracking-strip grids, timing-diamond columns, and the
//! per-BX summary overlays.
//!
//! Strip layouts form a station × unit grid; each plot gets a bare-path
//! variant, and the plots with per-projection siblings additionally get a
//! `" UV"`-labelled variant overlaying the V projection on the U one.
//! Diamond layouts are single-column (one station per row). The summary
//! layouts overlay every per-detector activity curve on one base plot.

use crate::builder::{summary_layout, GridScheme};
use crate::descriptor::{LayoutDescriptor, PlotReference};
use crate::registry::{LayoutRegistry, Namespace, RegistryError};

/// Namespace for tracking-strip layouts.
pub const TRACKING_STRIP: Namespace = Namespace::new("CTPPS/TrackingStrip/Layouts/");

/// Namespace for timing-diamond layouts.
pub const TIMING_DIAMOND: Namespace = Namespace::new("CTPPS/TimingDiamond/Layouts/");

/// Tracking-strip stations, in on-screen row order.
pub const STRIP_STATIONS: [&str; 2] = ["sector 45/station 210", "sector 56/station 210"];

/// Tracking-strip readout units, in on-screen column order.
pub const STRIP_UNITS: [&str; 2] = ["nr", "fr"];

/// Strip plots registered as bare grids.
const STRIP_PLOTS: [&str; 4] = [
    "active planes",
    "activity in planes (2D)",
    "vfats with any problem",
    "track XY profile",
];

/// Strip plots with U/V projection siblings, registered as overlay grids
/// under a `" UV"`-suffixed label.
const STRIP_UV_PLOTS: [&str; 3] = [
    "active planes",
    "recognized patterns",
    "planes contributing to fit",
];

/// Timing-diamond stations, in on-screen row order. The station segment
/// already carries the readout folder (`cyl_hr`).
pub const DIAMOND_STATIONS: [&str; 2] = [
    "sector 45/station 220cyl/cyl_hr",
    "sector 56/station 220cyl/cyl_hr",
];

/// Diamond plots, each registered as a single-column layout.
const DIAMOND_PLOTS: [&str; 5] = [
    "active planes",
    "activity per FED BX",
    "hits in planes",
    "HPTDC Errors",
    "time over threshold",
];

/// Label suffixes for the per-BX summary variants.
const SUMMARY_SUFFIXES: [&str; 2] = ["", " (short)"];

fn strip_scheme() -> GridScheme {
    GridScheme::new("CTPPS/TrackingStrip/", "_hr")
}

/// Composes a timing-diamond plot path.
fn diamond_path(station: &str, plot: &str) -> String {
    format!("CTPPS/TimingDiamond/{station}/{plot}")
}

/// One-cell-per-row column over the diamond stations for one plot.
fn diamond_column(plot: &str) -> LayoutDescriptor {
    let rows = DIAMOND_STATIONS
        .iter()
        .map(|station| vec![PlotReference::simple(diamond_path(station, plot))])
        .collect();
    LayoutDescriptor::new(rows)
}

/// Registers all CTPPS layouts into `registry`.
pub fn register(registry: &mut LayoutRegistry) -> Result<(), RegistryError> {
    let scheme = strip_scheme();

    for plot in STRIP_PLOTS {
        let grid = scheme.bare_grid(&STRIP_STATIONS, &STRIP_UNITS, plot)?;
        registry.register(TRACKING_STRIP, plot, grid)?;
    }

    for plot in STRIP_UV_PLOTS {
        let grid = scheme.overlay_grid(&STRIP_STATIONS, &STRIP_UNITS, plot, " U", " V")?;
        registry.register(TRACKING_STRIP, &format!("{plot} UV"), grid)?;
    }

    for plot in DIAMOND_PLOTS {
        registry.register(TIMING_DIAMOND, plot, diamond_column(plot))?;
    }

    // Per-BX summaries: every strip and diamond activity curve overlaid on
    // the subsystem-wide events-per-BX base plot.
    for suffix in SUMMARY_SUFFIXES {
        let plot = format!("activity per BX{suffix}");
        let mut overlays = scheme.flat_paths(&STRIP_STATIONS, &STRIP_UNITS, &plot);
        overlays.extend(
            DIAMOND_STATIONS
                .iter()
                .map(|station| diamond_path(station, &plot)),
        );

        let base = format!("CTPPS/events per BX{suffix}");
        registry.register(TRACKING_STRIP, &plot, summary_layout(base, overlays))?;
    }

    Ok(())
}
