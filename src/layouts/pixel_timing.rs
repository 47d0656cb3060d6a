//! Pixel-timing layouts: single-cell per-lumisection trend plots.
//!
//! Every layout here is one row with one annotated cell pointing at a
//! `TrackTimingPixelPhase1` monitor element, carrying a description and the
//! `withref: no` rendering hint (trend plots are not compared against a
//! reference histogram). The 0x series covers the per-OnlineBlock variants,
//! the 1x series the plain per-detector ones.

use crate::descriptor::{LayoutDescriptor, PlotReference};
use crate::registry::{LayoutRegistry, Namespace, RegistryError};

/// Namespace for pixel-timing layouts.
pub const PIXEL_TIMING: Namespace = Namespace::new("TrackTimingPixelPhase1/Layouts/");

/// Subsystem prefix shared by all referenced plots.
const PLOT_PREFIX: &str = "TrackTimingPixelPhase1/";

/// Layout table: label, plot path relative to [`PLOT_PREFIX`], description.
const PIXEL_TIMING_PLOTS: [(&str, &str, &str); 30] = [
    // Per-OnlineBlock trends.
    (
        "01a - Timing_Digi_Barrel",
        "Phase1_MechanicalView/num_digis_per_OnlineBlock_PXBarrel",
        "Mean adc value per lumisection",
    ),
    (
        "01b - Timing_Digi_Forward",
        "Phase1_MechanicalView/num_digis_per_OnlineBlock_PXForward",
        "Mean adc value per lumisection",
    ),
    (
        "02a - Timing_ADC_Barrel",
        "Phase1_MechanicalView/adc_per_OnlineBlock_PXBarrel",
        "Mean adc value per lumisection",
    ),
    (
        "02b - Timing_ADC_Barrel",
        "Phase1_MechanicalView/adc_per_OnlineBlock_PXForward",
        "Mean adc value per lumisection",
    ),
    (
        "03a - Timing_Cluster_Number_Barrel",
        "Phase1_MechanicalView/num_clusters_per_OnlineBlock_PXBarrel",
        "Mean cluster value per lumisection in barrel",
    ),
    (
        "03b - Timing_Cluster_Number_Forward",
        "Phase1_MechanicalView/num_clusters_per_OnlineBlock_PXForward",
        "Mean cluster value per lumisection in endcap",
    ),
    (
        "04a - Timing_Cluster_Charge_Barrel",
        "Phase1_MechanicalView/charge_per_OnlineBlock_PXBarrel",
        "Mean cluster charge per lumisection in barrel",
    ),
    (
        "04b - Timing_Cluster_Charge_Forward",
        "Phase1_MechanicalView/charge_per_OnlineBlock_PXForward",
        "Mean cluster charge per lumisection in barrel",
    ),
    (
        "05a - Timing_size_Forward",
        "Phase1_MechanicalView/size_per_OnlineBlock_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "05b - Timing_size_Forward",
        "Phase1_MechanicalView/size_per_OnlineBlock_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "06a - Timing_charge_ontrack_Barrel",
        "Phase1_Track/charge_per_OnlineBlock_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "06b - Timing_charge_ontrack_Forward",
        "Phase1_Track/charge_per_OnlineBlock_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "07a - Timing_num_cluster_ontrack_Barrel",
        "Phase1_Track/num_clusters_ontrack_per_OnlineBlock_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "07b - Timing_num_cluster_ontrack_Forward",
        "Phase1_Track/num_clusters_ontrack_per_OnlineBlock_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "08a - Timing_residualx_Barrel",
        "Phase1_Track/residual_x_per_OnlineBlock_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "08b - Timing_residualx_Forward",
        "Phase1_Track/residual_x_per_OnlineBlock_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "09a - Timing_residualy_Barrel",
        "Phase1_Track/residual_y_per_OnlineBlock_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "09b - Timing_residualy_Forward",
        "Phase1_Track/residual_y_per_OnlineBlock_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
    // Plain per-detector trends.
    (
        "11a - Timing_ADC_Barrel",
        "Phase1_MechanicalView/adc_PXBarrel",
        "Mean adc value per lumisection",
    ),
    (
        "11b - Timing_ADC_Barrel",
        "Phase1_MechanicalView/adc_PXForward",
        "Mean adc value per lumisection",
    ),
    (
        "12a - Timing_Cluster_Charge_Barrel",
        "Phase1_MechanicalView/charge_PXBarrel",
        "Mean cluster charge per lumisection in barrel",
    ),
    (
        "12b - Timing_Cluster_Charge_Forward",
        "Phase1_MechanicalView/charge_PXForward",
        "Mean cluster charge per lumisection in barrel",
    ),
    (
        "13a - Timing_size_Forward",
        "Phase1_MechanicalView/size_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "13b - Timing_size_Forward",
        "Phase1_MechanicalView/size_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "14a - Timing_charge_ontrack_Barrel",
        "Phase1_Track/charge_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "14b - Timing_charge_ontrack_Forward",
        "Phase1_Track/charge_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "15a - Timing_residualx_Barrel",
        "Phase1_Track/residual_x_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "15b - Timing_residualx_Forward",
        "Phase1_Track/residual_x_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "16a - Timing_residualy_Barrel",
        "Phase1_Track/residual_y_PXBarrel",
        "Mean cluster size per lumisection in barrel",
    ),
    (
        "16b - Timing_residualy_Forward",
        "Phase1_Track/residual_y_PXForward",
        "Mean cluster size per lumisection in barrel",
    ),
];

/// Registers all pixel-timing layouts into `registry`.
pub fn register(registry: &mut LayoutRegistry) -> Result<(), RegistryError> {
    for (label, plot, description) in PIXEL_TIMING_PLOTS {
        let reference = PlotReference::annotated(format!("{PLOT_PREFIX}{plot}"))
            .with_description(description)
            .with_draw("withref", "no");
        registry.register(PIXEL_TIMING, label, LayoutDescriptor::single(reference))?;
    }
    Ok(())
}
