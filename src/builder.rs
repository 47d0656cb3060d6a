//! Grid construction over station/unit vocabularies.
//!
//! Layout grids follow the detector hierarchy: one row per station, one
//! cell per readout unit, with the plot path composed as
//! `prefix + station + "/" + unit + unit_suffix + "/" + plot`. The row and
//! cell order directly determine the on-screen grid position, so outer-list
//! order and inner-list order are always preserved.

use crate::descriptor::{LayoutDescriptor, LayoutRow, PlotReference};
use crate::registry::RegistryError;

/// Path composition scheme for one detector subsystem.
#[derive(Debug, Clone)]
pub struct GridScheme {
    /// Subsystem prefix, including its trailing separator,
    /// e.g. `CTPPS/TrackingStrip/`.
    pub prefix: String,
    /// Suffix appended to the unit segment, e.g. `_hr`.
    pub unit_suffix: String,
}

impl GridScheme {
    /// Creates a scheme from prefix and unit suffix.
    pub fn new(prefix: impl Into<String>, unit_suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            unit_suffix: unit_suffix.into(),
        }
    }

    /// Composes the path of one plot:
    /// `prefix + station + "/" + unit + unit_suffix + "/" + plot`.
    pub fn plot_path(&self, station: &str, unit: &str, plot: &str) -> String {
        format!(
            "{}{}/{}{}/{}",
            self.prefix, station, unit, self.unit_suffix, plot
        )
    }

    /// Builds a grid of bare references: `stations[i] × units[j]` at cell
    /// `[i][j]`, station-major.
    ///
    /// # Errors
    ///
    /// `RegistryError::EmptyVocabulary` when either list is empty.
    pub fn bare_grid(
        &self,
        stations: &[&str],
        units: &[&str],
        plot: &str,
    ) -> Result<LayoutDescriptor, RegistryError> {
        require_non_empty(stations, "stations")?;
        require_non_empty(units, "units")?;

        let rows = stations
            .iter()
            .map(|station| {
                units
                    .iter()
                    .map(|unit| PlotReference::simple(self.plot_path(station, unit, plot)))
                    .collect::<LayoutRow>()
            })
            .collect();
        Ok(LayoutDescriptor::new(rows))
    }

    /// Builds a grid where each cell overlays one sibling plot on another.
    ///
    /// Cell `[i][j]` references the base path suffixed with
    /// `primary_suffix` and overlays the same base path suffixed with
    /// `overlay_suffix`.
    ///
    /// # Errors
    ///
    /// `RegistryError::EmptyVocabulary` when either list is empty.
    pub fn overlay_grid(
        &self,
        stations: &[&str],
        units: &[&str],
        plot: &str,
        primary_suffix: &str,
        overlay_suffix: &str,
    ) -> Result<LayoutDescriptor, RegistryError> {
        require_non_empty(stations, "stations")?;
        require_non_empty(units, "units")?;

        let rows = stations
            .iter()
            .map(|station| {
                units
                    .iter()
                    .map(|unit| {
                        let base = self.plot_path(station, unit, plot);
                        PlotReference::annotated(format!("{base}{primary_suffix}"))
                            .with_overlays(vec![format!("{base}{overlay_suffix}")])
                    })
                    .collect::<LayoutRow>()
            })
            .collect();
        Ok(LayoutDescriptor::new(rows))
    }

    /// Flattens all `station × unit` paths for one plot in station-major,
    /// unit-minor order. Used to assemble summary overlays.
    pub fn flat_paths(&self, stations: &[&str], units: &[&str], plot: &str) -> Vec<String> {
        let mut paths = Vec::with_capacity(stations.len() * units.len());
        for station in stations {
            for unit in units {
                paths.push(self.plot_path(station, unit, plot));
            }
        }
        paths
    }
}

fn require_non_empty(list: &[&str], name: &'static str) -> Result<(), RegistryError> {
    if list.is_empty() {
        return Err(RegistryError::EmptyVocabulary { list: name });
    }
    Ok(())
}

/// Builds a one-cell summary layout overlaying many per-detector curves on
/// a single base plot.
pub fn summary_layout(base_path: impl Into<String>, overlays: Vec<String>) -> LayoutDescriptor {
    LayoutDescriptor::single(PlotReference::annotated(base_path).with_overlays(overlays))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme() -> GridScheme {
        GridScheme::new("prefix/", "_hr")
    }

    #[test]
    fn plot_path_composition() {
        assert_eq!(
            scheme().plot_path("A", "x", "foo"),
            "prefix/A/x_hr/foo"
        );
    }

    #[test]
    fn bare_grid_shape_and_cells() {
        let descriptor = scheme()
            .bare_grid(&["A", "B"], &["x", "y"], "foo")
            .unwrap();

        assert_eq!(descriptor.row_count(), 2);
        for row in &descriptor.rows {
            assert_eq!(row.len(), 2);
        }
        assert_eq!(descriptor.rows[0][0], PlotReference::simple("prefix/A/x_hr/foo"));
        assert_eq!(descriptor.rows[0][1], PlotReference::simple("prefix/A/y_hr/foo"));
        assert_eq!(descriptor.rows[1][0], PlotReference::simple("prefix/B/x_hr/foo"));
        assert_eq!(descriptor.rows[1][1], PlotReference::simple("prefix/B/y_hr/foo"));
    }

    #[test]
    fn overlay_grid_pairs_siblings() {
        let descriptor = scheme()
            .overlay_grid(&["A"], &["x"], "active planes", " U", " V")
            .unwrap();

        let cell = &descriptor.rows[0][0];
        assert_eq!(cell.path(), "prefix/A/x_hr/active planes U");
        assert_eq!(
            cell.overlays(),
            ["prefix/A/x_hr/active planes V".to_string()]
        );
    }

    #[test]
    fn overlay_grid_every_cell_has_exactly_one_overlay() {
        let descriptor = scheme()
            .overlay_grid(&["A", "B"], &["x", "y"], "p", " U", " V")
            .unwrap();
        for row in &descriptor.rows {
            for cell in row {
                assert!(cell.path().ends_with(" U"));
                assert_eq!(cell.overlays().len(), 1);
                assert!(cell.overlays()[0].ends_with(" V"));
            }
        }
    }

    #[test]
    fn bare_grid_rejects_empty_stations() {
        let err = scheme().bare_grid(&[], &["x"], "foo").unwrap_err();
        assert_eq!(err, RegistryError::EmptyVocabulary { list: "stations" });
    }

    #[test]
    fn bare_grid_rejects_empty_units() {
        let err = scheme().bare_grid(&["A"], &[], "foo").unwrap_err();
        assert_eq!(err, RegistryError::EmptyVocabulary { list: "units" });
    }

    #[test]
    fn overlay_grid_rejects_empty_vocabulary() {
        let err = scheme()
            .overlay_grid(&[], &["x"], "foo", " U", " V")
            .unwrap_err();
        assert_eq!(err, RegistryError::EmptyVocabulary { list: "stations" });
    }

    #[test]
    fn flat_paths_are_station_major() {
        let paths = scheme().flat_paths(&["A", "B"], &["x", "y"], "foo");
        assert_eq!(
            paths,
            vec![
                "prefix/A/x_hr/foo",
                "prefix/A/y_hr/foo",
                "prefix/B/x_hr/foo",
                "prefix/B/y_hr/foo",
            ]
        );
    }

    #[test]
    fn summary_layout_is_single_cell_with_overlays() {
        let descriptor = summary_layout(
            "CTPPS/events per BX",
            vec!["a".to_string(), "b".to_string()],
        );
        assert_eq!(descriptor.row_count(), 1);
        let cell = &descriptor.rows[0][0];
        assert_eq!(cell.path(), "CTPPS/events per BX");
        assert_eq!(cell.overlays().len(), 2);
    }
}
