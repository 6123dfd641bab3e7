use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::{DashboardConfig, SEABORN_BIN_RANGE};
use crate::data::filter::{self, FilteredView};
use crate::data::model::{Attribute, Island, PenguinDataset, Species};
use crate::error::ViewError;
use crate::reactive::{Derived, Input, Version};
use crate::views::histogram::{self, Histogram};
use crate::views::scatter::{self, Scatter};
use crate::views::table::{self, GridSort, TableArtifact};
use crate::views::ViewResult;

// ---------------------------------------------------------------------------
// Input state
// ---------------------------------------------------------------------------

/// Current values of every user-controlled widget.
pub struct InputState {
    pub selected_attribute: Input<Attribute>,
    pub plotly_bin_count: Input<i64>,
    pub seaborn_bin_count: Input<u32>,
    pub selected_species_list: Input<BTreeSet<Species>>,
    pub selected_island_list: Input<BTreeSet<Island>>,
    pub grid_sort: Input<Option<GridSort>>,
}

impl InputState {
    /// Inputs populated with the configured startup selections.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            selected_attribute: Input::new(config.default_attribute),
            plotly_bin_count: Input::new(config.plotly_bin_count),
            seaborn_bin_count: Input::new(config.seaborn_bin_count),
            selected_species_list: Input::new(config.species.iter().copied().collect()),
            selected_island_list: Input::new(config.islands.iter().copied().collect()),
            grid_sort: Input::new(None),
        }
    }

    /// Nothing reported by the UI yet.
    pub fn missing() -> Self {
        Self {
            selected_attribute: Input::missing(),
            plotly_bin_count: Input::missing(),
            seaborn_bin_count: Input::missing(),
            selected_species_list: Input::missing(),
            selected_island_list: Input::missing(),
            grid_sort: Input::new(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Session: inputs plus the derivation graph hanging off them
// ---------------------------------------------------------------------------

/// One dashboard session.
///
/// ```text
///   species ─┐
///   islands ─┴─► filtered ─┬─► data_table
///                          ├─► data_grid          ◄── grid_sort
///                          ├─► plotly_histogram   ◄── attribute, plotly bins
///                          ├─► seaborn_histogram  ◄── seaborn bins
///                          └─► scatterplot
/// ```
///
/// Every node is lazy: it recomputes when read after one of its inputs moved.
pub struct Session {
    dataset: Arc<PenguinDataset>,
    pub inputs: InputState,

    filtered: Derived<Option<FilteredView>>,
    data_table: Derived<ViewResult<TableArtifact>>,
    data_grid: Derived<ViewResult<TableArtifact>>,
    plotly_histogram: Derived<ViewResult<Histogram>>,
    seaborn_histogram: Derived<ViewResult<Histogram>>,
    scatterplot: Derived<ViewResult<Scatter>>,
}

impl Session {
    pub fn new(dataset: Arc<PenguinDataset>, inputs: InputState) -> Self {
        Self {
            dataset,
            inputs,
            filtered: Derived::new("filtered_data"),
            data_table: Derived::new("data_table"),
            data_grid: Derived::new("data_grid"),
            plotly_histogram: Derived::new("plotly_histogram"),
            seaborn_histogram: Derived::new("seaborn_histogram"),
            scatterplot: Derived::new("scatterplot"),
        }
    }

    pub fn dataset(&self) -> &PenguinDataset {
        &self.dataset
    }

    // -- input setters used by the sidebar --

    pub fn set_selected_attribute(&mut self, attribute: Attribute) {
        self.inputs.selected_attribute.set(attribute);
    }

    pub fn set_plotly_bin_count(&mut self, bins: i64) {
        self.inputs.plotly_bin_count.set(bins);
    }

    /// Clamped to the slider range.
    pub fn set_seaborn_bin_count(&mut self, bins: u32) {
        let bins = bins.clamp(*SEABORN_BIN_RANGE.start(), *SEABORN_BIN_RANGE.end());
        self.inputs.seaborn_bin_count.set(bins);
    }

    pub fn set_species(&mut self, species: BTreeSet<Species>) {
        self.inputs.selected_species_list.set(species);
    }

    pub fn set_islands(&mut self, islands: BTreeSet<Island>) {
        self.inputs.selected_island_list.set(islands);
    }

    /// Sort the data grid by `column`, flipping direction on repeated clicks.
    pub fn toggle_grid_sort(&mut self, column: usize) {
        let current = self.inputs.grid_sort.get().copied().flatten();
        self.inputs
            .grid_sort
            .set(Some(GridSort::toggled(current, column)));
    }

    // -- derivation nodes --

    /// The dataset restricted to the selected species and islands.
    ///
    /// `None` while either selection has not been reported yet.
    pub fn filtered_data(&mut self) -> Option<&FilteredView> {
        let deps = [
            self.inputs.selected_species_list.version(),
            self.inputs.selected_island_list.version(),
        ];
        let dataset = &self.dataset;
        let species = self.inputs.selected_species_list.get();
        let islands = self.inputs.selected_island_list.get();
        self.filtered
            .get(&deps, || Some(filter::filtered_view(dataset, species?, islands?)))
            .as_ref()
    }

    /// Bring the filter node up to date and return its version.
    fn refresh_filtered(&mut self) -> Version {
        self.filtered_data();
        self.filtered.version()
    }

    pub fn data_table(&mut self) -> &ViewResult<TableArtifact> {
        let deps = [self.refresh_filtered()];
        let filtered = self.filtered.peek().and_then(Option::as_ref);
        self.data_table.get(&deps, || {
            let result = table::data_table(filtered.ok_or(ViewError::NotReady)?);
            log_outcome("data_table", &result);
            result
        })
    }

    pub fn data_grid(&mut self) -> &ViewResult<TableArtifact> {
        let deps = [self.refresh_filtered(), self.inputs.grid_sort.version()];
        let filtered = self.filtered.peek().and_then(Option::as_ref);
        let sort = self.inputs.grid_sort.get().copied().flatten();
        self.data_grid.get(&deps, || {
            let result = table::data_grid(filtered.ok_or(ViewError::NotReady)?, sort);
            log_outcome("data_grid", &result);
            result
        })
    }

    pub fn plotly_histogram(&mut self) -> &ViewResult<Histogram> {
        let deps = [
            self.refresh_filtered(),
            self.inputs.selected_attribute.version(),
            self.inputs.plotly_bin_count.version(),
        ];
        let filtered = self.filtered.peek().and_then(Option::as_ref);
        let attribute = self.inputs.selected_attribute.get().copied();
        let bins = self.inputs.plotly_bin_count.get().copied();
        self.plotly_histogram.get(&deps, || {
            let result = histogram::plotly_histogram(
                filtered.ok_or(ViewError::NotReady)?,
                attribute.ok_or(ViewError::NotReady)?,
                bins.ok_or(ViewError::NotReady)?,
            );
            log_outcome("plotly_histogram", &result);
            result
        })
    }

    pub fn seaborn_histogram(&mut self) -> &ViewResult<Histogram> {
        let deps = [
            self.refresh_filtered(),
            self.inputs.seaborn_bin_count.version(),
        ];
        let filtered = self.filtered.peek().and_then(Option::as_ref);
        let bins = self.inputs.seaborn_bin_count.get().copied();
        self.seaborn_histogram.get(&deps, || {
            let result = histogram::seaborn_histogram(
                filtered.ok_or(ViewError::NotReady)?,
                bins.ok_or(ViewError::NotReady)?,
            );
            log_outcome("seaborn_histogram", &result);
            result
        })
    }

    pub fn scatterplot(&mut self) -> &ViewResult<Scatter> {
        let deps = [self.refresh_filtered()];
        let filtered = self.filtered.peek().and_then(Option::as_ref);
        self.scatterplot.get(&deps, || {
            let result = scatter::mass_scatter(filtered.ok_or(ViewError::NotReady)?);
            log_outcome("scatterplot", &result);
            result
        })
    }

    /// Recompute counts per node, for diagnostics and tests.
    pub fn recompute_counts(&self) -> RecomputeCounts {
        RecomputeCounts {
            filtered: self.filtered.recomputes(),
            data_table: self.data_table.recomputes(),
            data_grid: self.data_grid.recomputes(),
            plotly_histogram: self.plotly_histogram.recomputes(),
            seaborn_histogram: self.seaborn_histogram.recomputes(),
            scatterplot: self.scatterplot.recomputes(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeCounts {
    pub filtered: u64,
    pub data_table: u64,
    pub data_grid: u64,
    pub plotly_histogram: u64,
    pub seaborn_histogram: u64,
    pub scatterplot: u64,
}

fn log_outcome<T>(view: &str, result: &ViewResult<T>) {
    match result {
        Ok(_) | Err(ViewError::NotReady) => {}
        Err(e) => log::warn!("{view}: {e}"),
    }
}
