use crate::data::filter::FilteredView;
use crate::data::model::{Attribute, Species};
use crate::error::ViewError;

use super::ViewResult;

/// Upper bound on any bin count so a typo cannot allocate millions of bars.
pub const MAX_BINS: i64 = 1000;

/// How the per-species bars of one bin relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    /// Bars of one bin sit on top of each other.
    Stacked,
    /// Bars of one bin overlap, drawn semi-transparent.
    Layered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub species: Species,
    /// One count per bin.
    pub counts: Vec<u32>,
}

/// A histogram of one numeric column grouped by species.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub title: &'static str,
    pub x_label: String,
    pub y_label: &'static str,
    /// Bin edges shared by every series; `bin_count() + 1` entries.
    pub edges: Vec<f64>,
    /// Species present in the data, in legend order.
    pub series: Vec<HistogramSeries>,
    pub mode: BarMode,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.get(1)) {
            (Some(lo), Some(hi)) => hi - lo,
            _ => 0.0,
        }
    }

    pub fn bin_center(&self, bin: usize) -> f64 {
        self.edges[bin] + self.bin_width() / 2.0
    }

    /// Number of values counted across all series.
    pub fn total(&self) -> u32 {
        self.series.iter().flat_map(|s| s.counts.iter()).sum()
    }
}

// ---------------------------------------------------------------------------
// The two dashboard histograms
// ---------------------------------------------------------------------------

/// Stacked histogram of the selected attribute, titled "Penguin Stats".
pub fn plotly_histogram(
    filtered: &FilteredView,
    attribute: Attribute,
    bins: i64,
) -> ViewResult<Histogram> {
    let bins = checked_bins(bins)?;
    let (edges, series) = bin_by_species(filtered, attribute, bins)?;
    Ok(Histogram {
        title: "Penguin Stats",
        x_label: attribute.column().to_string(),
        y_label: "Count",
        edges,
        series,
        mode: BarMode::Stacked,
    })
}

/// Layered histogram of body mass, titled "Palmer Penguins".
pub fn seaborn_histogram(filtered: &FilteredView, bins: u32) -> ViewResult<Histogram> {
    let bins = checked_bins(i64::from(bins))?;
    let (edges, series) = bin_by_species(filtered, Attribute::BodyMassG, bins)?;
    Ok(Histogram {
        title: "Palmer Penguins",
        x_label: "Mass (g)".to_string(),
        y_label: "Count",
        edges,
        series,
        mode: BarMode::Layered,
    })
}

fn checked_bins(bins: i64) -> ViewResult<usize> {
    if (1..=MAX_BINS).contains(&bins) {
        Ok(bins as usize)
    } else {
        Err(ViewError::InvalidBinCount {
            value: bins,
            max: MAX_BINS,
        })
    }
}

// ---------------------------------------------------------------------------
// Binning
// ---------------------------------------------------------------------------

/// Count non-missing values of `attribute` into `bins` equal-width bins
/// spanning their min..=max, one series per species present.
fn bin_by_species(
    filtered: &FilteredView,
    attribute: Attribute,
    bins: usize,
) -> ViewResult<(Vec<f64>, Vec<HistogramSeries>)> {
    let values: Vec<(Species, f64)> = filtered
        .iter()
        .filter_map(|(_, p)| attribute.value(p).map(|v| (p.species, v)))
        .collect();

    let (lo, hi) = values
        .iter()
        .fold(None, |range: Option<(f64, f64)>, &(_, v)| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .ok_or(ViewError::Empty {
            column: attribute.column(),
        })?;

    // A single distinct value still gets a visible bar.
    let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut series: Vec<HistogramSeries> = Species::ALL
        .iter()
        .filter(|&&s| values.iter().any(|&(vs, _)| vs == s))
        .map(|&species| HistogramSeries {
            species,
            counts: vec![0; bins],
        })
        .collect();

    for (species, v) in values {
        // The last bin is closed on the right so `hi` is counted.
        let bin = (((v - lo) / width) as usize).min(bins - 1);
        if let Some(s) = series.iter_mut().find(|s| s.species == species) {
            s.counts[bin] += 1;
        }
    }

    Ok((edges, series))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::data::filter::filtered_view;
    use crate::data::model::{fixtures, Island, PenguinDataset};

    fn everything(dataset: PenguinDataset) -> FilteredView {
        let species: BTreeSet<_> = Species::ALL.into_iter().collect();
        let islands: BTreeSet<_> = Island::ALL.into_iter().collect();
        filtered_view(&Arc::new(dataset), &species, &islands)
    }

    #[test]
    fn plotly_histogram_uses_requested_bins() {
        let view = everything(fixtures::sample());

        let hist = plotly_histogram(&view, Attribute::FlipperLengthMm, 10).unwrap();
        assert_eq!(hist.bin_count(), 10);
        assert_eq!(hist.title, "Penguin Stats");
        assert_eq!(hist.x_label, "flipper_length_mm");
        assert_eq!(hist.mode, BarMode::Stacked);
        // the all-NA row is skipped
        assert_eq!(hist.total() as usize, view.len() - 1);
        assert_eq!(hist.series.len(), 3);
    }

    #[test]
    fn seaborn_histogram_bins_body_mass() {
        let view = everything(fixtures::three_penguins());

        let hist = seaborn_histogram(&view, 3).unwrap();
        assert_eq!(hist.title, "Palmer Penguins");
        assert_eq!(hist.x_label, "Mass (g)");
        assert_eq!(hist.edges, vec![3500.0, 4000.0, 4500.0, 5000.0]);

        let counts: Vec<_> = hist
            .series
            .iter()
            .map(|s| (s.species, s.counts.clone()))
            .collect();
        assert_eq!(
            counts,
            vec![
                (Species::Adelie, vec![1, 0, 0]),
                (Species::Gentoo, vec![0, 0, 1]),
                (Species::Chinstrap, vec![1, 0, 0]),
            ]
        );
    }

    #[test]
    fn single_value_gets_widened_range() {
        let dataset = PenguinDataset::new(vec![fixtures::penguin(
            Species::Adelie,
            Island::Dream,
            3700.0,
        )]);
        let hist = seaborn_histogram(&everything(dataset), 4).unwrap();
        assert_eq!(hist.edges.first(), Some(&3699.5));
        assert_eq!(hist.edges.last(), Some(&3700.5));
        assert_eq!(hist.total(), 1);
    }

    #[test]
    fn invalid_bin_counts_are_render_failures() {
        let view = everything(fixtures::three_penguins());
        assert_eq!(
            plotly_histogram(&view, Attribute::BodyMassG, 0),
            Err(ViewError::InvalidBinCount {
                value: 0,
                max: MAX_BINS
            })
        );
        assert!(plotly_histogram(&view, Attribute::BodyMassG, -3).is_err());
        assert!(plotly_histogram(&view, Attribute::BodyMassG, MAX_BINS + 1).is_err());
    }

    #[test]
    fn empty_selection_is_explicit_empty_state() {
        let dataset = Arc::new(fixtures::three_penguins());
        let view = filtered_view(&dataset, &BTreeSet::new(), &BTreeSet::new());
        assert_eq!(
            seaborn_histogram(&view, 50),
            Err(ViewError::Empty {
                column: "body_mass_g"
            })
        );
    }
}
