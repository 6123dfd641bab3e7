use std::collections::BTreeSet;
use std::sync::Arc;

use super::model::{Island, Penguin, PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Filtered view: the subset of the dataset matching the current selections
// ---------------------------------------------------------------------------

/// Dataset positions of the penguins that pass the current selections.
///
/// Holds a shared handle to the dataset; the rows themselves are never copied.
#[derive(Debug, Clone)]
pub struct FilteredView {
    dataset: Arc<PenguinDataset>,
    indices: Vec<usize>,
}

impl FilteredView {
    /// Dataset positions, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Matching penguins with their dataset position, in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Penguin)> + '_ {
        self.indices
            .iter()
            .filter_map(|&i| self.dataset.get(i).map(|p| (i, p)))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Return indices of penguins whose species AND island are both selected.
///
/// An empty selection matches nothing; there is no implicit "select all".
pub fn filtered_indices(
    dataset: &PenguinDataset,
    species: &BTreeSet<Species>,
    islands: &BTreeSet<Island>,
) -> Vec<usize> {
    dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, p)| species.contains(&p.species) && islands.contains(&p.island))
        .map(|(i, _)| i)
        .collect()
}

/// Build a fresh [`FilteredView`] over `dataset`.
pub fn filtered_view(
    dataset: &Arc<PenguinDataset>,
    species: &BTreeSet<Species>,
    islands: &BTreeSet<Island>,
) -> FilteredView {
    FilteredView {
        indices: filtered_indices(dataset, species, islands),
        dataset: Arc::clone(dataset),
    }
}
