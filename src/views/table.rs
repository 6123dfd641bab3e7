use std::cmp::Ordering;

use crate::data::filter::FilteredView;
use crate::data::model::{Attribute, Penguin, COLUMNS};

use super::ViewResult;

/// Rows of the filtered view as display text, one entry per column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableArtifact {
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
    /// Dataset position of each row.
    pub row_ids: Vec<usize>,
}

impl TableArtifact {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sort order of the data grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSort {
    /// Index into [`COLUMNS`].
    pub column: usize,
    pub descending: bool,
}

impl GridSort {
    /// Clicking a header sorts ascending, clicking it again flips the direction.
    pub fn toggled(current: Option<GridSort>, column: usize) -> GridSort {
        match current {
            Some(sort) if sort.column == column => GridSort {
                column,
                descending: !sort.descending,
            },
            _ => GridSort {
                column,
                descending: false,
            },
        }
    }
}

/// Every filtered row, in dataset order.
pub fn data_table(filtered: &FilteredView) -> ViewResult<TableArtifact> {
    Ok(build(filtered.iter().collect()))
}

/// Same rows as [`data_table`], optionally sorted by one column.
pub fn data_grid(filtered: &FilteredView, sort: Option<GridSort>) -> ViewResult<TableArtifact> {
    let mut rows: Vec<(usize, &Penguin)> = filtered.iter().collect();
    if let Some(sort) = sort {
        // stable: ties keep dataset order
        rows.sort_by(|(_, a), (_, b)| compare_column(a, b, sort));
    }
    Ok(build(rows))
}

fn build(rows: Vec<(usize, &Penguin)>) -> TableArtifact {
    let (row_ids, rows): (Vec<usize>, Vec<Vec<String>>) =
        rows.into_iter().map(|(i, p)| (i, p.cells())).unzip();
    TableArtifact {
        columns: &COLUMNS,
        rows,
        row_ids,
    }
}

/// Column order under `sort`. Unknown columns compare equal.
fn compare_column(a: &Penguin, b: &Penguin, sort: GridSort) -> Ordering {
    let directed = |ord: Ordering| if sort.descending { ord.reverse() } else { ord };
    match sort.column {
        0 => directed(a.species.cmp(&b.species)),
        1 => directed(a.island.cmp(&b.island)),
        2..=5 => {
            let attribute = Attribute::ALL[sort.column - 2];
            missing_last(attribute.value(a), attribute.value(b), sort.descending, f64::total_cmp)
        }
        6 => missing_last(a.sex, b.sex, sort.descending, Ord::cmp),
        7 => directed(a.year.cmp(&b.year)),
        _ => Ordering::Equal,
    }
}

/// Orders present values by `cmp` (reversed when `descending`); missing
/// values go last in either direction.
fn missing_last<T>(
    a: Option<T>,
    b: Option<T>,
    descending: bool,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => cmp(&b, &a),
        (Some(a), Some(b)) => cmp(&a, &b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::data::filter::filtered_view;
    use crate::data::model::{fixtures, Island, PenguinDataset, Sex, Species};

    fn all_of_three() -> FilteredView {
        let species: BTreeSet<_> = Species::ALL.into_iter().collect();
        let islands: BTreeSet<_> = Island::ALL.into_iter().collect();
        filtered_view(&Arc::new(fixtures::three_penguins()), &species, &islands)
    }

    #[test]
    fn table_has_every_column_and_row() {
        let table = data_table(&all_of_three()).unwrap();
        assert_eq!(table.columns, &COLUMNS);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.row_ids, vec![0, 1, 2]);
        assert!(table.rows.iter().all(|r| r.len() == COLUMNS.len()));
        assert_eq!(table.rows[2][0], "Chinstrap");
    }

    #[test]
    fn grid_sorts_by_mass() {
        let view = all_of_three();
        let ascending = GridSort::toggled(None, 5);
        let grid = data_grid(&view, Some(ascending)).unwrap();
        assert_eq!(grid.row_ids, vec![2, 0, 1]);

        let descending = GridSort::toggled(Some(ascending), 5);
        assert!(descending.descending);
        let grid = data_grid(&view, Some(descending)).unwrap();
        assert_eq!(grid.row_ids, vec![1, 0, 2]);
    }

    #[test]
    fn unsorted_grid_matches_table() {
        let view = all_of_three();
        assert_eq!(data_grid(&view, None), data_table(&view));
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        for descending in [false, true] {
            assert_eq!(missing_last(None, Some(1.0), descending, f64::total_cmp), Ordering::Greater);
            assert_eq!(missing_last(Some(1.0), None, descending, f64::total_cmp), Ordering::Less);
        }
        assert_eq!(missing_last(Some(1.0), Some(2.0), false, f64::total_cmp), Ordering::Less);
        assert_eq!(missing_last(Some(1.0), Some(2.0), true, f64::total_cmp), Ordering::Greater);
    }

    #[test]
    fn descending_grid_keeps_missing_mass_last() {
        let mut rows = fixtures::three_penguins().rows().to_vec();
        rows[0].body_mass_g = None;
        let species: BTreeSet<_> = Species::ALL.into_iter().collect();
        let islands: BTreeSet<_> = Island::ALL.into_iter().collect();
        let view = filtered_view(&Arc::new(PenguinDataset::new(rows)), &species, &islands);

        let descending = GridSort {
            column: 5,
            descending: true,
        };
        let grid = data_grid(&view, Some(descending)).unwrap();
        assert_eq!(grid.row_ids, vec![1, 2, 0]);
        assert_eq!(grid.rows[2][5], "NA");

        let ascending = GridSort {
            column: 5,
            descending: false,
        };
        assert_eq!(data_grid(&view, Some(ascending)).unwrap().row_ids, vec![2, 1, 0]);
    }

    #[test]
    fn descending_grid_keeps_missing_sex_last() {
        let mut rows = fixtures::three_penguins().rows().to_vec();
        rows[1].sex = Some(Sex::Male);
        rows[2].sex = Some(Sex::Female);
        let species: BTreeSet<_> = Species::ALL.into_iter().collect();
        let islands: BTreeSet<_> = Island::ALL.into_iter().collect();
        let view = filtered_view(&Arc::new(PenguinDataset::new(rows)), &species, &islands);

        let sort = GridSort {
            column: 6,
            descending: true,
        };
        assert_eq!(data_grid(&view, Some(sort)).unwrap().row_ids, vec![1, 2, 0]);
    }

    #[test]
    fn year_column_sorts_and_unknown_column_keeps_order() {
        let mut rows = fixtures::three_penguins().rows().to_vec();
        rows[0].year = 2009;
        rows[1].year = 2008;
        let species: BTreeSet<_> = Species::ALL.into_iter().collect();
        let islands: BTreeSet<_> = Island::ALL.into_iter().collect();
        let view = filtered_view(&Arc::new(PenguinDataset::new(rows)), &species, &islands);

        let by_year = GridSort {
            column: 7,
            descending: false,
        };
        assert_eq!(data_grid(&view, Some(by_year)).unwrap().row_ids, vec![2, 1, 0]);

        let unknown = GridSort {
            column: COLUMNS.len(),
            descending: true,
        };
        assert_eq!(data_grid(&view, Some(unknown)).unwrap().row_ids, vec![0, 1, 2]);
    }

    #[test]
    fn toggling_another_column_resets_direction() {
        let sort = GridSort {
            column: 0,
            descending: true,
        };
        assert_eq!(
            GridSort::toggled(Some(sort), 3),
            GridSort {
                column: 3,
                descending: false
            }
        );
    }
}
