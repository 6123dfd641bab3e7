use crate::data::filter::FilteredView;
use crate::data::model::Species;
use crate::error::ViewError;

use super::ViewResult;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    /// `[body_mass_g, dataset row]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Body mass of each penguin against its dataset row, coloured by species.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<ScatterSeries>,
}

impl Scatter {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Build the "Penguin Mass" scatterplot. Penguins without a body mass are skipped.
pub fn mass_scatter(filtered: &FilteredView) -> ViewResult<Scatter> {
    let series: Vec<ScatterSeries> = Species::ALL
        .iter()
        .map(|&species| ScatterSeries {
            species,
            points: filtered
                .iter()
                .filter(|(_, p)| p.species == species)
                .filter_map(|(row, p)| p.body_mass_g.map(|mass| [mass, row as f64]))
                .collect(),
        })
        .filter(|s| !s.points.is_empty())
        .collect();

    if series.is_empty() {
        return Err(ViewError::Empty {
            column: "body_mass_g",
        });
    }

    Ok(Scatter {
        title: "Penguin Mass",
        x_label: "Body Mass (g)",
        y_label: "Row",
        series,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::data::filter::filtered_view;
    use crate::data::model::{fixtures, Island};

    #[test]
    fn scenario_shows_exactly_two_points() {
        let dataset = Arc::new(fixtures::three_penguins());
        let species: BTreeSet<_> = [Species::Adelie, Species::Gentoo].into_iter().collect();
        let islands: BTreeSet<_> = [Island::Torgersen, Island::Biscoe].into_iter().collect();

        let scatter = mass_scatter(&filtered_view(&dataset, &species, &islands)).unwrap();
        assert_eq!(scatter.title, "Penguin Mass");
        assert_eq!(scatter.point_count(), 2);
        assert_eq!(
            scatter.series,
            vec![
                ScatterSeries {
                    species: Species::Adelie,
                    points: vec![[3750.0, 0.0]],
                },
                ScatterSeries {
                    species: Species::Gentoo,
                    points: vec![[5000.0, 1.0]],
                },
            ]
        );
    }

    #[test]
    fn missing_mass_is_skipped() {
        let mut dataset = fixtures::three_penguins().rows().to_vec();
        dataset[1].body_mass_g = None;
        let dataset = Arc::new(crate::data::model::PenguinDataset::new(dataset));
        let all_species: BTreeSet<_> = Species::ALL.into_iter().collect();
        let all_islands: BTreeSet<_> = Island::ALL.into_iter().collect();

        let scatter = mass_scatter(&filtered_view(&dataset, &all_species, &all_islands)).unwrap();
        assert_eq!(scatter.point_count(), 2);
        assert!(scatter.series.iter().all(|s| s.species != Species::Gentoo));
    }

    #[test]
    fn empty_view_is_empty_state() {
        let dataset = Arc::new(fixtures::three_penguins());
        let view = filtered_view(&dataset, &BTreeSet::new(), &BTreeSet::new());
        assert!(matches!(mass_scatter(&view), Err(ViewError::Empty { .. })));
    }
}
