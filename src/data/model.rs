use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    /// Display order used by the sidebar and chart legends.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
}

impl Island {
    pub const ALL: [Island; 3] = [Island::Torgersen, Island::Biscoe, Island::Dream];

    pub fn as_str(self) -> &'static str {
        match self {
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
            Island::Torgersen => "Torgersen",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => f.write_str("female"),
            Sex::Male => f.write_str("male"),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric columns
// ---------------------------------------------------------------------------

/// One of the four numeric measurement columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    #[default]
    BillLengthMm,
    BillDepthMm,
    FlipperLengthMm,
    BodyMassG,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::BillLengthMm,
        Attribute::BillDepthMm,
        Attribute::FlipperLengthMm,
        Attribute::BodyMassG,
    ];

    /// Column name as it appears in the dataset header.
    pub fn column(self) -> &'static str {
        match self {
            Attribute::BillLengthMm => "bill_length_mm",
            Attribute::BillDepthMm => "bill_depth_mm",
            Attribute::FlipperLengthMm => "flipper_length_mm",
            Attribute::BodyMassG => "body_mass_g",
        }
    }

    pub fn value(self, penguin: &Penguin) -> Option<f64> {
        match self {
            Attribute::BillLengthMm => penguin.bill_length_mm,
            Attribute::BillDepthMm => penguin.bill_depth_mm,
            Attribute::FlipperLengthMm => penguin.flipper_length_mm,
            Attribute::BodyMassG => penguin.body_mass_g,
        }
    }

    /// Format a measurement the way the source file writes it.
    pub fn format(self, value: Option<f64>) -> String {
        match (self, value) {
            (_, None) => "NA".to_string(),
            (Attribute::BillLengthMm | Attribute::BillDepthMm, Some(v)) => format!("{v:.1}"),
            (Attribute::FlipperLengthMm | Attribute::BodyMassG, Some(v)) => format!("{v:.0}"),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single measured penguin. Measurements are `None` where the source says `NA`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Penguin {
    pub species: Species,
    pub island: Island,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub bill_length_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub bill_depth_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub flipper_length_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub body_mass_g: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub sex: Option<Sex>,
    pub year: u16,
}

/// Header of the dataset, in display order.
pub const COLUMNS: [&str; 8] = [
    "species",
    "island",
    "bill_length_mm",
    "bill_depth_mm",
    "flipper_length_mm",
    "body_mass_g",
    "sex",
    "year",
];

impl Penguin {
    /// Render every column as display text, in [`COLUMNS`] order.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(COLUMNS.len());
        cells.push(self.species.to_string());
        cells.push(self.island.to_string());
        for attribute in Attribute::ALL {
            cells.push(attribute.format(attribute.value(self)));
        }
        cells.push(
            self.sex
                .map(|s| s.to_string())
                .unwrap_or_else(|| "NA".to_string()),
        );
        cells.push(self.year.to_string());
        cells
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The immutable dataset, loaded once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct PenguinDataset {
    rows: Vec<Penguin>,
}

impl PenguinDataset {
    pub fn new(rows: Vec<Penguin>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Penguin] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Penguin> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn penguin(species: Species, island: Island, body_mass_g: f64) -> Penguin {
        Penguin {
            species,
            island,
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(190.0),
            body_mass_g: Some(body_mass_g),
            sex: None,
            year: 2007,
        }
    }

    /// The three-penguin dataset used across scenario tests.
    pub fn three_penguins() -> PenguinDataset {
        PenguinDataset::new(vec![
            penguin(Species::Adelie, Island::Torgersen, 3750.0),
            penguin(Species::Gentoo, Island::Biscoe, 5000.0),
            penguin(Species::Chinstrap, Island::Dream, 3500.0),
        ])
    }

    /// Rows in the palmerpenguins layout covering every species and island,
    /// with one all-NA record.
    pub const SAMPLE_CSV: &str = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
Adelie,Torgersen,39.1,18.7,181,3750,male,2007
Adelie,Torgersen,39.5,17.4,186,3800,female,2007
Adelie,Torgersen,40.3,18,195,3250,female,2007
Adelie,Torgersen,NA,NA,NA,NA,NA,2007
Adelie,Torgersen,36.7,19.3,193,3450,female,2007
Adelie,Torgersen,39.3,20.6,190,3650,male,2007
Adelie,Torgersen,38.9,17.8,181,3625,female,2007
Adelie,Torgersen,39.2,19.6,195,4675,male,2007
Adelie,Biscoe,37.8,18.3,174,3400,female,2007
Adelie,Dream,39.5,16.7,178,3250,female,2007
Gentoo,Biscoe,46.1,13.2,211,4500,female,2007
Gentoo,Biscoe,50,16.3,230,5700,male,2007
Chinstrap,Dream,46.5,17.9,192,3500,female,2007
Chinstrap,Dream,50,19.5,196,3900,male,2007
";

    pub fn sample() -> PenguinDataset {
        crate::data::loader::load_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }
}
