//! Startup configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file (`--config`), then individual command-line flags.
//!
//! ```toml
//! title = "Penguin Data"
//! sidebar_bg = "#f8f8f8"
//! sidebar_open = true
//! default_attribute = "body_mass_g"
//! plotly_bin_count = 50
//! seaborn_bin_count = 50
//! species = ["Adelie", "Gentoo"]
//! islands = ["Biscoe", "Dream", "Torgersen"]
//! data_path = "data/penguins.csv"
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use eframe::egui::Color32;
use serde::Deserialize;

use crate::color;
use crate::data::model::{Attribute, Island, Species};
use crate::error::ConfigError;
use crate::views::histogram::MAX_BINS;

pub const DEFAULT_TITLE: &str = "Penguin Data - Brendan";
pub const DEFAULT_SIDEBAR_BG: &str = "#f8f8f8";
pub const DEFAULT_BIN_COUNT: u32 = 50;
/// The palmerpenguins CSV, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/penguins.csv";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/reedbc1/cintel-02-data/tree/main";

/// Range of the Seaborn bin slider.
pub const SEABORN_BIN_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Window / page title.
    pub title: String,
    /// Sidebar background as a hex colour.
    pub sidebar_bg: String,
    /// Whether the sidebar starts expanded.
    pub sidebar_open: bool,
    pub default_attribute: Attribute,
    pub plotly_bin_count: i64,
    pub seaborn_bin_count: u32,
    /// Species checked at startup.
    pub species: Vec<Species>,
    /// Islands checked at startup.
    pub islands: Vec<Island>,
    pub github_url: String,
    /// Penguin CSV loaded at startup.
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            sidebar_bg: DEFAULT_SIDEBAR_BG.to_string(),
            sidebar_open: true,
            default_attribute: Attribute::default(),
            plotly_bin_count: i64::from(DEFAULT_BIN_COUNT),
            seaborn_bin_count: DEFAULT_BIN_COUNT,
            species: Species::ALL.to_vec(),
            islands: Island::ALL.to_vec(),
            github_url: DEFAULT_GITHUB_URL.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sidebar_color()?;

        if !(1..=MAX_BINS).contains(&self.plotly_bin_count) {
            return Err(ConfigError::BinCountOutOfRange {
                name: "plotly_bin_count",
                value: self.plotly_bin_count,
                min: 1,
                max: MAX_BINS,
            });
        }
        if !SEABORN_BIN_RANGE.contains(&self.seaborn_bin_count) {
            return Err(ConfigError::BinCountOutOfRange {
                name: "seaborn_bin_count",
                value: i64::from(self.seaborn_bin_count),
                min: i64::from(*SEABORN_BIN_RANGE.start()),
                max: i64::from(*SEABORN_BIN_RANGE.end()),
            });
        }
        Ok(())
    }

    pub fn sidebar_color(&self) -> Result<Color32, ConfigError> {
        color::parse_hex(&self.sidebar_bg).map_err(|e| ConfigError::InvalidColor {
            value: self.sidebar_bg.clone(),
            reason: e.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(version, about = "Interactive Palmer penguins dashboard")]
pub struct Cli {
    /// TOML file with dashboard settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Penguin CSV to load instead of the configured one.
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Override the window title.
    #[arg(long)]
    pub title: Option<String>,
}

impl Cli {
    /// Merge the config file (if any) with flags given on the command line.
    pub fn resolve(self) -> Result<DashboardConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::load(path)?,
            None => DashboardConfig::default(),
        };
        if let Some(data) = self.data {
            config.data_path = data;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        Ok(config)
    }
}
