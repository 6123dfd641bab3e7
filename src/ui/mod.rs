pub mod panels;
pub mod plot;
pub mod table;

/// Tabs of the left card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataTab {
    #[default]
    Table,
    Grid,
}

impl DataTab {
    pub const ALL: [DataTab; 2] = [DataTab::Table, DataTab::Grid];

    pub fn label(self) -> &'static str {
        match self {
            DataTab::Table => "Data Table",
            DataTab::Grid => "Data Grid",
        }
    }
}

/// Tabs of the right card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartTab {
    #[default]
    PlotlyHistogram,
    SeabornHistogram,
    Scatterplot,
}

impl ChartTab {
    pub const ALL: [ChartTab; 3] = [
        ChartTab::PlotlyHistogram,
        ChartTab::SeabornHistogram,
        ChartTab::Scatterplot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartTab::PlotlyHistogram => "Plotly Histogram",
            ChartTab::SeabornHistogram => "Seaborn Histogram",
            ChartTab::Scatterplot => "Scatterplot",
        }
    }
}
