use std::path::PathBuf;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("{} must be specified", .missing.join(", "))]
    MissingOptions { missing: Vec<&'static str> },

    #[error("Could not load chart style {path:?}")]
    Style {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("Error walking through input directory {path:?}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error loading fio JSON file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },

    #[error("fio JSON file {path:?} contains no jobs")]
    EmptyJobs { path: PathBuf },

    #[error("No data points found for plotting in {path:?}")]
    EmptyDataset { path: PathBuf },

    #[error("Could not render chart to {path:?}")]
    Render {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PlotError {
    /// Configuration problems are raised before the input directory is touched
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingOptions { .. } | Self::Style { .. })
    }

    pub fn render(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::Render {
            path: path.into(),
            source: source.into(),
        }
    }
}
