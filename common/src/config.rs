use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlotError;

pub const DEFAULT_TITLE: &str = "SSD Benchmark Results";
pub const DEFAULT_X_LABEL: &str = "Test Type";

/// Which pair of fio measurements is plotted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// `bw`, converted from KiB/s to MiB/s
    #[default]
    Bandwidth,
    /// `iops`, plotted as is
    Iops,
}

impl ValueType {
    /// Anything other than `iops` selects bandwidth.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "iops" => Self::Iops,
            _ => Self::Bandwidth,
        }
    }
}

/// Visual constants of the grouped bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub width_in: f64,
    pub height_in: f64,
    /// In category units, groups are 1.0 apart
    pub bar_width: f64,
    pub read_color: String,
    pub write_color: String,
    pub title_font_size: f64,
    pub label_font_size: f64,
    pub tick_font_size: f64,
    /// Degrees
    pub x_tick_rotation: f64,
    pub grid: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width_in: 12.0,
            height_in: 8.0,
            bar_width: 0.35,
            read_color: "#f15a60".to_owned(),
            write_color: "#7ac36a".to_owned(),
            title_font_size: 14.0,
            label_font_size: 12.0,
            tick_font_size: 10.0,
            x_tick_rotation: 30.0,
            grid: true,
        }
    }
}

impl ChartStyle {
    pub async fn load(path: &Path) -> Result<Self, PlotError> {
        let style_err = |source: Box<dyn std::error::Error + Send + Sync>| PlotError::Style {
            path: path.to_path_buf(),
            source,
        };
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| style_err(e.into()))?;
        let style: ChartStyle = serde_yml::from_str(&contents).map_err(|e| style_err(e.into()))?;
        debug!("Loaded chart style {style:?} from {path:?}");
        Ok(style)
    }

    /// Horizontal shift of the read and write bars from the category center
    pub fn bar_offsets(&self) -> (f64, f64) {
        (-self.bar_width / 2.0, self.bar_width / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub value_type: ValueType,
    pub output: PathBuf,
    pub style: ChartStyle,
}

/// Fully validated run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub chart: ChartConfig,
}

/// Raw options as given on the command line
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub input: Option<String>,
    pub output: Option<String>,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub value_type: Option<String>,
    pub style: ChartStyle,
}

fn required(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

impl TryFrom<Options> for Config {
    type Error = PlotError;

    fn try_from(options: Options) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let input = required(options.input, "input", &mut missing);
        let output = required(options.output, "output", &mut missing);
        let y_label = required(options.y_label, "ylabel", &mut missing);
        if !missing.is_empty() {
            return Err(PlotError::MissingOptions { missing });
        }

        let value_type = ValueType::from_selector(options.value_type.as_deref().unwrap_or("bw"));
        Ok(Config {
            input: PathBuf::from(input),
            chart: ChartConfig {
                title: options.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
                x_label: options.x_label.unwrap_or_else(|| DEFAULT_X_LABEL.to_owned()),
                y_label,
                value_type,
                output: PathBuf::from(output),
                style: options.style,
            },
        })
    }
}
