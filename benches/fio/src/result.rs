use serde::{Deserialize, Serialize};

/// The subset of fio's `--output-format=json` report that is plotted.
///
/// Missing numeric fields default to zero and unknown fields are ignored.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FioResult {
    #[serde(rename = "fio version")]
    pub fio_version: Option<String>,
    pub jobs: Vec<Job>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub jobname: Option<String>,
    pub read: Measurement,
    pub write: Measurement,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurement {
    /// KiB/s
    pub bw: f64,
    pub iops: f64,
}
