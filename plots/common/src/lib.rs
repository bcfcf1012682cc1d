use std::path::Path;

use common::{config::ValueType, error::PlotError, util::find_files};
use fio::BenchmarkRecord;
use futures::{StreamExt, TryStreamExt, stream};
use tracing::{debug, info};

pub mod dataset;

pub use dataset::AggregateDataset;

pub const RESULT_SUFFIX: &str = ".json";

/// Discovers every fio report under `input` and folds them into one dataset.
///
/// The whole directory is listed before any report is parsed; the first
/// unreadable or malformed report aborts the fold.
pub async fn collect_dataset(
    input: &Path,
    value_type: ValueType,
) -> Result<AggregateDataset, PlotError> {
    let paths = find_files(input, RESULT_SUFFIX).await?;
    debug!("Got {} result files in {input:?}", paths.len());

    let dataset = stream::iter(paths)
        .then(|path| async move { BenchmarkRecord::load(&path, value_type).await })
        .try_fold(AggregateDataset::default(), |mut dataset, record| async move {
            dataset.push(record);
            Ok::<_, PlotError>(dataset)
        })
        .await?;

    if dataset.is_empty() {
        return Err(PlotError::EmptyDataset {
            path: input.to_path_buf(),
        });
    }
    info!("Collected {} runs from {input:?}", dataset.len());
    Ok(dataset)
}
