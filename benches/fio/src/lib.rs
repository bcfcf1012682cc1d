use std::path::Path;

use common::{
    KIB_PER_MIB,
    config::ValueType,
    error::PlotError,
    util::{file_label, read_json_file},
};
use tracing::debug;

pub mod result;

use result::FioResult;

/// Read and write value of one fio run, already in display units
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub label: String,
    pub read_value: f64,
    pub write_value: f64,
}

impl BenchmarkRecord {
    /// Parses the fio report at `path` and takes the values of its first job
    pub async fn load(path: &Path, value_type: ValueType) -> Result<Self, PlotError> {
        let result: FioResult = read_json_file(path).await?;
        let record = Self::from_result(&result, path, value_type)?;
        debug!(
            "{path:?}: read {} write {} ({value_type:?})",
            record.read_value, record.write_value
        );
        Ok(record)
    }

    pub fn from_result(
        result: &FioResult,
        path: &Path,
        value_type: ValueType,
    ) -> Result<Self, PlotError> {
        let job = result.jobs.first().ok_or_else(|| PlotError::EmptyJobs {
            path: path.to_path_buf(),
        })?;
        if result.jobs.len() > 1 {
            debug!(
                "{path:?} has {} jobs, only the first is plotted",
                result.jobs.len()
            );
        }

        let (read_value, write_value) = match value_type {
            ValueType::Iops => (job.read.iops, job.write.iops),
            ValueType::Bandwidth => (job.read.bw / KIB_PER_MIB, job.write.bw / KIB_PER_MIB),
        };
        Ok(Self {
            label: file_label(path),
            read_value,
            write_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const READ_4K: &str =
        r#"{"jobs":[{"read":{"bw":102400,"iops":25600},"write":{"bw":51200,"iops":12800}}]}"#;

    fn parse(json: &str) -> FioResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn bandwidth_is_converted_to_mib() {
        let record = BenchmarkRecord::from_result(
            &parse(READ_4K),
            Path::new("results/read-4k.json"),
            ValueType::Bandwidth,
        )
        .unwrap();
        assert_eq!(
            record,
            BenchmarkRecord {
                label: "read-4k".to_owned(),
                read_value: 100.0,
                write_value: 50.0,
            }
        );
    }

    #[test]
    fn fractional_bandwidth_is_not_rounded() {
        let result = parse(r#"{"jobs":[{"read":{"bw":1000,"iops":1},"write":{"bw":3,"iops":1}}]}"#);
        let record =
            BenchmarkRecord::from_result(&result, Path::new("x.json"), ValueType::Bandwidth)
                .unwrap();
        assert_eq!(record.read_value, 1000.0 / 1024.0);
        assert_eq!(record.write_value, 3.0 / 1024.0);
    }

    #[test]
    fn iops_are_taken_verbatim() {
        let record = BenchmarkRecord::from_result(
            &parse(READ_4K),
            Path::new("read-4k.json"),
            ValueType::Iops,
        )
        .unwrap();
        assert_eq!(record.read_value, 25600.0);
        assert_eq!(record.write_value, 12800.0);
    }

    #[test]
    fn only_the_first_job_counts() {
        let result = parse(
            r#"{"jobs":[
                {"jobname":"first","read":{"bw":2048,"iops":10},"write":{"bw":1024,"iops":5}},
                {"jobname":"second","read":{"bw":99999,"iops":99},"write":{"bw":99999,"iops":99}}
            ]}"#,
        );
        let record =
            BenchmarkRecord::from_result(&result, Path::new("mixed.json"), ValueType::Bandwidth)
                .unwrap();
        assert_eq!((record.read_value, record.write_value), (2.0, 1.0));
    }

    #[test]
    fn real_report_fields_are_ignored() {
        let result = parse(
            r#"{"fio version":"fio-3.36","timestamp":1700000000,"jobs":[{"jobname":"seqwrite",
                "job options":{"rw":"write","bs":"128k"},
                "read":{"io_bytes":0,"bw":0,"iops":0.0,"clat_ns":{"mean":0.0}},
                "write":{"io_bytes":1073741824,"bw":524288,"iops":4096.5,"bw_mean":524000.1}}]}"#,
        );
        assert_eq!(result.fio_version.as_deref(), Some("fio-3.36"));
        let record = BenchmarkRecord::from_result(
            &result,
            Path::new("seqwrite-128k.json"),
            ValueType::Iops,
        )
        .unwrap();
        assert_eq!(record.label, "seqwrite-128k");
        assert_eq!((record.read_value, record.write_value), (0.0, 4096.5));
    }

    #[test]
    fn empty_jobs_are_reported() {
        for json in [r#"{"jobs":[]}"#, "{}"] {
            let err = BenchmarkRecord::from_result(
                &parse(json),
                Path::new("empty.json"),
                ValueType::Bandwidth,
            )
            .unwrap_err();
            match err {
                PlotError::EmptyJobs { path } => assert_eq!(path, PathBuf::from("empty.json")),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("read-4k.json");
        tokio::fs::write(&path, READ_4K).await.unwrap();

        let record = BenchmarkRecord::load(&path, ValueType::Bandwidth)
            .await
            .unwrap();
        assert_eq!(record.label, "read-4k");
        assert_eq!(record.read_value, 100.0);
    }

    #[tokio::test]
    async fn load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let err = BenchmarkRecord::load(&path, ValueType::Bandwidth)
            .await
            .unwrap_err();
        assert!(matches!(err, PlotError::Parse { .. }));
    }
}
