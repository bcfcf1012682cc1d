use fio::BenchmarkRecord;
use itertools::izip;

/// Labels and read/write values of every plotted run, index aligned.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AggregateDataset {
    labels: Vec<String>,
    read_values: Vec<f64>,
    write_values: Vec<f64>,
}

impl AggregateDataset {
    pub fn push(&mut self, record: BenchmarkRecord) {
        self.labels.push(record.label);
        self.read_values.push(record.read_value);
        self.write_values.push(record.write_value);
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn read_values(&self) -> &[f64] {
        &self.read_values
    }

    pub fn write_values(&self) -> &[f64] {
        &self.write_values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_values.is_empty() && self.write_values.is_empty()
    }

    /// `(label, read, write)` per run
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        izip!(&self.labels, &self.read_values, &self.write_values)
            .map(|(label, read, write)| (label.as_str(), *read, *write))
    }
}

impl FromIterator<BenchmarkRecord> for AggregateDataset {
    fn from_iter<I: IntoIterator<Item = BenchmarkRecord>>(iter: I) -> Self {
        let mut dataset = Self::default();
        for record in iter {
            dataset.push(record);
        }
        dataset
    }
}
