use std::collections::HashMap;

use tracing::debug;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::progress::Progress;

/// Dense labels for one categorical column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelEncoding {
    /// One label per data row, in row order.
    pub labels: Vec<u32>,
    /// Distinct raw values in first-seen order; `classes[label]` is the value.
    pub classes: Vec<String>,
}

impl LabelEncoding {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn class_of(&self, label: u32) -> Option<&str> {
        self.classes.get(label as usize).map(String::as_str)
    }
}

#[derive(Default)]
struct Fold<'a> {
    seen: HashMap<&'a str, u32>,
    enc: LabelEncoding,
}

impl<'a> Fold<'a> {
    fn push(mut self, value: &'a str) -> Self {
        let next = self.enc.classes.len() as u32;
        let label = *self.seen.entry(value).or_insert_with(|| {
            self.enc.classes.push(value.to_string());
            next
        });
        self.enc.labels.push(label);
        self
    }
}

/// Assign labels 0, 1, 2, ... to distinct values in order of first appearance.
pub fn label_values<'a, I>(values: I) -> LabelEncoding
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().fold(Fold::default(), Fold::push).enc
}

/// Label-encode column `column` of every data row.
///
/// A header-only dataset yields an empty encoding.
#[tracing::instrument(level = "info", skip(dataset, progress))]
pub fn encode_labels(
    dataset: &Dataset,
    column: &str,
    progress: &mut dyn Progress,
) -> Result<LabelEncoding> {
    let values = dataset.column_values(column)?;

    progress.start("Handle Nation", values.len() as u64);
    let encoding = label_values(values.into_iter().inspect(|_| progress.inc(1)));
    progress.finish();

    debug!(
        rows = encoding.len(),
        classes = encoding.classes.len(),
        "labels assigned"
    );
    Ok(encoding)
}
