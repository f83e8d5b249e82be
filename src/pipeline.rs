// src/pipeline.rs
use tracing::info;

use crate::{
    config::{ColumnPair, PipelineConfig},
    dataset::{load_csv, Dataset},
    encode::{encode_labels, encode_names},
    error::{EncodeError, Result},
    export::write_encoded,
    progress::{NoProgress, Progress},
};

/// What one export pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Data rows written (header excluded).
    pub rows: usize,
    /// Length of every encoded name vector.
    pub width: usize,
    /// Distinct label values.
    pub classes: usize,
}

/// Load → encode → write, over one dataset held in memory.
pub struct Pipeline {
    config: PipelineConfig,
    dataset: Option<Dataset>,
    progress: Box<dyn Progress>,
}

impl Pipeline {
    /// A silent pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_progress(config, Box::new(NoProgress))
    }

    pub fn with_progress(config: PipelineConfig, progress: Box<dyn Progress>) -> Self {
        Self {
            config,
            dataset: None,
            progress,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Read the configured input. Replaces any previously loaded dataset.
    pub fn load(&mut self) -> Result<&Dataset> {
        let dataset = load_csv(&self.config.input_path, &mut *self.progress)?;
        info!(
            path = %self.config.input_path.display(),
            rows = dataset.len(),
            "loaded"
        );
        Ok(self.dataset.insert(dataset))
    }

    /// Encode `columns.name` and `columns.label` and write them to the
    /// configured output. Any error aborts before the destination is replaced.
    pub fn export(&mut self, columns: &ColumnPair) -> Result<ExportSummary> {
        let dataset = self.dataset.as_ref().ok_or(EncodeError::NotLoaded)?;
        let progress: &mut dyn Progress = &mut *self.progress;

        // both columns resolve before any encoding runs
        dataset.column_index(&columns.name)?;
        dataset.column_index(&columns.label)?;

        let vectors = encode_names(dataset, &columns.name, progress)?;
        let encoding = encode_labels(dataset, &columns.label, progress)?;
        write_encoded(
            &self.config.output_path,
            columns,
            &vectors,
            &encoding.labels,
            progress,
        )?;

        let summary = ExportSummary {
            rows: vectors.len(),
            width: vectors.first().map_or(0, Vec::len),
            classes: encoding.classes.len(),
        };
        info!(
            path = %self.config.output_path.display(),
            rows = summary.rows,
            width = summary.width,
            classes = summary.classes,
            "exported"
        );
        Ok(summary)
    }

    /// `load` then `export` with the configured columns.
    pub fn run(&mut self) -> Result<ExportSummary> {
        self.load()?;
        let columns = self.config.columns.clone();
        self.export(&columns)
    }
}
