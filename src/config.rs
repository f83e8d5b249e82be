use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    path::{Path, PathBuf},
};

pub const DEFAULT_NAME_COLUMN: &str = "Name";
pub const DEFAULT_LABEL_COLUMN: &str = "Nation";

pub const USAGE: &str =
    "Usage: namecodec <INPUT> <OUTPUT> [NAME_COLUMN] [LABEL_COLUMN]\n       namecodec <CONFIG.yaml>";

/// The text column to code-point encode and the categorical column to label.
/// Also used verbatim as the output header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPair {
    pub name: String,
    pub label: String,
}

impl ColumnPair {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

impl Default for ColumnPair {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_COLUMN, DEFAULT_LABEL_COLUMN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default)]
    pub columns: ColumnPair,
}

impl PipelineConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            columns: ColumnPair::default(),
        }
    }

    pub fn with_columns(mut self, columns: ColumnPair) -> Self {
        self.columns = columns;
        self
    }

    /// Parse the process arguments (without the program name).
    ///
    /// One argument is a YAML config file; two to four are
    /// `<INPUT> <OUTPUT> [NAME_COLUMN] [LABEL_COLUMN]`.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        match args.as_slice() {
            [config] => Self::from_yaml_file(config),
            [input, output] => Ok(Self::new(input, output)),
            [input, output, name] => Ok(Self::new(input, output)
                .with_columns(ColumnPair::new(name.as_str(), DEFAULT_LABEL_COLUMN))),
            [input, output, name, label] => Ok(Self::new(input, output)
                .with_columns(ColumnPair::new(name.as_str(), label.as_str()))),
            _ => bail!("{}", USAGE),
        }
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening config {:?}", path))?;
        let cfg: Self =
            serde_yaml::from_reader(f).with_context(|| format!("parsing config {:?}", path))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn positional_paths_use_default_columns() {
        let cfg = PipelineConfig::from_args(["in.csv", "out.csv"]).unwrap();
        assert_eq!(cfg.input_path, PathBuf::from("in.csv"));
        assert_eq!(cfg.output_path, PathBuf::from("out.csv"));
        assert_eq!(cfg.columns, ColumnPair::new("Name", "Nation"));
    }

    #[test]
    fn positional_columns_override_defaults() {
        let cfg = PipelineConfig::from_args(["in.csv", "out.csv", "Name", "City"]).unwrap();
        assert_eq!(cfg.columns, ColumnPair::new("Name", "City"));

        let cfg = PipelineConfig::from_args(["in.csv", "out.csv", "Surname"]).unwrap();
        assert_eq!(cfg.columns, ColumnPair::new("Surname", "Nation"));
    }

    #[test]
    fn wrong_arity_prints_usage() {
        let empty: [&str; 0] = [];
        let err = PipelineConfig::from_args(empty).unwrap_err();
        assert!(err.to_string().contains("Usage"));
        assert!(PipelineConfig::from_args(["a", "b", "c", "d", "e"]).is_err());
    }

    #[test]
    fn loads_yaml_config() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "input_path: data/names.csv\noutput_path: out.csv\ncolumns:\n  name: Name\n  label: City"
        )
        .unwrap();

        let cfg = PipelineConfig::from_args([tmp.path().to_string_lossy().to_string()]).unwrap();
        assert_eq!(cfg.input_path, PathBuf::from("data/names.csv"));
        assert_eq!(cfg.columns, ColumnPair::new("Name", "City"));
    }

    #[test]
    fn yaml_columns_default_when_absent() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "input_path: a.csv\noutput_path: b.csv").unwrap();
        let cfg = PipelineConfig::from_yaml_file(tmp.path()).unwrap();
        assert_eq!(cfg.columns, ColumnPair::default());
    }

    #[test]
    fn missing_yaml_file_has_context() {
        let err = PipelineConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("opening config"));
    }
}
