//! Runtime configuration: which file, group, variable and attribute to read.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Group looked up when none is given.
pub const DEFAULT_GROUP: &str = "All_Data";
/// Variable looked up when none is given.
pub const DEFAULT_VARIABLE: &str = "CAPE";
/// Attribute read when none is given.
pub const DEFAULT_ATTRIBUTE: &str = "units";

/// Command line of the `ncinspect` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ncinspect",
    version,
    about = "Print a string attribute of a variable in a NetCDF-4 / HDF5 file"
)]
pub struct Cli {
    /// Path to the NetCDF-4 / HDF5 file.
    #[arg(env = "NCINSPECT_FILE")]
    pub path: PathBuf,

    /// Group holding the variable; nested groups are separated by `/`.
    #[arg(short, long, env = "NCINSPECT_GROUP", default_value = DEFAULT_GROUP)]
    pub group: String,

    /// Variable whose attribute is read.
    #[arg(short = 'n', long, env = "NCINSPECT_VARIABLE", default_value = DEFAULT_VARIABLE)]
    pub variable: String,

    /// String attribute to print.
    #[arg(short, long, env = "NCINSPECT_ATTRIBUTE", default_value = DEFAULT_ATTRIBUTE)]
    pub attribute: String,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive selected by the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn config(&self) -> InspectConfig {
        InspectConfig {
            path: self.path.clone(),
            group: self.group.clone(),
            variable: self.variable.clone(),
            attribute: self.attribute.clone(),
        }
    }
}

/// What a single inspection run reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    pub path: PathBuf,
    pub group: String,
    pub variable: String,
    pub attribute: String,
}

impl InspectConfig {
    /// Configuration for `path` with the default group, variable and attribute.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            group: DEFAULT_GROUP.to_string(),
            variable: DEFAULT_VARIABLE.to_string(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }
}
