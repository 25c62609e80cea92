//! Error types for the attribute inspector.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::NcType;

/// Process exit status for every failure, whatever its kind.
pub const FAILURE_EXIT_CODE: u8 = 2;

/// Errors that can occur while inspecting a file.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened for reading.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: hdf5::Error,
    },
    /// No group by that name exists.
    #[error("group not found: {name}")]
    GroupNotFound {
        name: String,
        #[source]
        source: Option<hdf5::Error>,
    },
    /// No variable by that name exists in the group.
    #[error("variable not found: {path}")]
    VariableNotFound {
        path: String,
        #[source]
        source: Option<hdf5::Error>,
    },
    /// The variable has no attribute by that name.
    #[error("attribute not found: {variable}:{name}")]
    AttributeNotFound {
        variable: String,
        name: String,
        #[source]
        source: Option<hdf5::Error>,
    },
    /// The attribute exists but does not hold variable-length strings.
    #[error("attribute {variable}:{name} has type {found}, expected NC_STRING")]
    TypeMismatch {
        variable: String,
        name: String,
        found: NcType,
    },
    /// The attribute values could not be retrieved.
    #[error("cannot read attribute {variable}:{name}: {source}")]
    Read {
        variable: String,
        name: String,
        #[source]
        source: hdf5::Error,
    },
    /// The library returned a different number of values than it declared.
    #[error("attribute {variable}:{name} declared {expected} values but returned {actual}")]
    LengthMismatch {
        variable: String,
        name: String,
        expected: usize,
        actual: usize,
    },
    /// Closing the file failed.
    #[error("cannot close file: {0}")]
    Close(#[source] hdf5::Error),
    /// Writing the report failed.
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Coarse classification of [`Error`], one per failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Open,
    Lookup,
    TypeMismatch,
    Read,
    Cleanup,
    Output,
}

impl Error {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Open { .. } => ErrorKind::Open,
            Error::GroupNotFound { .. }
            | Error::VariableNotFound { .. }
            | Error::AttributeNotFound { .. } => ErrorKind::Lookup,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Read { .. } | Error::LengthMismatch { .. } => ErrorKind::Read,
            Error::Close(_) => ErrorKind::Cleanup,
            Error::Output(_) => ErrorKind::Output,
        }
    }

    /// The process exit status this error maps to.
    ///
    /// Uniform across kinds; callers that need to tell failures apart use
    /// [`Error::kind`].
    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}
