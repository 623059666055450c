use std::{io, path::PathBuf};

use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::ModelKind;

/// Errors that can occur while building a [`ModelBook`](super::ModelBook).
#[derive(Debug, Error)]
pub enum BuildError {
    /// Two models were registered under the same key.
    ///
    /// Keys are computed from fixed configuration, so this always indicates a
    /// bug in how the book is populated.
    #[error("duplicate key '{key}' in {kind}")]
    DuplicateKey { kind: ModelKind, key: String },

    /// The turbine curve file could not be read.
    #[error("cannot read turbine curves from {}", .path.display())]
    CurveSource {
        path: PathBuf,

        #[source]
        source: io::Error,
    },

    /// A model was configured with a parameter outside its valid range.
    #[error("invalid parameter for model '{model}'")]
    InvalidParameter {
        /// Key or family name of the offending model.
        model: String,

        #[source]
        source: ConstraintError,
    },
}

impl BuildError {
    /// Creates an invalid parameter error for the named model.
    pub(super) fn invalid_parameter(model: impl Into<String>, source: ConstraintError) -> Self {
        Self::InvalidParameter {
            model: model.into(),
            source,
        }
    }
}

/// A turbine referenced a key missing from the source model book.
///
/// Reduction stops at the first missing key; no partial book is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("turbine {turbine} references unknown key '{key}' in {kind}")]
pub struct LookupError {
    /// Mapping the key was looked up in.
    pub kind: ModelKind,

    /// The missing key.
    pub key: String,

    /// Position of the referencing turbine in the farm.
    pub turbine: usize,
}
