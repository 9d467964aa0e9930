use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before any key derivation takes place.
///
/// Every variant is a caller error: nothing here is transient, so nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// An integer literal could not be parsed.
    #[error("invalid integer {input:?}: {reason}")]
    Format { input: String, reason: String },

    /// The group parameters failed validation.
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),

    /// The secret is not in `[1, prime - 1]`.
    #[error("private key {secret:#x} must be between 1 and prime {prime:#x}")]
    Range { secret: BigUint, prime: BigUint },

    /// A value required by the requested operation was not supplied.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// A single-value file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ways a `(prime, generator)` pair can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("{0:#x} is not prime")]
    NotPrime(BigUint),
    #[error("{root:#x} is not a generator of the multiplicative group modulo {prime:#x}")]
    NotPrimitiveRoot { root: BigUint, prime: BigUint },
    #[error("generator {generator:#x} is outside [2, {prime:#x} - 1]")]
    GeneratorOutOfRange { generator: BigUint, prime: BigUint },
}

/// Coarse classification of [`Error`], stable enough to map onto exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    InvalidParameter,
    Range,
    MissingInput,
    Io,
}

impl Error {
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn range(secret: &BigUint, prime: &BigUint) -> Self {
        Error::Range {
            secret: secret.clone(),
            prime: prime.clone(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format { .. } => ErrorKind::Format,
            Error::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Error::Range { .. } => ErrorKind::Range,
            Error::MissingInput(_) => ErrorKind::MissingInput,
            Error::Io { .. } => ErrorKind::Io,
        }
    }
}
