//! Transformation errors
//!
//! Every failure is one of two kinds: the input could not be taken as a
//! document ([`FailureKind::Parse`]) or producing the output went wrong
//! ([`FailureKind::Generation`]). The underlying cause is kept as the
//! error source for logging.

use splitkit_dom::DomError;
use splitkit_html::ParseError;
use splitkit_security::SanitizeError;

/// The two reportable failure classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Parse,
    Generation,
}

/// Underlying reason for a [`TransformError`]
#[derive(Debug, thiserror::Error)]
pub enum FailureCause {
    #[error("input is empty")]
    EmptyInput,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Sanitize(#[from] SanitizeError),
}

/// Split/combine error
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("invalid HTML document")]
    Parse(#[source] FailureCause),

    #[error("failed to generate document")]
    Generation(#[source] FailureCause),
}

impl TransformError {
    pub fn parse(cause: impl Into<FailureCause>) -> Self {
        Self::Parse(cause.into())
    }

    pub fn generation(cause: impl Into<FailureCause>) -> Self {
        Self::Generation(cause.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Parse(_) => FailureKind::Parse,
            Self::Generation(_) => FailureKind::Generation,
        }
    }

    pub fn cause(&self) -> &FailureCause {
        match self {
            Self::Parse(cause) | Self::Generation(cause) => cause,
        }
    }
}

/// Tree mutation failures are generation failures
impl From<DomError> for TransformError {
    fn from(err: DomError) -> Self {
        Self::generation(err)
    }
}
