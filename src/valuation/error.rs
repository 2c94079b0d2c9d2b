use thiserror::Error;

pub type Result<T> = std::result::Result<T, ValuationError>;

/// Everything the valuation engine can report to its caller.
///
/// The engine is pure and deterministic, so none of these are retried
/// internally; they surface as-is.
#[derive(Debug, Clone, Error)]
pub enum ValuationError {
    /// A price or numeric feature string does not match the expected format.
    #[error("could not parse {what} from {value:?}")]
    Parse { what: &'static str, value: String },

    /// The reference set was empty.
    #[error("reference set is empty")]
    EmptyInput,

    /// A required query feature is absent and has no defined default.
    #[error("query is missing required feature {0:?}")]
    MissingFeature(&'static str),

    /// The bracketing scan over the score curve exhausted without finding an
    /// adjacent pair enclosing the query.
    #[error("no curve segment brackets point {0}")]
    Interpolation(f64),
}

impl ValuationError {
    pub(crate) fn parse(what: &'static str, value: &str) -> Self {
        Self::Parse {
            what,
            value: value.to_string(),
        }
    }
}
