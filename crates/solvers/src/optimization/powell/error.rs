use std::error::Error as StdError;

use crate::optimization::EvalError;

/// Errors that can occur during a Powell search.
///
/// The first failing evaluation aborts the search; there is no recovery.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model call failed.
    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    /// Failed to construct input or compute the objective.
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
