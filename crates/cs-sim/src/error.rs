use cs_core::{CsError, Tick};
use cs_service::ServiceError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A rejected construction or call.  The engine state is unchanged.
    #[error(transparent)]
    Config(#[from] CsError),

    /// The assignment scan broke a teller or queue precondition.  Fatal: the
    /// engine refuses every later tick.
    #[error("internal invariant violated at tick {tick}: {source}")]
    Invariant {
        tick:   Tick,
        source: ServiceError,
    },

    #[error("engine aborted after an internal invariant violation")]
    Aborted,
}

impl SimError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SimError::Config(CsError::Config(msg.into()))
    }
}

pub type SimResult<T> = Result<T, SimError>;
