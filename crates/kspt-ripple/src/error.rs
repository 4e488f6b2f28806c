use kspt_core::Tick;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RippleError {
    #[error("invalid stage input: {0}")]
    InvalidInput(String),

    #[error("stage cancelled at {tick}")]
    Cancelled { tick: Tick },

    #[error("stage exceeded its budget of {limit} ticks (stopped at {tick})")]
    TickLimit { limit: u64, tick: Tick },
}

pub type RippleResult<T> = Result<T, RippleError>;
