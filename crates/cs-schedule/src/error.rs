use cs_core::Tick;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("arrival at tick 0: ticks are numbered from 1")]
    TickZero,

    #[error("more than one arrival at tick {0}")]
    DuplicateTick(Tick),

    #[error("service of {service_ticks} tick(s) arriving at tick {tick} ends past the last tick")]
    EndsPastLastTick { tick: Tick, service_ticks: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
