use cs_core::TellerId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0} is currently busy serving a customer")]
    TellerBusy(TellerId),

    #[error("{teller} cannot serve {service_ticks} tick(s) starting at tick {now}: end tick is out of range")]
    TickOverflow { teller: TellerId, now: u64, service_ticks: u64 },

    #[error("dequeue from an empty waiting line")]
    EmptyQueue,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
