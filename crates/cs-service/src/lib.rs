//! `cs-service`: the two stateful building blocks of the counter.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`teller`] | `Teller` (Free/Busy state machine), `TellerStatus`    |
//! | [`queue`]  | `WaitingQueue` (strict FIFO of `Customer`)            |
//! | [`error`]  | `ServiceError`, `ServiceResult<T>`                    |
//!
//! Both types are owned and mutated only by the simulation engine.  The
//! errors here are precondition violations (assign while busy, dequeue from
//! an empty line) that a correct engine never triggers.

pub mod error;
pub mod queue;
pub mod teller;

#[cfg(test)]
mod tests;

pub use error::{ServiceError, ServiceResult};
pub use queue::WaitingQueue;
pub use teller::{Teller, TellerStatus};
