//! `cs-schedule`: where customer arrivals come from.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`arrivals`]  | `ArrivalSource` trait, `ArrivalScript`                    |
//! | [`loader`]    | `load_arrivals_csv`, `load_arrivals_reader`               |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Arrival model
//!
//! At most one customer arrives per tick.  An arrival is described only by
//! its service duration; a duration of 0 means nobody arrives that tick.
//! Nothing here is random: every arrival is supplied from outside, either
//! by a script (CSV or in-memory) or by a driver asking a human.

pub mod arrivals;
pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use arrivals::{ArrivalScript, ArrivalSource};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_arrivals_csv, load_arrivals_reader};
