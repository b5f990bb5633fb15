//! `cs-core`: foundational types for the `counter_sim` service counter
//! simulator.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no `cs-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TellerId`                                            |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`customer`]    | `Customer`                                            |
//! | [`error`]       | `CsError`, `CsResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod customer;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use customer::Customer;
pub use error::{CsError, CsResult};
pub use ids::TellerId;
pub use time::{SimConfig, Tick};
