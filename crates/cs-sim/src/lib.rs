//! `cs-sim`: tick loop orchestrator for the counter_sim simulator.
//!
//! # Four-phase tick
//!
//! ```text
//! for tick in 1..=config.total_ticks:
//!   ① Release    : every teller, in index order, lets its customer go if
//!                   the tick has reached its busy-until tick.
//!   ② Arrival    : a non-zero service duration enqueues one new customer;
//!                   0 means nobody arrives.
//!   ③ Assignment : the head of the waiting line goes to the lowest-index
//!                   free teller, then the next head to the next free
//!                   teller, until the line or the free tellers run out.
//!   ④ Statistics : the settled queue length is folded into the running
//!                   totals.
//! ```
//!
//! The phase order is fixed, so a run is fully determined by its arrivals.
//!
//! # Quick-start
//!
//! ```rust
//! use cs_core::Tick;
//! use cs_sim::Sim;
//!
//! let mut sim = Sim::new(1)?;
//! sim.tick(Tick(1), 5)?;
//! sim.tick(Tick(2), 0)?;
//! let report = sim.final_report();
//! assert_eq!(report.served_count, 1);
//! # Ok::<(), cs_sim::SimError>(())
//! ```

pub mod error;
pub mod observer;
pub mod report;
pub mod sim;
pub mod snapshot;
pub mod stats;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{FinalReport, TellerReport};
pub use sim::Sim;
pub use snapshot::{Assignment, Snapshot, TellerSnapshot, TickResult};
pub use stats::SimStats;
