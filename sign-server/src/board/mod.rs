//! Pure sign-board transformations.
//!
//! Everything in this module is deterministic and free of I/O:
//! grouping a flat arrival list into routes and directions, and
//! turning raw countdown seconds into the value shown on the sign.
//! Derived structures are rebuilt from scratch on every poll; they
//! carry no identity between render cycles.

mod eta;
mod group;

pub use eta::{EtaDisplay, format_eta};
pub use group::{DirectionArrival, DirectionGroup, RouteGroup, group_arrivals_by_route};
