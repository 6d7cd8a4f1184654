//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation path (from HTTP request or history)
//!     → router.rs (ordered table scan)
//!     → matcher.rs (exact literal or wildcard)
//!     → Return: the one Page to render
//!
//! Table construction (at startup):
//!     Route[]
//!     → validate (single trailing wildcard, no duplicates)
//!     → freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once, immutable at runtime
//! - First match wins, wildcard is always last
//! - Dispatch is total: every path yields a page

pub mod matcher;
pub mod router;

pub use router::{Route, RouteTable, RouteTableError};
