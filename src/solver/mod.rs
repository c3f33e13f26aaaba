//! Set matching: the validity rule and the enumeration engine.
//!
//! ## Key Types
//!
//! - `Board`: ordered cards for one matching call
//! - `SetMatch`: a found Set with its board positions
//! - `Solution`: board plus matches, with a selection membership test
//!
//! Everything here is a pure function of its input. Boards are never
//! mutated and no state survives between calls, so matching may run on
//! any thread.

pub mod board;
pub mod engine;
pub mod rule;
pub mod solution;

pub use board::Board;
pub use engine::{find_set_matches, find_sets};
pub use rule::{is_set, third_card};
pub use solution::{SetMatch, Solution};
