//! Foundational types shared across the elaboration engine.
//!
//! Provides the generic [`Name`](name::Name) identifier trait the
//! elaborator is parameterized over, a dense ID-indexed [`Arena`](arena::Arena),
//! and the design's reserved literal strings.

#![warn(missing_docs)]

pub mod arena;
pub mod name;
pub mod reserved;

pub use arena::{Arena, ArenaId};
pub use name::{CaseInsensitiveName, CaseSensitiveName, Name};
