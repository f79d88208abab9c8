//! Game loop driver.
//!
//! Turns input events and fall-timer fires into rule engine calls. Every event is a
//! tagged [`Action`] handled by one `match`; the driver never inspects event types
//! at runtime beyond that.

pub mod action;
pub mod session;
pub mod timer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use action::{dispatch, Action, Flow};
pub use session::{DriverConfig, Session};
pub use timer::FallTimer;
