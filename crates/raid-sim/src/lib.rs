//! Core RAID layout, parity and retention primitives used by the simulator.
#![allow(clippy::cargo_common_metadata)]

pub mod controller;
pub mod error;
pub mod layout;
pub mod retention;

pub use controller::traits::controller::RaidController;
pub use controller::traits::restore::Restore;
pub use controller::{RaidLevel, build_controller};
pub use error::{RaidError, Result};
