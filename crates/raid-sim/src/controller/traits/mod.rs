//! Controller and restoration trait definitions.

pub mod controller;
pub mod restore;
