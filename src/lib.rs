//! Time-decaying to-do list.
//!
//! Each task gets a time budget when created. As the budget runs out the
//! task fades, and once it is spent a periodic decay tick marks the task
//! abandoned, hiding it from every view without deleting it.

pub mod app;
pub mod decay;
pub mod domain;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod store;
pub mod ticker;
pub mod ui;
