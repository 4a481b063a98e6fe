//! taskmgr - a personal task tracker
//!
//! Tasks persist either in a JSON document file or an embedded SQLite
//! table; both backends implement the same [`storage::TaskStore`] contract
//! and the backend choice is fixed at startup.

pub mod config;
pub mod error;
pub mod render;
pub mod storage;
pub mod task;

pub use error::{Result, TaskError};
