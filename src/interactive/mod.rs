//! Full-screen play mode

pub mod app;
mod rendering;

pub use app::{App, Stage, run_tui};
