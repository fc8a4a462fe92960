//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui, handles
//! keyboard input, and renders the screens.

pub mod input;
pub mod theme;
pub mod ui;

pub use input::*;
pub use theme::*;
pub use ui::*;
