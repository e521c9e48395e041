//! Terminal demo: two screens driven through the dispatcher.

pub mod screens;
pub mod theme;
pub mod ui;
