//! Classic grid Snake: tick-gated simulation core plus a ratatui front end.

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
