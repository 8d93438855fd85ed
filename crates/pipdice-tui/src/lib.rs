//! Terminal host for the pipdice dice widget.
//!
//! Mounts a [`pipdice_core::DiceBox`] on a file-backed store, renders it with
//! ratatui, and drives the roll animation timer from the event loop.

pub mod app;
pub mod render;
pub mod terminal;
