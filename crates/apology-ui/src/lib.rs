//! Apology Card UI Components
//!
//! This crate provides the Dioxus components the card pages are built
//! from, in the soft rose-on-snow look of the card.
//!
//! ## Palette
//!
//! - **Rose (#f43f5e)**: primary actions, highlighted dates
//! - **Slate (#0f172a)**: the voucher and the reunion button
//! - **Snow (#fffafa)**: page background
//!
//! Randomized pieces (the evasive button, the particle field) take their
//! draws from `apology_core`, never from the component itself.

pub mod components;

pub use components::*;
