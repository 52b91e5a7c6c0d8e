//! Shared Dioxus components and browser provider for the location selector.
//!
//! This crate provides:
//! - `fetch`: a `LocationProvider` backed by the browser's `fetch` via `web-sys`
//! - `state`: reactive `AppState` wrapping the cascade controller in a Dioxus Signal
//! - `components`: reusable RSX components (level selectors, summary, etc.)

pub mod components;
pub mod fetch;
pub mod state;
