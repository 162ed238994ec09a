//! Shared Dioxus layer for the smart farming dashboard.
//!
//! - `view`: page enum and navigation state
//! - `state`: reactive AppState with Dioxus Signals
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `components`: reusable RSX components (sidebar, header, cards, selectors)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod view;
