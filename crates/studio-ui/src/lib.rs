//! Product Image Studio UI Components
//!
//! Dioxus form controls shared by the studio editor. Every component is
//! controlled: it renders the value it is given and reports edits through an
//! `EventHandler`, leaving state ownership to the caller.
//!
//! Styling is class based (`btn-*`, `input-*`, `palette-*`); the app ships
//! the matching stylesheet.

pub mod components;

pub use components::*;
