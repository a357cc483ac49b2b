//! Tether - a minimal notepad built with FLTK.
//!
//! One window, one text surface. The `app` module holds the command
//! handlers and their collaborator seams; `ui` holds the FLTK widgets
//! and dialog implementations.

pub mod app;
pub mod ui;
