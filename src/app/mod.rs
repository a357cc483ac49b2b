//! Application layer.
//!
//! # Structure
//!
//! - `workspace.rs` - Command handlers around one text surface
//! - `surface.rs` - The `TextSurface` seam and its FLTK implementation
//! - `prompts.rs` - Dialog seams (confirmation prompts, file choosers)
//! - `state.rs` - Main application coordinator
//! - `settings.rs` - Persisted configuration

pub mod error;
pub mod messages;
pub mod prompts;
pub mod settings;
pub mod state;
pub mod surface;
pub mod text_ops;
pub mod workspace;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use settings::AppSettings;
pub use state::AppState;
pub use surface::{EditorSurface, TextSurface};
pub use workspace::Workspace;
