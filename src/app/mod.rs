//! Interactive application layer.
//!
//! This module provides the prompt dialogue, the console result sink, and
//! the session loop used by the binary.

pub mod prompt;
pub mod session;

// Re-export public API
pub use prompt::{ExportChoice, ExportPlan, PromptInput, Prompter};
pub use session::{
    run_batch, run_interactive, run_session, stdout_output, ConsoleSink, SessionReport,
    SharedOutput,
};
