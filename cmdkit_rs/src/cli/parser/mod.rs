//! Argument tokenizer and option matcher.
//!
//! - [`core`] - the token-parsing loop
//! - [`helpers`] - flag/stop-marker classification, value splitting, suggestions

mod core;
pub mod helpers;

pub(crate) use self::core::process_arguments;
pub(crate) use helpers::suggest_similar_command;
pub use helpers::{STOP_MARKER, is_flag, is_stop_marker};
