/// Interactive session layer
///
/// This module owns the read-loop over stdin: prompting, tokenizing raw
/// input, routing it to the command dispatcher, and printing responses.

pub mod session;

// Re-export main types
pub use session::{tokenize, Session};
