//! Terminal output and input
//!
//! Plain line-oriented output: a splash banner, the numbered result
//! list, and the interruptible prompts the interactive loop reads from.

pub mod prompt;
pub mod results;

pub use prompt::{Prompt, Prompted, StdinPrompt};
pub use results::render_results;

use std::io::{self, Write};

/// Print the welcome banner
pub fn splash(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Jizz v{} - {}", env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS"))?;
    writeln!(out, "Use Jackett and Transmission together")?;
    writeln!(out)
}
