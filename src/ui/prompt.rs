//! Interruptible line prompts
//!
//! Ctrl-C while a prompt is waiting is reported as [`Prompted::Interrupted`]
//! instead of killing the process, so the caller decides what an
//! interrupt means at each prompt. End of input counts as an interrupt too.

use std::io::{self, BufRead, Write};
use tokio::sync::mpsc;

/// Outcome of a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted {
    Line(String),
    Interrupted,
}

/// Source of user input lines and interrupts
#[allow(async_fn_in_trait)]
pub trait Prompt {
    async fn read_line(&mut self, prompt: &str) -> io::Result<Prompted>;

    /// Resolves when the user interrupts outside of a prompt
    async fn interrupted(&mut self) -> io::Result<()>;
}

/// Prompt on stdout, read from stdin.
///
/// Lines are read on a plain thread and forwarded over a channel. A read
/// blocked on the terminal can't be cancelled, and a thread parked there
/// must not hold up runtime shutdown when the user quits.
pub struct StdinPrompt {
    lines: mpsc::UnboundedReceiver<io::Result<String>>,
}

impl StdinPrompt {
    pub fn new() -> io::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || {
                for line in io::stdin().lock().lines() {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self { lines: rx })
    }
}

impl Prompt for StdinPrompt {
    async fn read_line(&mut self, prompt: &str) -> io::Result<Prompted> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        tokio::select! {
            biased;
            signal = tokio::signal::ctrl_c() => {
                signal?;
                Ok(Prompted::Interrupted)
            }
            line = self.lines.recv() => match line {
                Some(line) => Ok(Prompted::Line(line?)),
                None => Ok(Prompted::Interrupted),
            },
        }
    }

    async fn interrupted(&mut self) -> io::Result<()> {
        tokio::signal::ctrl_c().await
    }
}
