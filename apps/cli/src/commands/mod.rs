//! CLI subcommands, one module per command group.

pub mod backup;
pub mod dashboard;
pub mod history;
pub mod holdings;
pub mod snapshot;

use std::io::{self, Write};

/// Ask the operator to confirm a destructive action. Anything other than
/// an explicit yes declines.
pub(crate) fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
