use super::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on the terminal. Anything but `y`/`yes` is a no,
/// and so is a closed or unreadable stdin.
pub fn confirm(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
    }
}
