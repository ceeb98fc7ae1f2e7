//! Path utilities: expand ~ in user supplied paths (`--db`, config `database`).

use std::path::PathBuf;

/// `~` and `~/rest` resolve against the home directory; anything else is
/// taken literally, as is everything when no home directory is known.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(r) if r.starts_with('/') || r.starts_with('\\') => &r[1..],
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
