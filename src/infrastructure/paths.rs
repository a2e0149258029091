//! Path handling for the Zellij sandbox.
//!
//! `/host` is the sandbox mount of the directory Zellij was started from
//! (normally the user's home), so `~` in configured paths maps onto it.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Name of the OTLP trace file inside [`data_dir`].
const TRACE_FILE_NAME: &str = "bookstore-otlp.json";

/// Directory for files the plugin writes: `/host/.local/share/zellij/bookstore`.
///
/// # Examples
///
/// ```
/// use bookstore::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/bookstore"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("bookstore")
}

/// Path of the rotating OTLP trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the `/host` mount.
///
/// # Examples
///
/// ```
/// use bookstore::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), PathBuf::from("/host/themes/dark.toml"));
/// assert_eq!(expand_tilde("/etc/books.toml"), PathBuf::from("/etc/books.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from(HOST_ROOT),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("{HOST_ROOT}{rest}")),
        _ => PathBuf::from(path),
    }
}

/// Renders a sandbox path the way the user wrote it on the host, for logs.
#[must_use]
pub fn display_path(path: &std::path::Path) -> String {
    let shown = path.to_string_lossy();
    match shown.strip_prefix(HOST_ROOT) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{rest}"),
        _ => shown.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~"), PathBuf::from("/host"));
        assert_eq!(expand_tilde("~/a/b"), PathBuf::from("/host/a/b"));
        assert_eq!(expand_tilde("~user/a"), PathBuf::from("~user/a"));
        assert_eq!(expand_tilde("relative.toml"), PathBuf::from("relative.toml"));
    }

    #[test]
    fn display_path_restores_tilde() {
        assert_eq!(display_path(Path::new("/host/books.toml")), "~/books.toml");
        assert_eq!(display_path(Path::new("/host")), "~");
        assert_eq!(display_path(Path::new("/hostile/x")), "/hostile/x");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(trace_file().parent(), Some(data_dir().as_path()));
        assert!(trace_file().ends_with("bookstore-otlp.json"));
    }
}
