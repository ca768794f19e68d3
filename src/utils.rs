use std::path::PathBuf;

/// Expands a `./`-relative path against the current working directory.
pub fn get_path(raw_path: &str) -> PathBuf {
    if raw_path.starts_with('.') {
        match std::env::current_dir() {
            Ok(current_dir) => current_dir.join(raw_path),
            Err(_) => PathBuf::from(raw_path),
        }
    } else {
        PathBuf::from(raw_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(get_path("/var/log/out.log"), PathBuf::from("/var/log/out.log"));
    }

    #[test]
    fn relative_paths_are_anchored_to_the_current_dir() {
        let path = get_path("./logs");
        assert!(path.is_absolute());
        assert!(path.ends_with("logs"));
    }
}
