//! Path translation between the host and the plugin sandbox.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory for files the plugin writes, such as trace output.
///
/// Resolves to `~/.local/share/zellij/recipe-explorer` when Zellij was started
/// from the home directory, since `/host` follows the cwd Zellij started in.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("recipe-explorer")
}

/// Replaces a leading `~` with the sandbox host root.
///
/// `~user` forms are not expanded.
fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Maps a configured dataset path to the path the worker should open.
///
/// - `~/x` becomes `/host/x`
/// - a relative `x` becomes `/host/x`
/// - an absolute path is used as is
///
/// # Example
///
/// ```rust
/// use recipe_explorer::infrastructure::resolve_sandbox_path;
///
/// assert_eq!(resolve_sandbox_path("~/recipes.json"), "/host/recipes.json");
/// assert_eq!(resolve_sandbox_path("./data/recipes.json"), "/host/data/recipes.json");
/// assert_eq!(resolve_sandbox_path("/data/recipes.json"), "/data/recipes.json");
/// ```
#[must_use]
pub fn resolve_sandbox_path(path: &str) -> String {
    let expanded = expand_tilde(path.trim());
    if expanded.starts_with('/') {
        expanded
    } else {
        let relative = expanded.trim_start_matches("./");
        format!("{HOST_ROOT}/{relative}")
    }
}

/// Strips the sandbox host root so logged paths read like host paths.
#[must_use]
pub fn display_path(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_root() {
        assert_eq!(expand_tilde("~/recipes.json"), "/host/recipes.json");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~bob/x"), "~bob/x");
        assert_eq!(expand_tilde("/data/x"), "/data/x");
    }

    #[test]
    fn relative_paths_resolve_under_host_root() {
        assert_eq!(resolve_sandbox_path("mock-data/recipes.json"), "/host/mock-data/recipes.json");
        assert_eq!(resolve_sandbox_path("./recipes.json"), "/host/recipes.json");
        assert_eq!(resolve_sandbox_path(" ~/r.json "), "/host/r.json");
        assert_eq!(resolve_sandbox_path("/abs/r.json"), "/abs/r.json");
    }

    #[test]
    fn display_path_hides_host_root() {
        assert_eq!(display_path("/host/recipes.json"), "~/recipes.json");
        assert_eq!(display_path("/host"), "~");
        assert_eq!(display_path("/hostile/x"), "/hostile/x");
        assert_eq!(display_path("/data/x"), "/data/x");
    }

    #[test]
    fn data_dir_is_under_zellij_share() {
        assert_eq!(get_data_dir(), PathBuf::from("/host/.local/share/zellij/recipe-explorer"));
    }
}
