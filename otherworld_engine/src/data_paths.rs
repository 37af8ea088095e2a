//! Locating the engine's runtime data files.
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides data directory detection.
pub const DATA_DIR_VAR: &str = "OTHERWORLD_DATA";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_VAR)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    let mut candidates = vec![PathBuf::from("otherworld_engine/data"), PathBuf::from("data")];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.extend(layout_candidates(dir));
        if let Some(parent) = dir.parent() {
            candidates.extend(layout_candidates(parent));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("otherworld_engine/data"))
}

/// Workspace and flattened `data/` layouts under `base`.
fn layout_candidates(base: &Path) -> [PathBuf; 2] {
    [base.join("otherworld_engine/data"), base.join("data")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_cover_workspace_and_flat_dirs() {
        let [nested, flat] = layout_candidates(Path::new("/opt/game"));
        assert_eq!(nested, PathBuf::from("/opt/game/otherworld_engine/data"));
        assert_eq!(flat, PathBuf::from("/opt/game/data"));
    }
}
