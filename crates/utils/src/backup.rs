use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

/// Mirror `target` into the log directory as `<target>.orig` before it is
/// modified. This copy is the only rollback mechanism.
///
/// Intermediate mirror directories are created as needed. Absolute targets
/// are re-rooted under `log_dir` by dropping their root components.
///
/// # Errors
/// Returns error if the mirror directory cannot be created or the copy fails.
pub async fn backup_original(log_dir: &Path, target: &Path) -> Result<PathBuf> {
    let mirrored = target
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect::<PathBuf>();
    let mut name = mirrored.into_os_string();
    name.push(".orig");
    let backup_path = log_dir.join(PathBuf::from(name));

    if let Some(parent) = backup_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create backup directory {}", parent.display()))?;
    }
    tokio::fs::copy(target, &backup_path)
        .await
        .with_context(|| format!("Failed to back up {}", target.display()))?;
    Ok(backup_path)
}
