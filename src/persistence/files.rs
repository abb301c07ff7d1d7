use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the tick directory - checks for local .tick first, then falls back to global ~/.tick
pub fn get_tick_dir() -> Result<PathBuf> {
    // Check for local .tick directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_tick = find_local_tick(&current_dir);

    if let Some(local_dir) = local_tick {
        return Ok(local_dir);
    }

    // Fall back to global ~/.tick
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".tick"))
}

/// Find local .tick directory by walking up the directory tree
fn find_local_tick(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let tick_dir = current.join(".tick");
        if tick_dir.exists() && tick_dir.is_dir() {
            return Some(tick_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the tick directory exists
pub fn ensure_tick_dir() -> Result<PathBuf> {
    let dir = get_tick_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .tick directory in the current directory
pub fn init_local_tick() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let tick_dir = current_dir.join(".tick");

    if tick_dir.exists() {
        anyhow::bail!("Tick directory already exists: {}", tick_dir.display());
    }

    fs::create_dir_all(&tick_dir)
        .with_context(|| format!("Failed to create directory: {}", tick_dir.display()))?;

    Ok(tick_dir)
}

/// Get path to the tasks.json store
pub fn tasks_file() -> Result<PathBuf> {
    Ok(ensure_tick_dir()?.join("tasks.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tick_dir() {
        let dir = get_tick_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".tick"));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        let content = "Hello, world!";
        atomic_write(&test_file, content).unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        atomic_write(&test_file, "first").unwrap();
        atomic_write(&test_file, "second").unwrap();

        let read_content = read_file(&test_file).unwrap();
        assert_eq!(read_content, "second");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent.txt");

        let content = read_file(&test_file).unwrap();
        assert_eq!(content, "");
    }
}
