use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use diskfit::entities::Inventory;
use log::debug;

/// Recursively collects every file under `path` into an [`Inventory`].
///
/// Entries are sorted by path before ids are assigned, so discovery order is
/// deterministic regardless of directory-listing order.
pub fn discover(path: &Path) -> Result<Inventory> {
    let mut entries: Vec<(String, u64)> = vec![];
    walk(path, &mut entries)?;
    entries.sort();
    debug!("[DISCOVER] found {} files under {}", entries.len(), path.display());
    Inventory::from_entries(entries)
}

fn walk(dir: &Path, entries: &mut Vec<(String, u64)>) -> Result<()> {
    let read_dir = fs::read_dir(dir)
        .with_context(|| format!("could not read directory: {}", dir.display()))?;
    for entry in read_dir {
        let entry =
            entry.with_context(|| format!("could not read entry in: {}", dir.display()))?;
        let metadata = entry
            .metadata()
            .with_context(|| format!("could not stat: {}", entry.path().display()))?;
        if metadata.is_dir() {
            walk(&entry.path(), entries)?;
        } else if metadata.is_file() {
            entries.push((entry.path().display().to_string(), metadata.len()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn discovers_nested_files_in_path_order() {
        let root = std::env::temp_dir().join(format!("fit_discover_test_{}", std::process::id()));
        let nested = root.join("sub");
        fs::create_dir_all(&nested).unwrap();
        File::create(root.join("b.bin")).unwrap().write_all(&[0; 10]).unwrap();
        File::create(root.join("a.bin")).unwrap().write_all(&[0; 5]).unwrap();
        File::create(nested.join("c.bin")).unwrap().write_all(&[0; 7]).unwrap();

        let inventory = discover(&root).unwrap();
        fs::remove_dir_all(&root).unwrap();

        let entries = inventory
            .iter()
            .map(|item| (item.name.clone(), item.size))
            .collect::<Vec<_>>();
        assert_eq!(
            entries,
            vec![
                (root.join("a.bin").display().to_string(), 5),
                (root.join("b.bin").display().to_string(), 10),
                (nested.join("c.bin").display().to_string(), 7),
            ]
        );
        assert_eq!(inventory.total_size(), 22);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let bogus = std::env::temp_dir().join("fit_discover_test_does_not_exist");
        assert!(discover(&bogus).is_err());
    }
}
