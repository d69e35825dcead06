use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};
use crate::types::ScanConfig;

pub fn read_file_content(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(_) => {
            // If UTF-8 reading fails, try to read as bytes and convert with lossy conversion
            let bytes = fs::read(path)?;
            let content = String::from_utf8_lossy(&bytes).to_string();
            Ok(content)
        }
    }
}

pub fn should_ignore_dir(dir_name: &str, config: &ScanConfig) -> bool {
    config.ignore_dirs.contains(dir_name) || dir_name.starts_with('.')
}

pub fn should_ignore_file(file_name: &str, config: &ScanConfig) -> bool {
    config
        .ignore_file_patterns
        .iter()
        .any(|pattern| file_name.ends_with(pattern))
}

pub fn is_source_file(file_name: &str, config: &ScanConfig) -> bool {
    config.extensions.iter().any(|ext| file_name.ends_with(ext))
}

/// Collect the analyzable files under `root`, in a stable walk order.
/// Ignored directories are pruned whole so their subtrees are never visited.
pub fn collect_source_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned_dir(entry, config));

    for entry in walker.filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            let file_name = entry.file_name().to_string_lossy();
            if is_source_file(&file_name, config) && !should_ignore_file(&file_name, config) {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    Ok(files)
}

fn is_pruned_dir(entry: &DirEntry, config: &ScanConfig) -> bool {
    // The root itself is never pruned, whatever its name.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .map_or(false, |name| should_ignore_dir(name, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_should_ignore_dir() {
        let config = ScanConfig::default();
        assert!(should_ignore_dir("node_modules", &config));
        assert!(should_ignore_dir("dist", &config));
        assert!(should_ignore_dir("build", &config));
        assert!(should_ignore_dir("cache", &config));
        assert!(should_ignore_dir(".git", &config));
        assert!(should_ignore_dir(".angular", &config));

        assert!(!should_ignore_dir("src", &config));
        assert!(!should_ignore_dir("app", &config));
    }

    #[test]
    fn test_should_ignore_file() {
        let config = ScanConfig::default();
        assert!(should_ignore_file("app.component.spec.ts", &config));
        assert!(should_ignore_file("button.stories.ts", &config));
        assert!(should_ignore_file("globals.d.ts", &config));

        assert!(!should_ignore_file("app.component.ts", &config));
        assert!(!should_ignore_file("main.ts", &config));
    }

    #[test]
    fn test_is_source_file() {
        let config = ScanConfig::default();
        assert!(is_source_file("main.ts", &config));
        assert!(is_source_file("app.component.ts", &config));

        assert!(!is_source_file("styles.scss", &config));
        assert!(!is_source_file("index.html", &config));
        assert!(!is_source_file("main.mts", &config));
        assert!(!is_source_file("README.md", &config));
    }

    #[test]
    fn test_collect_source_files_prunes_and_filters() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        fs::create_dir_all(root.join("src/app"))?;
        fs::create_dir_all(root.join("node_modules/pkg"))?;
        fs::create_dir_all(root.join(".angular/cache"))?;

        fs::write(root.join("src/main.ts"), "export {};")?;
        fs::write(root.join("src/app/app.component.ts"), "export {};")?;
        fs::write(root.join("src/app/app.component.spec.ts"), "export {};")?;
        fs::write(root.join("src/app/app.component.html"), "<div></div>")?;
        fs::write(root.join("src/typings.d.ts"), "export {};")?;
        fs::write(root.join("node_modules/pkg/index.ts"), "export {};")?;
        fs::write(root.join(".angular/cache/state.ts"), "export {};")?;

        let files = collect_source_files(root, &ScanConfig::default())?;
        let names: Vec<String> = files
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();

        assert_eq!(files.len(), 2);
        assert!(names.iter().any(|n| n.ends_with("main.ts")));
        assert!(names.iter().any(|n| n.ends_with("app.component.ts")));
        Ok(())
    }

    #[test]
    fn test_collect_source_files_from_dot_named_root() -> Result<()> {
        // A root directory whose own name starts with '.' must still be walked.
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join(".workspace");
        fs::create_dir_all(&root)?;
        fs::write(root.join("app.component.ts"), "export {};")?;

        let files = collect_source_files(&root, &ScanConfig::default())?;
        assert_eq!(files.len(), 1);
        Ok(())
    }

    #[test]
    fn test_custom_scan_config_is_honored() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        fs::create_dir_all(root.join("generated"))?;
        fs::write(root.join("generated/api.ts"), "export {};")?;
        fs::write(root.join("main.ts"), "export {};")?;

        let mut config = ScanConfig::default();
        config.ignore_dirs.insert("generated".to_string());

        let files = collect_source_files(root, &config)?;
        assert_eq!(files.len(), 1);
        assert!(files[0].to_string_lossy().ends_with("main.ts"));
        Ok(())
    }

    #[test]
    fn test_read_file_content() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        let test_content = "const x = 1;\nconst y = 2;";
        write!(temp_file, "{}", test_content)?;

        let content = read_file_content(temp_file.path())?;
        assert_eq!(content, test_content);
        Ok(())
    }

    #[test]
    fn test_read_file_content_with_invalid_utf8() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        let bytes = [b"// comment: " as &[u8], &[0xf1, 0xe9, 0xfa]].concat();
        temp_file.write_all(&bytes)?;

        // Lossy conversion, never an error for odd encodings.
        let content = read_file_content(temp_file.path())?;
        assert!(content.starts_with("// comment: "));
        Ok(())
    }
}
