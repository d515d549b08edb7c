//! Expansion of command line paths into the files to lint.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::LinterError;
use crate::linter::is_supported_file;

/// Finds lintable files, honouring include/exclude glob patterns.
///
/// Include/exclude patterns are matched against paths relative to the base
/// directory given to [`FileFinder::discover`], with any leading `./` removed.
pub struct FileFinder {
    include_globs: Option<GlobSet>,
    exclude_globs: Option<GlobSet>,
}

impl FileFinder {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, LinterError> {
        Ok(Self {
            include_globs: build_globset(include)?,
            exclude_globs: build_globset(exclude)?,
        })
    }

    /// Checks if a file path should be ignored based on include/exclude patterns.
    pub fn should_ignore(&self, path: &Path) -> bool {
        let path = normalize(path);

        if self
            .exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(path))
        {
            return true;
        }

        self.include_globs
            .as_ref()
            .is_some_and(|includes| !includes.is_match(path))
    }

    /// Expands `inputs` into a sorted, deduplicated list of files.
    ///
    /// - a file is linted as given, unless excluded
    /// - a directory is walked for files with a supported extension
    /// - anything else is treated as a glob pattern below `base_dir`
    pub fn discover(
        &self,
        inputs: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();

        for input in inputs {
            let path = Path::new(input);
            if path.is_file() {
                if !self.should_ignore(relative_to(path, base_dir)) {
                    files.push(path.to_path_buf());
                }
            } else if path.is_dir() {
                files.extend(self.walk(path, base_dir, is_supported_file));
            } else if is_glob(input) {
                let glob = Glob::new(input)
                    .map_err(|e| LinterError::config(format!("Invalid pattern '{}': {}", input, e)))?
                    .compile_matcher();
                files.extend(self.walk(base_dir, base_dir, |p| {
                    glob.is_match(relative_to(p, base_dir))
                }));
            } else {
                return Err(LinterError::file(format!(
                    "No such file or directory: {}",
                    input
                )));
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }

    fn walk<F>(&self, root: &Path, base_dir: &Path, accept: F) -> Vec<PathBuf>
    where
        F: Fn(&Path) -> bool,
    {
        debug!("Walking {}", root.display());

        WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
            .filter(|path| accept(path) && !self.should_ignore(relative_to(path, base_dir)))
            .collect()
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, LinterError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| LinterError::config(format!("Invalid glob pattern: {}", e)))?;
        builder.add(glob);
    }

    let globset = builder
        .build()
        .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

    Ok(Some(globset))
}

fn normalize(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

fn relative_to<'p>(path: &'p Path, base_dir: &Path) -> &'p Path {
    normalize(path.strip_prefix(base_dir).unwrap_or(path))
}

fn is_glob(input: &str) -> bool {
    input.contains(['*', '?', '[', '{'])
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn fixture() -> TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs/guide")).unwrap();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("README.md"), "# Readme").unwrap();
        fs::write(root.join("docs/intro.md"), "intro").unwrap();
        fs::write(root.join("docs/guide/usage.markdown"), "usage").unwrap();
        fs::write(root.join("docs/notes.txt"), "notes").unwrap();
        fs::write(root.join("docs/image.png"), "png").unwrap();
        fs::write(root.join("vendor/lib.md"), "vendored").unwrap();
        fs::write(root.join(".git/HEAD.md"), "hidden").unwrap();
        dir
    }

    fn relative(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn arg(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_build_globset_empty() {
        assert!(build_globset(&[]).unwrap().is_none());
    }

    #[test]
    fn test_build_globset_invalid_pattern() {
        assert!(build_globset(&["[invalid".to_string()]).is_err());
    }

    #[test]
    fn test_discover_directory() {
        let dir = fixture();
        let finder = FileFinder::new(&[], &[]).unwrap();

        let files = finder.discover(&[arg(dir.path())], dir.path()).unwrap();

        assert_eq!(
            relative(dir.path(), files),
            vec![
                "README.md",
                "docs/guide/usage.markdown",
                "docs/intro.md",
                "docs/notes.txt",
                "vendor/lib.md",
            ]
        );
    }

    #[test]
    fn test_discover_with_exclude() {
        let dir = fixture();
        let finder = FileFinder::new(&[], &["**/vendor/**".to_string()]).unwrap();

        let files = finder.discover(&[arg(dir.path())], dir.path()).unwrap();

        assert!(!relative(dir.path(), files).contains(&"vendor/lib.md".to_string()));
    }

    #[test]
    fn test_discover_with_include() {
        let dir = fixture();
        let finder = FileFinder::new(&["**/*.md".to_string()], &[]).unwrap();

        let files = finder.discover(&[arg(&dir.path().join("docs"))], dir.path()).unwrap();

        assert_eq!(relative(dir.path(), files), vec!["docs/intro.md"]);
    }

    #[test]
    fn test_discover_explicit_file_any_extension() {
        let dir = fixture();
        let finder = FileFinder::new(&[], &[]).unwrap();
        let png = dir.path().join("docs/image.png");

        let files = finder.discover(&[arg(&png), arg(&png)], dir.path()).unwrap();

        assert_eq!(files, vec![png]);
    }

    #[test]
    fn test_discover_glob_pattern() {
        let dir = fixture();
        let finder = FileFinder::new(&[], &[]).unwrap();

        let files = finder
            .discover(&["docs/**/*.md".to_string()], dir.path())
            .unwrap();

        assert_eq!(relative(dir.path(), files), vec!["docs/intro.md"]);
    }

    #[test]
    fn test_discover_missing_path() {
        let dir = fixture();
        let finder = FileFinder::new(&[], &[]).unwrap();

        let err = finder
            .discover(&[arg(&dir.path().join("missing.md"))], dir.path())
            .unwrap_err();

        assert!(matches!(err, LinterError::File(_)));
    }

    #[test]
    fn test_discover_glob_applies_exclude_relative_to_base_dir() {
        let dir = fixture();
        fs::write(dir.path().join("docs/draft.md"), "draft").unwrap();
        let finder = FileFinder::new(&[], &["docs/draft.md".to_string()]).unwrap();

        let files = finder.discover(&["docs/*.md".to_string()], dir.path()).unwrap();

        assert_eq!(relative(dir.path(), files), vec!["docs/intro.md"]);
    }

    #[test]
    fn test_discover_explicit_file_applies_exclude_relative_to_base_dir() {
        let dir = fixture();
        let finder = FileFinder::new(&[], &["vendor/*.md".to_string()]).unwrap();

        let files = finder
            .discover(&[arg(&dir.path().join("vendor/lib.md"))], dir.path())
            .unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_should_ignore_strips_current_dir() {
        let finder = FileFinder::new(&[], &["vendor/**".to_string()]).unwrap();

        assert!(finder.should_ignore(Path::new("./vendor/lib.md")));
        assert!(!finder.should_ignore(Path::new("./docs/lib.md")));
    }
}
