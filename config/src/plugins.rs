//! # Plugin Reference Resolution
//!
//! Resolves plugin names from the build configuration against the registry
//! of known plugins, and expands content globs for diagnostics.
//!
//! Plugins are opaque handles: the loader resolves them so the external
//! build fails fast on a missing reference, it never executes them.

use errors::ResolutionError;
use std::path::{Path, PathBuf};

/// An opaque reference to a known utility-CSS plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginHandle {
    /// Name used in the `plugins` list of the configuration
    pub name: &'static str,
    /// Package that provides the plugin in the consuming toolchain
    pub package: &'static str,
    pub description: &'static str,
}

/// Known plugins, in lookup order.
const REGISTRY: &[PluginHandle] = &[
    PluginHandle {
        name: "flowbite",
        package: "flowbite/plugin",
        description: "Flowbite component library",
    },
    PluginHandle {
        name: "typography",
        package: "@tailwindcss/typography",
        description: "Prose styling for rendered markup",
    },
    PluginHandle {
        name: "forms",
        package: "@tailwindcss/forms",
        description: "Form element resets",
    },
    PluginHandle {
        name: "aspect-ratio",
        package: "@tailwindcss/aspect-ratio",
        description: "Aspect ratio utilities",
    },
    PluginHandle {
        name: "daisyui",
        package: "daisyui",
        description: "DaisyUI component classes",
    },
];

/// Resolve a single plugin name to its handle.
///
/// Returns [`ResolutionError::UnknownPlugin`] when the name is not in the
/// registry, naming the missing reference.
pub fn resolve(name: &str) -> Result<&'static PluginHandle, ResolutionError> {
    REGISTRY
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| ResolutionError::UnknownPlugin {
            name: name.to_string(),
        })
}

/// Resolve every plugin reference in order.
///
/// Fails on the first unresolvable name so the diagnostic points at a
/// single missing reference, matching how the external consumer reports
/// load failures.
pub fn resolve_all(names: &[String]) -> Result<Vec<&'static PluginHandle>, ResolutionError> {
    names.iter().map(|name| resolve(name)).collect()
}

/// Names of all registered plugins.
pub fn known_plugins() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|p| p.name)
}

/// Result of expanding the content globs against the filesystem.
#[derive(Debug, Default)]
pub struct ContentMatches {
    /// Files matched, deduplicated, in pattern order
    pub files: Vec<PathBuf>,
    /// Patterns that matched no files
    pub unmatched: Vec<String>,
}

impl ContentMatches {
    /// Error for the first unmatched pattern, if any.
    pub fn into_strict(self) -> Result<Vec<PathBuf>, ResolutionError> {
        match self.unmatched.into_iter().next() {
            Some(pattern) => Err(ResolutionError::UnmatchedPattern { pattern }),
            None => Ok(self.files),
        }
    }
}

/// Expand content globs relative to `base_dir` and report patterns that
/// match nothing.
///
/// Patterns are assumed syntactically valid; callers validate the
/// configuration first. A pattern with invalid syntax is reported as
/// unmatched rather than panicking, so diagnostics stay usable on a
/// half-edited config.
pub fn match_content(patterns: &[String], base_dir: &Path) -> ContentMatches {
    let mut matches = ContentMatches::default();
    let mut seen = std::collections::HashSet::new();

    for pattern in patterns {
        let anchored = base_dir.join(pattern.trim_start_matches("./"));
        let Some(anchored) = anchored.to_str().map(str::to_string) else {
            matches.unmatched.push(pattern.clone());
            continue;
        };

        let Ok(entries) = glob::glob(&anchored) else {
            matches.unmatched.push(pattern.clone());
            continue;
        };

        let mut hit = false;
        for path in entries.flatten() {
            if path.is_dir() {
                continue;
            }
            hit = true;
            if seen.insert(path.clone()) {
                matches.files.push(path);
            }
        }

        if !hit {
            tracing::debug!("Pattern matched no files: {}", pattern);
            matches.unmatched.push(pattern.clone());
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_known_plugin() {
        let handle = resolve("flowbite").unwrap();
        assert_eq!(handle.name, "flowbite");
        assert_eq!(handle.package, "flowbite/plugin");
    }

    #[test]
    fn test_resolve_unknown_plugin() {
        let err = resolve("does-not-exist").unwrap_err();
        match err {
            ResolutionError::UnknownPlugin { name } => assert_eq!(name, "does-not-exist"),
            other => panic!("Expected UnknownPlugin, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_all_preserves_order() {
        let names = vec!["typography".to_string(), "flowbite".to_string()];
        let handles = resolve_all(&names).unwrap();
        assert_eq!(handles[0].name, "typography");
        assert_eq!(handles[1].name, "flowbite");
    }

    #[test]
    fn test_resolve_all_names_missing_reference() {
        let names = vec!["flowbite".to_string(), "bogus".to_string()];
        let err = resolve_all(&names).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_resolve_all_empty() {
        let handles = resolve_all(&[]).unwrap();
        assert!(handles.is_empty());
    }

    #[test]
    fn test_known_plugins_contains_defaults() {
        let names: Vec<_> = known_plugins().collect();
        assert!(names.contains(&"flowbite"));
    }

    #[test]
    fn test_match_content_finds_files() {
        let dir = tempfile::tempdir().unwrap();
        let components = dir.path().join("components");
        fs::create_dir_all(&components).unwrap();
        fs::write(components.join("button.templ"), "").unwrap();
        fs::write(components.join("navbar.templ"), "").unwrap();
        fs::write(components.join("readme.md"), "").unwrap();

        let patterns = vec!["./components/**/*.templ".to_string()];
        let matches = match_content(&patterns, dir.path());

        assert_eq!(matches.files.len(), 2);
        assert!(matches.unmatched.is_empty());
    }

    #[test]
    fn test_match_content_reports_unmatched() {
        let dir = tempfile::tempdir().unwrap();

        let patterns = vec!["./nothing/**/*.templ".to_string()];
        let matches = match_content(&patterns, dir.path());

        assert!(matches.files.is_empty());
        assert_eq!(matches.unmatched, vec!["./nothing/**/*.templ"]);
    }

    #[test]
    fn test_match_content_deduplicates_across_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.js"), "").unwrap();

        let patterns = vec!["./*.js".to_string(), "./**/*.js".to_string()];
        let matches = match_content(&patterns, dir.path());

        assert_eq!(matches.files.len(), 1);
    }

    #[test]
    fn test_into_strict() {
        let ok = ContentMatches {
            files: vec![PathBuf::from("a.templ")],
            unmatched: vec![],
        };
        assert!(ok.into_strict().is_ok());

        let bad = ContentMatches {
            files: vec![],
            unmatched: vec!["./x/**".to_string()],
        };
        let err = bad.into_strict().unwrap_err();
        assert!(matches!(err, ResolutionError::UnmatchedPattern { .. }));
    }
}
