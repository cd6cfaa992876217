//! Test-source exclusion predicate
//!
//! Rule sources below the test source folder are not part of the main model.
//! Matching is on path segments after normalizing `\` to `/`, so the same
//! filter works for paths reported on any platform.

/// Excludes paths containing a given folder sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSourceFilter {
    segments: Vec<String>,
}

impl TestSourceFilter {
    /// `folder` is a relative folder such as `src/test` (either separator).
    pub fn new(folder: &str) -> Self {
        let segments = folder
            .replace('\\', "/")
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// Returns `true` if `path` lies inside the excluded folder.
    pub fn excludes(&self, path: &str) -> bool {
        if self.segments.is_empty() {
            return false;
        }
        let normalized = path.replace('\\', "/");
        let parts: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();
        parts
            .windows(self.segments.len())
            .any(|w| w.iter().zip(&self.segments).all(|(a, b)| a == b))
    }
}

impl Default for TestSourceFilter {
    fn default() -> Self {
        Self::new("src/test")
    }
}
