//! # Artifact Matching
//!
//! Decides whether a file's base name identifies an agent artifact.
//!
//! A name matches when it starts with the stem (`dd-java-agent`) and ends
//! with the marker (`jar`), the marker beginning after the stem. This is the
//! plain-string form of `dd-java-agent.*jar$` applied from the start of the
//! name: both ends are anchored and the gap between stem and marker may hold
//! any characters except a newline.

use crate::constants::{ARTIFACT_MARKER, ARTIFACT_STEM};

/// Base name matcher anchored at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactMatcher {
    stem: String,
    marker: String,
}

impl Default for ArtifactMatcher {
    fn default() -> Self {
        Self::dd_java_agent()
    }
}

impl ArtifactMatcher {
    pub fn new(stem: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            marker: marker.into(),
        }
    }

    /// Matcher for `dd-java-agent*.jar` builds
    pub fn dd_java_agent() -> Self {
        Self::new(ARTIFACT_STEM, ARTIFACT_MARKER)
    }

    /// Check a base name (never a path) against the rule. Case-sensitive.
    pub fn matches(&self, name: &str) -> bool {
        name.strip_prefix(self.stem.as_str())
            .and_then(|rest| rest.strip_suffix(self.marker.as_str()))
            .is_some_and(|gap| !gap.contains('\n'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_release_jar() {
        let matcher = ArtifactMatcher::dd_java_agent();
        assert!(matcher.matches("dd-java-agent-1.0.jar"));
        assert!(matcher.matches("dd-java-agent-0.74.0-SNAPSHOT~abc123.jar"));
        assert!(matcher.matches("dd-java-agent.jar"));
    }

    #[test]
    fn test_matches_empty_gap() {
        let matcher = ArtifactMatcher::dd_java_agent();
        assert!(matcher.matches("dd-java-agentjar"));
    }

    #[test]
    fn test_start_is_anchored() {
        let matcher = ArtifactMatcher::dd_java_agent();
        assert!(!matcher.matches("shaded-dd-java-agent-1.0.jar"));
        assert!(!matcher.matches("not-dd-java-agent.jar"));
        assert!(!matcher.matches(" dd-java-agent-1.0.jar"));
    }

    #[test]
    fn test_rejects_names_not_ending_with_marker() {
        let matcher = ArtifactMatcher::dd_java_agent();
        assert!(!matcher.matches("dd-java-agent-1.0.jar.bak"));
        assert!(!matcher.matches("dd-java-agent-1.0.jar.sha256"));
        assert!(!matcher.matches("dd-java-agent-1.0.war"));
    }

    #[test]
    fn test_rejects_unrelated_names() {
        let matcher = ArtifactMatcher::dd_java_agent();
        assert!(!matcher.matches("readme.txt"));
        assert!(!matcher.matches("dd-trace-api-1.0.jar"));
        assert!(!matcher.matches(""));
        assert!(!matcher.matches("jar"));
    }

    #[test]
    fn test_stem_must_precede_marker() {
        let matcher = ArtifactMatcher::dd_java_agent();
        // Overlapping stem and marker is not a match
        assert!(!matcher.matches("dd-java-agen"));
        assert!(!matcher.matches("jar-dd-java-agent"));
    }

    #[test]
    fn test_is_case_sensitive() {
        let matcher = ArtifactMatcher::dd_java_agent();
        assert!(!matcher.matches("DD-JAVA-AGENT-1.0.JAR"));
        assert!(!matcher.matches("dd-java-agent-1.0.JAR"));
    }

    #[test]
    fn test_newline_in_gap_rejected() {
        let matcher = ArtifactMatcher::dd_java_agent();
        assert!(!matcher.matches("dd-java-agent\n.jar"));
        assert!(!matcher.matches("dd-java-agent\ndd-java-agent-1.0.jar"));
    }

    #[test]
    fn test_custom_stem_and_marker() {
        let matcher = ArtifactMatcher::new("dd-trace-ot", ".jar");
        assert!(matcher.matches("dd-trace-ot-1.2.jar"));
        assert!(!matcher.matches("dd-trace-otjar"));
    }
}
