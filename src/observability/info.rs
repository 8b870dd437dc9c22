//! Build and version information.

use serde::Serialize;

/// Version details served at `/info` and printed by `health version`.
///
/// VCS fields are taken from `HEALTH_VCS_COMMIT_HASH`, `HEALTH_VCS_TAG` and
/// `HEALTH_VCS_BRANCH` at compile time and are empty when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit_hash: &'static str,
    pub tag: &'static str,
    pub branch: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit_hash: option_env!("HEALTH_VCS_COMMIT_HASH").unwrap_or(""),
            tag: option_env!("HEALTH_VCS_TAG").unwrap_or(""),
            branch: option_env!("HEALTH_VCS_BRANCH").unwrap_or(""),
        }
    }

    /// One-line version string, with the commit when known.
    pub fn full_version(&self) -> String {
        if self.commit_hash.is_empty() {
            self.version.to_string()
        } else {
            format!("{} ({})", self.version, self.commit_hash)
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_version_includes_commit_when_known() {
        let info = BuildInfo {
            version: "1.2.3",
            commit_hash: "abc123",
            tag: "",
            branch: "main",
        };
        assert_eq!(info.full_version(), "1.2.3 (abc123)");

        let bare = BuildInfo { commit_hash: "", ..info };
        assert_eq!(bare.full_version(), "1.2.3");
    }

    #[test]
    fn current_uses_package_version() {
        assert_eq!(BuildInfo::current().version, env!("CARGO_PKG_VERSION"));
    }
}
