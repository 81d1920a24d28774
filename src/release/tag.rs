//! Release tag detection across CI platforms.
//!
//! Tags are expected to look like `vX.Y.Z`; the written version is `X.Y.Z`.
//!
//! Rules are checked in order and the first match wins:
//! 1. Circle CI: `CIRCLECI` and `CIRCLE_TAG` both set.
//! 2. Azure Pipelines: `BUILD_SOURCEBRANCH` starts with `refs/tags/`.
//! 3. Github Actions: `GITHUB_REF` starts with the literal `GITHUB_REF`.
//!    A real ref never does, so this rule does not fire in practice.
//! 4. Anything else is an untagged build and nothing is written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{CiPlatform, TagResolution};
use crate::error::AppError;
use crate::release::env::EnvSource;

pub const CIRCLECI: &str = "CIRCLECI";
pub const CIRCLE_TAG: &str = "CIRCLE_TAG";
pub const BUILD_SOURCEBRANCH: &str = "BUILD_SOURCEBRANCH";
pub const GITHUB_REF: &str = "GITHUB_REF";

const TAGS_PREFIX: &str = "refs/tags/";

/// Package directory (relative to the project root) holding the VERSION file.
pub const PACKAGE_DIR: &str = "pmdarima";
pub const VERSION_FILE_NAME: &str = "VERSION";

/// Handles both `1.5.0` and `v1.5.0`.
pub fn version_from_tag(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Location of the VERSION file under `root`.
pub fn version_file_path(root: &Path) -> PathBuf {
    root.join(PACKAGE_DIR).join(VERSION_FILE_NAME)
}

/// Inspect `env` and decide whether this is a tagged release build.
pub fn resolve_tag(env: &impl EnvSource) -> TagResolution {
    if env.get(CIRCLECI).is_some() {
        if let Some(tag) = env.get(CIRCLE_TAG) {
            return tagged(CiPlatform::CircleCi, tag);
        }
    }

    // refs/tags/vX.X.X -> ['refs', 'tags', 'vX.X.X'] -> 'vX.X.X'
    if let Some(branch) = env.get(BUILD_SOURCEBRANCH) {
        if branch.starts_with(TAGS_PREFIX) {
            return tagged(CiPlatform::AzurePipelines, last_segment(&branch));
        }
    }

    if let Some(git_ref) = env.get(GITHUB_REF) {
        if git_ref.starts_with(GITHUB_REF) {
            return tagged(CiPlatform::GithubActions, last_segment(&git_ref));
        }
        tracing::debug!(git_ref = %git_ref, "GITHUB_REF present but tag rule did not match");
    }

    TagResolution::Untagged
}

/// Resolve the tag and, for tagged builds, write the VERSION file under `root`.
///
/// Returns the resolution so callers can report what happened.
pub fn write_version_from_env(env: &impl EnvSource, root: &Path) -> Result<TagResolution, AppError> {
    let resolution = resolve_tag(env);
    match &resolution {
        TagResolution::Tagged {
            platform, version, ..
        } => {
            let path = version_file_path(root);
            tracing::info!(
                "Tagged commit on {}. Writing to {}",
                platform.display_name(),
                path.display()
            );
            write_version_file(&path, version)?;
        }
        TagResolution::Untagged => {
            tracing::info!("Not a tagged commit, or not on a CI/CD platform. Not writing VERSION file");
        }
    }
    Ok(resolution)
}

/// Write `version` to `path` with no trailing newline, replacing any existing file.
pub fn write_version_file(path: &Path, version: &str) -> Result<(), AppError> {
    fs::write(path, version)
        .map_err(|e| AppError::new(2, format!("Failed to write VERSION file '{}': {e}", path.display())))
}

fn tagged(platform: CiPlatform, tag: String) -> TagResolution {
    let version = version_from_tag(&tag).to_string();
    TagResolution::Tagged {
        platform,
        tag,
        version,
    }
}

fn last_segment(reference: &str) -> String {
    reference.rsplit('/').next().unwrap_or(reference).to_string()
}
