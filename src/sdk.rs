//! Selecting the platform SDK used for per-target compilation.

use semver::Version;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::process::{capture_checked, CommandRunner, Invocation};

/// One entry of `xcodebuild -showsdks -json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkInfo {
    pub platform: String,
    pub platform_version: String,
    pub sdk_path: PathBuf,
}

impl SdkInfo {
    /// Version used for ordering; unparsable versions sort lowest.
    fn sort_key(&self) -> Version {
        parse_platform_version(&self.platform_version).unwrap_or(Version::new(0, 0, 0))
    }
}

/// Parses an Apple platform version such as `14`, `14.2` or `14.2.1`.
pub fn parse_platform_version(version: &str) -> Result<Version> {
    let parts = version.trim().split('.').count();
    let padded = match parts {
        1 => format!("{}.0.0", version.trim()),
        2 => format!("{}.0", version.trim()),
        _ => version.trim().to_string(),
    };
    Ok(Version::parse(&padded)?)
}

/// Parses the SDK listing JSON.
pub fn parse_sdk_listing(listing: &str) -> Result<Vec<SdkInfo>> {
    Ok(serde_json::from_str(listing)?)
}

/// Returns the installed SDK with the highest version for `platform`.
pub fn select_latest_sdk(sdks: &[SdkInfo], platform: &str) -> Result<SdkInfo> {
    sdks.iter()
        .filter(|sdk| sdk.platform == platform)
        .max_by_key(|sdk| sdk.sort_key())
        .cloned()
        .ok_or_else(|| Error::SdkNotFound { platform: platform.to_string() })
}

/// Queries the installed SDKs and picks the newest one for `platform`.
pub fn latest_sdk(runner: &dyn CommandRunner, platform: &str) -> Result<SdkInfo> {
    let invocation = Invocation::new("xcrun").args(["xcodebuild", "-showsdks", "-json"]);
    let listing = capture_checked(runner, &invocation, "Failed to list installed SDKs")?;
    let sdk = select_latest_sdk(&parse_sdk_listing(&listing)?, platform)?;
    log::info!("Using {} SDK {} at {}", sdk.platform, sdk.platform_version, sdk.sdk_path.display());
    Ok(sdk)
}
