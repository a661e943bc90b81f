//! Operating system detection

use crate::error::{PlatformError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    #[serde(rename = "macos")]
    MacOs,
    Linux,
    Unknown,
}

impl OsFamily {
    /// Family of the compile target
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else if cfg!(target_os = "macos") {
            OsFamily::MacOs
        } else if cfg!(target_os = "linux") {
            OsFamily::Linux
        } else {
            OsFamily::Unknown
        }
    }

    /// Classify a free-form OS name (`"Windows 11"`, `"Mac OS X"`,
    /// `"GNU/Linux"`, ...). Matching is case-insensitive.
    pub fn from_os_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.starts_with("mac") {
            OsFamily::MacOs
        } else if name.starts_with("win") {
            OsFamily::Windows
        } else if name.contains("nix") || name.contains("nux") {
            OsFamily::Linux
        } else {
            OsFamily::Unknown
        }
    }

    pub fn is_windows(self) -> bool {
        self == OsFamily::Windows
    }

    pub fn is_linux(self) -> bool {
        self == OsFamily::Linux
    }

    pub fn is_mac(self) -> bool {
        self == OsFamily::MacOs
    }

    pub fn is_unix(self) -> bool {
        matches!(self, OsFamily::Linux | OsFamily::MacOs)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::MacOs => "macos",
            OsFamily::Linux => "linux",
            OsFamily::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = PlatformError;

    /// Strict parse used for configuration and CLI flags
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win" => Ok(OsFamily::Windows),
            "macos" | "mac" | "osx" => Ok(OsFamily::MacOs),
            "linux" => Ok(OsFamily::Linux),
            other => Err(PlatformError::UnknownOs(other.to_string())),
        }
    }
}

/// Static description of the running platform
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformInfo {
    pub os: OsFamily,
    pub os_name: String,
    pub os_arch: String,
}

impl PlatformInfo {
    /// Detect from the compile target
    pub fn detect() -> Self {
        Self {
            os: OsFamily::current(),
            os_name: std::env::consts::OS.to_string(),
            os_arch: std::env::consts::ARCH.to_string(),
        }
    }

    pub fn is_aarch64(&self) -> bool {
        self.os_arch == "aarch64" || self.os_arch == "arm64"
    }

    pub fn is_unix(&self) -> bool {
        self.os.is_unix()
    }
}
