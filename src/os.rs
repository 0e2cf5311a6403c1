//! Platform detection and mounted-filesystem listing

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::{error, trace};

use crate::error::{PlatformError, Result};
use crate::regex::Regex;

/// The platform the library runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux32,
    Linux64,
    Windows32,
    Windows64,
    MacOs,
    Unknown,
}

impl Platform {
    /// The platform of the current build target
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            if cfg!(target_pointer_width = "64") {
                Platform::Linux64
            } else {
                Platform::Linux32
            }
        } else if cfg!(target_os = "windows") {
            if cfg!(target_pointer_width = "64") {
                Platform::Windows64
            } else {
                Platform::Windows32
            }
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unknown
        }
    }

    pub fn is_unix(&self) -> bool {
        matches!(self, Platform::Linux32 | Platform::Linux64 | Platform::MacOs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Platform::Linux32 => "linux-32",
            Platform::Linux64 => "linux-64",
            Platform::Windows32 => "windows-32",
            Platform::Windows64 => "windows-64",
            Platform::MacOs => "macos",
            Platform::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// Lists mount points of the current machine
///
/// `fstypes` narrows the result to the given filesystem types; empty
/// means all. Only implemented for Linux, where the kernel mount table
/// is parsed; other platforms fail with an unsupported-platform error.
pub fn mounted_filesystems(fstypes: &[&str]) -> Result<Vec<PathBuf>> {
    match Platform::current() {
        Platform::Linux32 | Platform::Linux64 => {
            let table = fs::read_to_string("/proc/self/mounts").map_err(PlatformError::Io)?;
            parse_mount_table(&table, fstypes)
        }
        platform => {
            error!(%platform, "mount listing is not supported on this platform");
            Err(PlatformError::Unsupported {
                platform: platform.to_string(),
            }
            .into())
        }
    }
}

/// Parses a kernel-style mount table (`device mountpoint fstype options dump pass`)
pub fn parse_mount_table(table: &str, fstypes: &[&str]) -> Result<Vec<PathBuf>> {
    let line_format = Regex::new(r"^\s*(\S+)\s+(\S+)\s+(\S+)\s+(\S+)(?:\s+\d+\s+\d+)?\s*$")?;
    let mut mounts = Vec::new();
    for line in table.lines() {
        for groups in line_format.all_matches(line) {
            let (Some(device), Some(mount_point), Some(fstype)) =
                (&groups[0], &groups[1], &groups[2])
            else {
                continue;
            };
            if !fstypes.is_empty() && !fstypes.contains(&fstype.as_str()) {
                continue;
            }
            trace!(%device, %mount_point, %fstype, "found mounted file system");
            mounts.push(PathBuf::from(mount_point));
        }
    }
    Ok(mounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
        sysfs /sys sysfs rw,nosuid,nodev,noexec 0 0\n\
        /dev/sda1 / ext4 rw,relatime 0 0\n\
        /dev/sda2 /home ext4 rw,relatime 0 0\n\
        tmpfs /tmp tmpfs rw,nosuid,nodev 0 0\n\
        not a parsable line with too many fields to match here\n";

    #[test]
    fn parses_all_mount_points() {
        let mounts = parse_mount_table(TABLE, &[]).unwrap();
        assert_eq!(
            mounts,
            vec![
                PathBuf::from("/sys"),
                PathBuf::from("/"),
                PathBuf::from("/home"),
                PathBuf::from("/tmp"),
            ]
        );
    }

    #[test]
    fn filters_by_filesystem_type() {
        let mounts = parse_mount_table(TABLE, &["ext4"]).unwrap();
        assert_eq!(mounts, vec![PathBuf::from("/"), PathBuf::from("/home")]);
        let none = parse_mount_table(TABLE, &["btrfs"]).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn platform_is_detected() {
        let platform = Platform::current();
        assert_ne!(platform, Platform::Unknown);
        assert!(!platform.to_string().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn lists_the_live_mount_table() {
        let mounts = mounted_filesystems(&[]).unwrap();
        assert!(mounts.iter().any(|m| m == &PathBuf::from("/")));
    }
}
