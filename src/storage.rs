use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use nix::errno::Errno;
use nix::mount::{mount, umount2, MntFlags, MsFlags};

use crate::config::StorageConfig;
use crate::error::KioskError;
use crate::traits::Storage;

/// Removable SD card mounted at a fixed point.
#[derive(Debug, Clone)]
pub struct SdCard {
    device: PathBuf,
    mount_point: PathBuf,
    fs_type: String,
}

impl SdCard {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            device: config.device.clone(),
            mount_point: config.mount_point.clone(),
            fs_type: config.fs_type.clone(),
        }
    }

    pub fn mount_point(&self) -> &Path {
        &self.mount_point
    }

    fn mount_with(&self, flags: MsFlags) -> nix::Result<()> {
        mount(
            Some(self.device.as_path()),
            self.mount_point.as_path(),
            Some(self.fs_type.as_str()),
            flags,
            None::<&str>,
        )
    }
}

impl Storage for SdCard {
    fn is_present(&self) -> bool {
        self.device.exists()
    }

    fn mount(&mut self) -> Result<(), KioskError> {
        fs::create_dir_all(&self.mount_point)?;
        let result = match self.mount_with(MsFlags::empty()) {
            Err(Errno::EBUSY) => {
                warn!("{} busy, remounting", self.mount_point.display());
                self.mount_with(MsFlags::MS_REMOUNT)
            }
            other => other,
        };
        result.map_err(|source| KioskError::Mount {
            device: self.device.clone(),
            target: self.mount_point.clone(),
            source,
        })?;
        info!(
            "mounted {} on {}",
            self.device.display(),
            self.mount_point.display()
        );
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), KioskError> {
        umount2(self.mount_point.as_path(), MntFlags::MNT_FORCE).map_err(|source| {
            KioskError::Unmount {
                target: self.mount_point.clone(),
                source,
            }
        })?;
        info!("unmounted {}", self.mount_point.display());
        Ok(())
    }

    fn list_media(&self) -> Result<Vec<String>, KioskError> {
        list_files(&self.mount_point)
    }

    fn media_path(&self, name: &str) -> PathBuf {
        self.mount_point.join(name)
    }
}

/// Names of the non-directory entries of `dir`, sorted.
pub fn list_files(dir: &Path) -> Result<Vec<String>, KioskError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sorted_files_without_directories() {
        let dir = std::env::temp_dir().join(format!("minitv-storage-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("subdir")).unwrap();
        for name in ["b.mp4", "a.mkv", "c.avi"] {
            fs::write(dir.join(name), b"x").unwrap();
        }

        let names = list_files(&dir).unwrap();
        assert_eq!(names, vec!["a.mkv", "b.mp4", "c.avi"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn media_path_joins_mount_point() {
        let card = SdCard::new(&StorageConfig::default());
        assert_eq!(
            card.media_path("clip.mp4"),
            PathBuf::from("/mnt/sdcard/clip.mp4")
        );
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = list_files(Path::new("/nonexistent/minitv")).unwrap_err();
        assert!(matches!(err, KioskError::Io(_)));
    }
}
