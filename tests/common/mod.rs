//! Common test utilities
//!
//! A temporary site layout with helpers for creating addon directories in
//! each tier.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct SiteFixture {
    dir: TempDir,
}

impl SiteFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp site"),
        }
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    /// `<base>/core/<folder>/<slug>/src`
    pub fn core_addon(&self, folder: &str, slug: &str) -> PathBuf {
        self.addon(&self.base().join("core"), folder, slug)
    }

    /// `<base>/addons/shared/<folder>/<slug>/src`
    pub fn shared_addon(&self, folder: &str, slug: &str) -> PathBuf {
        self.addon(&self.base().join("addons").join("shared"), folder, slug)
    }

    /// `<base>/addons/<application>/<folder>/<slug>/src`
    pub fn application_addon(&self, application: &str, folder: &str, slug: &str) -> PathBuf {
        self.addon(&self.base().join("addons").join(application), folder, slug)
    }

    /// Addon directory without a `src/` folder
    pub fn broken_addon(&self, folder: &str, slug: &str) -> PathBuf {
        let dir = self.base().join("core").join(folder).join(slug);
        std::fs::create_dir_all(&dir).expect("create addon dir");
        dir
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.base().join("streams.toml");
        std::fs::write(&path, contents).expect("write config");
        path
    }

    fn addon(&self, root: &Path, folder: &str, slug: &str) -> PathBuf {
        let dir = root.join(folder).join(slug);
        std::fs::create_dir_all(dir.join("src")).expect("create addon src dir");
        dir
    }
}
