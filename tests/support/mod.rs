#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Serialise tests that touch the environment, the cwd or SIGINT.
pub fn lock_env<'a>() -> MutexGuard<'a, ()> {
    match ENV_LOCK.lock() {
        Ok(guard) => guard,
        Err(poison) => poison.into_inner(),
    }
}

/// Temporary directory plus a snapshot of the cwd and touched variables,
/// restored on drop.
pub struct TestEnv {
    temp_dir: TempDir,
    original_dir: PathBuf,
    saved_env: HashMap<&'static str, Option<OsString>>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
            original_dir: env::current_dir().unwrap(),
            saved_env: HashMap::new(),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    fn save_var(&mut self, key: &'static str) {
        if !self.saved_env.contains_key(key) {
            self.saved_env.insert(key, env::var_os(key));
        }
    }

    pub fn set_var(&mut self, key: &'static str, value: impl AsRef<str>) {
        self.save_var(key);
        unsafe {
            env::set_var(key, value.as_ref());
        }
    }

    pub fn set_var_os(&mut self, key: &'static str, value: impl AsRef<OsStr>) {
        self.save_var(key);
        unsafe {
            env::set_var(key, value);
        }
    }

    pub fn remove_var(&mut self, key: &'static str) {
        self.save_var(key);
        unsafe {
            env::remove_var(key);
        }
    }

    pub fn set_current_dir(&self, path: &Path) {
        env::set_current_dir(path).unwrap();
    }

    /// Write a `sh` script into the temp dir and return its path.
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, format!("{body}\n")).unwrap();
        path
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        env::set_current_dir(&self.original_dir).ok();
        for (key, value) in &self.saved_env {
            if let Some(val) = value {
                unsafe {
                    env::set_var(key, val);
                }
            } else {
                unsafe {
                    env::remove_var(key);
                }
            }
        }
    }
}

pub fn canonical_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

pub fn assert_paths_equal(lhs: &Path, rhs: &Path) {
    assert_eq!(canonical_path(lhs), canonical_path(rhs));
}

pub fn assert_path_str_equal(lhs: &str, rhs: &Path) {
    assert_eq!(canonical_path(Path::new(lhs)), canonical_path(rhs));
}
