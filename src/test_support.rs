//! Helpers shared by unit tests.

use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::{fs, path::Path};

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no padding.
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
/// 144 * 128_000 / 44_100, rounded down.
const FRAME_LEN: usize = 417;

/// Write a short run of silent MP3 frames with no tags, usable as a template.
pub fn write_silent_mp3(path: &Path) {
    let mut bytes = Vec::with_capacity(FRAME_LEN * 24);
    for _ in 0..24 {
        bytes.extend_from_slice(&FRAME_HEADER);
        bytes.resize(bytes.len() + FRAME_LEN - FRAME_HEADER.len(), 0);
    }
    fs::write(path, bytes).unwrap();
}

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Serialises tests that touch process environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets or clears an env var and restores the previous value on drop.
pub struct EnvGuard {
    key: &'static str,
    old: Option<OsString>,
}

impl EnvGuard {
    pub fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    pub fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}
