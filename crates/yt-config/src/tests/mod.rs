
use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// Override vars the loader reads; cleared so the developer's shell cannot leak into tests
const YT_ENV_VARS: [&str; 9] = [
    "YT_URL",
    "YT_TOKEN",
    "YT_DEFAULT_SPRINT",
    "YT_BOARD",
    "YT_HOURS_PER_DAY",
    "YT_TIMEOUT_SECS",
    "YT_LOG_LEVEL",
    "YT_LOG_COLORED",
    "YT_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

pub(crate) struct TestConfigFile {
    pub(crate) temp: TempDir,
    pub(crate) path: PathBuf,
    _guards: Vec<EnvGuard>,
}

/// Clear YT_* vars and point YT_CONFIG at a file inside a fresh temp dir
pub(crate) fn setup_config_file() -> TestConfigFile {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("youtrack-cli.yaml");

    let mut guards: Vec<EnvGuard> = YT_ENV_VARS.iter().map(|key| EnvGuard::remove(*key)).collect();
    guards.push(EnvGuard::set("YT_CONFIG", path.to_str().unwrap()));

    TestConfigFile {
        temp,
        path,
        _guards: guards,
    }
}
