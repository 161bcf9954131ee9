use std::{fs, path::Path};

const ENV_CONFIG_PATH: &str = "PORTFOLIO_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Path of the config file to load, `None` when running on built-in defaults.
pub fn get() -> Option<String> {
    resolve(std::env::var(ENV_CONFIG_PATH).ok(), |path| {
        fs::metadata(Path::new(path)).is_ok()
    })
}

fn resolve<F: Fn(&str) -> bool>(env_path: Option<String>, exists: F) -> Option<String> {
    match env_path {
        Some(path) => {
            if !exists(&path) {
                panic!("config file specified in {ENV_CONFIG_PATH} environment variable must exist")
            }
            Some(path)
        }
        None => exists(DEFAULT_CONFIG_PATH).then(|| DEFAULT_CONFIG_PATH.to_owned()),
    }
}
