use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

const BASE_DIR: &str = "data";
const CONFIG_FILE_NAME: &str = "i18n.json";

static CWD: Lazy<PathBuf> = Lazy::new(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

pub fn get_log_dir() -> PathBuf {
    PathBuf::from(BASE_DIR).join("logs")
}

fn get_base_dir() -> PathBuf {
    CWD.join(BASE_DIR)
}

pub fn get_config_dir() -> PathBuf {
    get_base_dir().join("config")
}

pub fn get_config_file_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_under_data_config() {
        let path = get_config_file_path();
        assert!(path.ends_with("data/config/i18n.json"));
        assert!(get_log_dir().ends_with("data/logs"));
    }
}
