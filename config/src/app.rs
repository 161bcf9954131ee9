use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    mode: AppConfigMode,
}

impl AppConfig {
    pub fn mode(&self) -> &AppConfigMode {
        &self.mode
    }
}

#[derive(Deserialize, Clone, Copy, Default, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AppConfigMode {
    Development,
    #[default]
    Production,
}
