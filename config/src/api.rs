use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    web: ApiWebConfig,
}

impl ApiConfig {
    pub fn web(&self) -> &ApiWebConfig {
        &self.web
    }

    pub(crate) fn web_mut(&mut self) -> &mut ApiWebConfig {
        &mut self.web
    }
}

#[derive(Deserialize)]
pub struct ApiWebConfig {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_static_path")]
    static_path: String,
}

impl ApiWebConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &u16 {
        &self.port
    }

    pub fn static_path(&self) -> &str {
        &self.static_path
    }

    pub(crate) fn set_port(&mut self, port: u16) {
        self.port = port;
    }
}

impl Default for ApiWebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_path: default_static_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    5000
}

fn default_static_path() -> String {
    "static".to_owned()
}
