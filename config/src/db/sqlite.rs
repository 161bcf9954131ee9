use serde::Deserialize;

#[derive(Deserialize)]
pub struct DbSqliteConfig {
    #[serde(default = "default_path")]
    path: String,
    #[serde(default = "default_max_connections")]
    max_connections: u32,
}

impl DbSqliteConfig {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn max_connections(&self) -> &u32 {
        &self.max_connections
    }

    pub(crate) fn set_path(&mut self, path: &str) {
        self.path = path.to_owned();
    }
}

impl Default for DbSqliteConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_path() -> String {
    "projects.db".to_owned()
}

fn default_max_connections() -> u32 {
    5
}
