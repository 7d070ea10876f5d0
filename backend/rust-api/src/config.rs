use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub events_file: PathBuf,
    pub password_file: PathBuf,
    /// Written to `password_file` at startup only when that file does not exist yet.
    pub admin_password: Option<String>,
    /// Whether `GET /readPass` returns the stored credential.
    pub expose_password: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            events_file: lookup("EVENTS_FILE")
                .unwrap_or_else(|| "events.json".to_string())
                .into(),
            password_file: lookup("PASSWORD_FILE")
                .unwrap_or_else(|| "password.txt".to_string())
                .into(),
            admin_password: lookup("ADMIN_PASSWORD").filter(|p| !p.trim().is_empty()),
            expose_password: match lookup("EXPOSE_PASSWORD") {
                Some(value) => parse_flag("EXPOSE_PASSWORD", &value)?,
                None => true,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(name: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{} must be true or false, got {:?}", name, other),
    }
}
