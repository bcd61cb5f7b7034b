//! Connection configuration model.

use serde::{Deserialize, Serialize};

/// Connection parameters for the database probe.
///
/// Built once at process start from environment inputs and immutable
/// afterwards. The port is carried as text on purpose: it is parsed only
/// when a connect attempt is made, so a malformed or empty value behaves
/// like any other failed attempt instead of a startup error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Database host.
    pub host: String,
    /// Database port, unparsed.
    pub port: String,
    /// Database username.
    pub user: String,
    /// Database password (not serialized in log output).
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Database name.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConnectionConfig {
        ConnectionConfig {
            host: "db".into(),
            port: "3306".into(),
            user: "wordpress".into(),
            password: "secret".into(),
            database: "wordpress".into(),
        }
    }

    #[test]
    fn test_password_is_not_serialized() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"host\":\"db\""));
    }

    #[test]
    fn test_password_defaults_on_deserialize() {
        let config: ConnectionConfig = serde_json::from_str(
            r#"{"host":"db","port":"3306","user":"u","database":"d"}"#,
        )
        .unwrap();
        assert_eq!(config.password, "");
    }
}
