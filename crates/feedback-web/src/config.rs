//! Server configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, `FEEDBACK_*` environment variables (`__` separates nested keys, e.g.
//! `FEEDBACK_MAIL__RECIPIENT`), and finally the platform variables `PORT`
//! and `GOOGLE_CLOUD_PROJECT` / `GCP_PROJECT`.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8080;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// Storage project identifier; scopes every stored letter.
  pub project:    String,
  pub store_path: PathBuf,
  pub mail:       MailConfig,
}

/// Where the preview page's send button addresses the letter.
#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
  pub recipient: String,
  pub subject:   String,
}

impl ServerConfig {
  /// Load from `file` (if it exists) and the process environment.
  pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
    let env = std::env::vars_os()
      .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
      .collect();
    Self::load_with(file, env)
  }

  /// Like [`ServerConfig::load`], with `env` standing in for the process
  /// environment. Both the `FEEDBACK_*` keys and the platform variables are
  /// read from it.
  pub fn load_with(
    file: Option<&Path>,
    env: Map<String, String>,
  ) -> Result<Self, ConfigError> {
    // Non-numeric or zero values leave the configured port alone.
    let port = env
      .get("PORT")
      .and_then(|p| p.trim().parse::<u16>().ok())
      .filter(|p| *p > 0);
    let project = env
      .get("GOOGLE_CLOUD_PROJECT")
      .filter(|p| !p.is_empty())
      .or_else(|| env.get("GCP_PROJECT"))
      .cloned();

    let mut builder = Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("project", "")?
      .set_default("store_path", "feedback.db")?
      .set_default("mail.recipient", "cmountbenites@burlingameschools.org")?
      .set_default("mail.subject", "Parent Concerns about Distance Learning")?;

    if let Some(path) = file {
      builder = builder.add_source(File::from(path).required(false));
    }

    builder
      .add_source(
        Environment::with_prefix("FEEDBACK")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true)
          .source(Some(env)),
      )
      .set_override_option("port", port.map(i64::from))?
      .set_override_option("project", project)?
      .build()?
      .try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn env_of(vars: &[(&str, &str)]) -> Map<String, String> {
    vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect()
  }

  #[test]
  fn defaults_apply_without_sources() {
    let cfg = ServerConfig::load_with(None, env_of(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.project, "");
    assert_eq!(cfg.store_path, PathBuf::from("feedback.db"));
    assert_eq!(cfg.mail.subject, "Parent Concerns about Distance Learning");
  }

  #[test]
  fn port_variable_overrides_default() {
    let cfg = ServerConfig::load_with(None, env_of(&[("PORT", "9090")])).unwrap();
    assert_eq!(cfg.port, 9090);
  }

  #[test]
  fn invalid_port_is_ignored() {
    for bad in ["abc", "0", "-5"] {
      let cfg = ServerConfig::load_with(None, env_of(&[("PORT", bad)])).unwrap();
      assert_eq!(cfg.port, DEFAULT_PORT, "PORT={bad}");
    }
  }

  #[test]
  fn project_falls_back_to_gcp_project() {
    let cfg =
      ServerConfig::load_with(None, env_of(&[("GCP_PROJECT", "fallback")])).unwrap();
    assert_eq!(cfg.project, "fallback");

    let cfg = ServerConfig::load_with(
      None,
      env_of(&[("GOOGLE_CLOUD_PROJECT", "primary"), ("GCP_PROJECT", "fallback")]),
    )
    .unwrap();
    assert_eq!(cfg.project, "primary");
  }

  #[test]
  fn toml_file_is_layered_under_platform_variables() {
    let path = std::env::temp_dir().join(format!(
      "feedback-config-{}.toml",
      uuid::Uuid::new_v4()
    ));
    std::fs::write(
      &path,
      "port = 7000\nstore_path = \"/tmp/letters.db\"\n\n[mail]\nrecipient = \"sup@example.org\"\n",
    )
    .unwrap();

    let cfg = ServerConfig::load_with(Some(path.as_path()), env_of(&[])).unwrap();
    assert_eq!(cfg.port, 7000);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/letters.db"));
    assert_eq!(cfg.mail.recipient, "sup@example.org");
    assert_eq!(cfg.mail.subject, "Parent Concerns about Distance Learning");

    let cfg = ServerConfig::load_with(Some(path.as_path()), env_of(&[("PORT", "7100")])).unwrap();
    assert_eq!(cfg.port, 7100);

    std::fs::remove_file(&path).ok();
  }

  #[test]
  fn prefixed_variables_come_from_the_given_environment() {
    let cfg = ServerConfig::load_with(
      None,
      env_of(&[
        ("FEEDBACK_PORT", "7001"),
        ("FEEDBACK_STORE_PATH", "/srv/letters.db"),
        ("FEEDBACK_MAIL__RECIPIENT", "board@example.org"),
      ]),
    )
    .unwrap();
    assert_eq!(cfg.port, 7001);
    assert_eq!(cfg.store_path, PathBuf::from("/srv/letters.db"));
    assert_eq!(cfg.mail.recipient, "board@example.org");

    let cfg = ServerConfig::load_with(
      None,
      env_of(&[("FEEDBACK_PORT", "7001"), ("PORT", "7002")]),
    )
    .unwrap();
    assert_eq!(cfg.port, 7002);
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let path = Path::new("/definitely/not/here/config.toml");
    assert!(ServerConfig::load_with(Some(path), env_of(&[])).is_ok());
  }
}
