/*
[INPUT]:  YAML configuration file and CACTUS_* environment variables
[OUTPUT]: Client configuration and credential for the custody client
[POS]:    Configuration layer - connection and credential setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use cactus_custody_adapter::{ClientConfig, Credential, KeyPairCredential, RefreshTokenCredential};

pub const ENV_API_KEY: &str = "CACTUS_API_KEY";
pub const ENV_API_KEY_ID: &str = "CACTUS_API_KEY_ID";
pub const ENV_PRIVATE_KEY_FILE: &str = "CACTUS_PRIVATE_KEY_FILE";
pub const ENV_REFRESH_TOKEN: &str = "CACTUS_REFRESH_TOKEN";

/// Top-level configuration for the custody CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// API host, defaults to production
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// How requests are authenticated
    #[serde(default)]
    pub credential: Option<CredentialConfig>,
}

/// Credential section, tagged by scheme
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialConfig {
    KeyPair {
        api_key: String,
        api_key_id: String,
        /// PEM file, relative paths resolve against the config file
        private_key_file: PathBuf,
    },
    RefreshToken {
        refresh_token: String,
        #[serde(default)]
        token_path: Option<String>,
    },
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        if let Some(dir) = path.parent() {
            config.resolve_relative_paths(dir);
        }
        Ok(config)
    }

    fn resolve_relative_paths(&mut self, base_dir: &Path) {
        if let Some(CredentialConfig::KeyPair {
            private_key_file, ..
        }) = &mut self.credential
        {
            if private_key_file.is_relative() {
                *private_key_file = base_dir.join(&*private_key_file);
            }
        }
    }

    /// Apply CACTUS_* overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok().filter(|v| !v.is_empty()));
    }

    /// Apply overrides from a variable lookup.
    ///
    /// A refresh token switches the credential to the token scheme. Key-pair
    /// variables patch an existing key-pair section, or create one when all
    /// three are present.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(token) = lookup(ENV_REFRESH_TOKEN) {
            let token_path = match &self.credential {
                Some(CredentialConfig::RefreshToken { token_path, .. }) => token_path.clone(),
                _ => None,
            };
            self.credential = Some(CredentialConfig::RefreshToken {
                refresh_token: token,
                token_path,
            });
            return;
        }

        let api_key = lookup(ENV_API_KEY);
        let api_key_id = lookup(ENV_API_KEY_ID);
        let key_file = lookup(ENV_PRIVATE_KEY_FILE).map(PathBuf::from);

        match &mut self.credential {
            Some(CredentialConfig::KeyPair {
                api_key: key,
                api_key_id: key_id,
                private_key_file,
            }) => {
                if let Some(value) = api_key {
                    *key = value;
                }
                if let Some(value) = api_key_id {
                    *key_id = value;
                }
                if let Some(value) = key_file {
                    *private_key_file = value;
                }
            }
            Some(CredentialConfig::RefreshToken { .. }) => {}
            None => {
                if let (Some(api_key), Some(api_key_id), Some(private_key_file)) =
                    (api_key, api_key_id, key_file)
                {
                    self.credential = Some(CredentialConfig::KeyPair {
                        api_key,
                        api_key_id,
                        private_key_file,
                    });
                }
            }
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(CredentialConfig::RefreshToken {
            token_path: Some(path),
            ..
        }) = &self.credential
        {
            config.token_path = path.clone();
        }
        config
    }

    /// Build the credential, loading the private key from disk when needed
    pub fn credential(&self) -> Result<Credential> {
        match &self.credential {
            Some(CredentialConfig::KeyPair {
                api_key,
                api_key_id,
                private_key_file,
            }) => {
                let credential = KeyPairCredential::from_pem_file(
                    api_key_id.as_str(),
                    api_key.as_str(),
                    private_key_file,
                )
                .context("load private key")?;
                Ok(credential.into())
            }
            Some(CredentialConfig::RefreshToken { refresh_token, .. }) => {
                let credential = RefreshTokenCredential::new(refresh_token.as_str())
                    .context("invalid refresh token")?;
                Ok(credential.into())
            }
            None => bail!(
                "no credential configured; add a credential section or set {ENV_REFRESH_TOKEN} or {ENV_API_KEY}/{ENV_API_KEY_ID}/{ENV_PRIVATE_KEY_FILE}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_key_pair_section() {
        let yaml = r#"
base_url: https://sandbox.example.com
timeout_secs: 5
credential:
  type: key_pair
  api_key: key
  api_key_id: key-id
  private_key_file: keys/private.pem
"#;
        let mut config: CliConfig = serde_yaml::from_str(yaml).unwrap();
        config.resolve_relative_paths(Path::new("/etc/cactus"));

        assert_eq!(
            config.credential,
            Some(CredentialConfig::KeyPair {
                api_key: "key".to_string(),
                api_key_id: "key-id".to_string(),
                private_key_file: PathBuf::from("/etc/cactus/keys/private.pem"),
            })
        );
        let client = config.client_config();
        assert_eq!(client.base_url, "https://sandbox.example.com");
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.token_path, "/tokens");
    }

    #[test]
    fn test_token_path_flows_into_client_config() {
        let yaml = r#"
credential:
  type: refresh_token
  refresh_token: rt
  token_path: /auth/tokens
"#;
        let config: CliConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.client_config().token_path, "/auth/tokens");
        assert!(matches!(
            config.credential().unwrap(),
            Credential::RefreshToken(_)
        ));
    }

    #[test]
    fn test_refresh_token_env_wins() {
        let mut config = CliConfig {
            credential: Some(CredentialConfig::KeyPair {
                api_key: "key".to_string(),
                api_key_id: "id".to_string(),
                private_key_file: PathBuf::from("k.pem"),
            }),
            ..Default::default()
        };
        config.apply_overrides(lookup(&[(ENV_REFRESH_TOKEN, "from-env")]));
        assert_eq!(
            config.credential,
            Some(CredentialConfig::RefreshToken {
                refresh_token: "from-env".to_string(),
                token_path: None,
            })
        );
    }

    #[test]
    fn test_key_pair_env_patches_fields() {
        let mut config = CliConfig {
            credential: Some(CredentialConfig::KeyPair {
                api_key: "key".to_string(),
                api_key_id: "id".to_string(),
                private_key_file: PathBuf::from("k.pem"),
            }),
            ..Default::default()
        };
        config.apply_overrides(lookup(&[(ENV_API_KEY, "env-key")]));
        let Some(CredentialConfig::KeyPair {
            api_key, api_key_id, ..
        }) = &config.credential
        else {
            panic!("key pair expected");
        };
        assert_eq!(api_key, "env-key");
        assert_eq!(api_key_id, "id");
    }

    #[test]
    fn test_env_alone_builds_key_pair() {
        let mut config = CliConfig::default();
        config.apply_overrides(lookup(&[(ENV_API_KEY, "k"), (ENV_API_KEY_ID, "i")]));
        assert!(config.credential.is_none());

        config.apply_overrides(lookup(&[
            (ENV_API_KEY, "k"),
            (ENV_API_KEY_ID, "i"),
            (ENV_PRIVATE_KEY_FILE, "/tmp/k.pem"),
        ]));
        assert!(matches!(
            config.credential,
            Some(CredentialConfig::KeyPair { .. })
        ));
    }

    #[test]
    fn test_missing_credential_is_an_error() {
        let err = CliConfig::default().credential().unwrap_err();
        assert!(err.to_string().contains(ENV_REFRESH_TOKEN));
    }
}
