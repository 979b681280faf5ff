//! Credentials for the X API
//!
//! X's user-context write endpoints are authorized with OAuth 1.0a, which
//! needs four long-lived secrets: the app's consumer key and secret plus the
//! account's access token and secret. They are read from the environment
//! once, at startup, and handed to the publisher explicitly.
//!
//! # Example
//!
//! ```no_run
//! use libpostx::credentials::Credentials;
//!
//! # fn example() -> libpostx::error::Result<()> {
//! let credentials = Credentials::from_env()?;
//! # Ok(())
//! # }
//! ```

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ConfigError, Result};

pub const CONSUMER_KEY_VAR: &str = "X_CONSUMER_API_KEY";
pub const CONSUMER_SECRET_VAR: &str = "X_CONSUMER_API_SECRET_KEY";
pub const ACCESS_TOKEN_VAR: &str = "X_ACCESS_TOKEN";
pub const ACCESS_TOKEN_SECRET_VAR: &str = "X_ACCESS_TOKEN_SECRET";

/// The four-part OAuth 1.0a secret tuple.
///
/// Values are wrapped in [`SecretString`] so they are redacted from `Debug`
/// output and zeroed on drop.
#[derive(Debug)]
pub struct Credentials {
    consumer_key: SecretString,
    consumer_secret: SecretString,
    access_token: SecretString,
    access_token_secret: SecretString,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: SecretString::from(consumer_key.into()),
            consumer_secret: SecretString::from(consumer_secret.into()),
            access_token: SecretString::from(access_token.into()),
            access_token_secret: SecretString::from(access_token_secret.into()),
        }
    }

    /// Load credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` naming the first variable
    /// that is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| -> Result<String> {
            match lookup(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ConfigError::MissingCredential(name.to_string()).into()),
            }
        };

        Ok(Self::new(
            fetch(CONSUMER_KEY_VAR)?,
            fetch(CONSUMER_SECRET_VAR)?,
            fetch(ACCESS_TOKEN_VAR)?,
            fetch(ACCESS_TOKEN_SECRET_VAR)?,
        ))
    }

    pub(crate) fn consumer_key(&self) -> &str {
        self.consumer_key.expose_secret()
    }

    pub(crate) fn consumer_secret(&self) -> &str {
        self.consumer_secret.expose_secret()
    }

    pub(crate) fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    pub(crate) fn access_token_secret(&self) -> &str {
        self.access_token_secret.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostxError;
    use serial_test::serial;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (CONSUMER_KEY_VAR, "ck".to_string()),
            (CONSUMER_SECRET_VAR, "cs".to_string()),
            (ACCESS_TOKEN_VAR, "at".to_string()),
            (ACCESS_TOKEN_SECRET_VAR, "ats".to_string()),
        ])
    }

    fn missing_var(result: Result<Credentials>) -> String {
        match result {
            Err(PostxError::Config(ConfigError::MissingCredential(name))) => name,
            other => panic!("Expected MissingCredential, got {:?}", other),
        }
    }

    #[test]
    fn test_from_lookup_all_present() {
        let env = full_env();
        let credentials = Credentials::from_lookup(|name| env.get(name).cloned()).unwrap();

        assert_eq!(credentials.consumer_key(), "ck");
        assert_eq!(credentials.consumer_secret(), "cs");
        assert_eq!(credentials.access_token(), "at");
        assert_eq!(credentials.access_token_secret(), "ats");
    }

    #[test]
    fn test_from_lookup_each_missing_variable_is_named() {
        for var in [
            CONSUMER_KEY_VAR,
            CONSUMER_SECRET_VAR,
            ACCESS_TOKEN_VAR,
            ACCESS_TOKEN_SECRET_VAR,
        ] {
            let mut env = full_env();
            env.remove(var);
            let result = Credentials::from_lookup(|name| env.get(name).cloned());
            assert_eq!(missing_var(result), var);
        }
    }

    #[test]
    fn test_from_lookup_empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert(ACCESS_TOKEN_VAR, String::new());
        let result = Credentials::from_lookup(|name| env.get(name).cloned());
        assert_eq!(missing_var(result), ACCESS_TOKEN_VAR);
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let credentials = Credentials::new("key-123", "secret-456", "token-789", "tsecret-000");
        let debug = format!("{:?}", credentials);

        assert!(!debug.contains("key-123"));
        assert!(!debug.contains("secret-456"));
        assert!(!debug.contains("token-789"));
        assert!(!debug.contains("tsecret-000"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(CONSUMER_KEY_VAR, "env-ck");
        std::env::set_var(CONSUMER_SECRET_VAR, "env-cs");
        std::env::set_var(ACCESS_TOKEN_VAR, "env-at");
        std::env::set_var(ACCESS_TOKEN_SECRET_VAR, "env-ats");

        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.consumer_key(), "env-ck");
        assert_eq!(credentials.access_token_secret(), "env-ats");

        std::env::remove_var(ACCESS_TOKEN_SECRET_VAR);
        assert_eq!(missing_var(Credentials::from_env()), ACCESS_TOKEN_SECRET_VAR);

        std::env::remove_var(CONSUMER_KEY_VAR);
        std::env::remove_var(CONSUMER_SECRET_VAR);
        std::env::remove_var(ACCESS_TOKEN_VAR);
    }
}
