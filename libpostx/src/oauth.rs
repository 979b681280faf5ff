//! OAuth 1.0a request signing (HMAC-SHA1)
//!
//! Implements the user-context signature X requires on write endpoints:
//! collect the `oauth_*` protocol parameters together with any query and
//! form parameters, build the signature base string, sign it with
//! `consumer_secret&token_secret` and emit an `Authorization: OAuth ...`
//! header.
//!
//! JSON request bodies are not part of the signature.

use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::{Method, Url};
use sha1::Sha1;

use crate::credentials::Credentials;
use crate::error::{ConfigError, Result};

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters pass through untouched.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const NONCE_LEN: usize = 32;

/// Percent-encode a value the way OAuth 1.0a demands.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Signs requests on behalf of one set of credentials.
pub struct Signer<'a> {
    credentials: &'a Credentials,
}

impl<'a> Signer<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Build the `Authorization` header value for a request, with a fresh
    /// nonce and the current timestamp.
    pub fn authorization_header(
        &self,
        method: &Method,
        url: &Url,
        form_params: &[(&str, &str)],
    ) -> Result<String> {
        let nonce = generate_nonce();
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.authorization_header_with(method, url, form_params, &nonce, &timestamp)
    }

    /// Deterministic variant of [`Signer::authorization_header`].
    pub fn authorization_header_with(
        &self,
        method: &Method,
        url: &Url,
        form_params: &[(&str, &str)],
        nonce: &str,
        timestamp: &str,
    ) -> Result<String> {
        let mut oauth_params = self.protocol_params(nonce, timestamp);
        let signature = self.signature(method, url, form_params, &oauth_params)?;
        oauth_params.push(("oauth_signature".to_string(), signature));
        oauth_params.sort();

        let fields = oauth_params
            .iter()
            .map(|(key, value)| format!("{}=\"{}\"", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {}", fields))
    }

    /// Compute the base64 HMAC-SHA1 signature for a request.
    pub fn sign(
        &self,
        method: &Method,
        url: &Url,
        form_params: &[(&str, &str)],
        nonce: &str,
        timestamp: &str,
    ) -> Result<String> {
        let oauth_params = self.protocol_params(nonce, timestamp);
        self.signature(method, url, form_params, &oauth_params)
    }

    fn protocol_params(&self, nonce: &str, timestamp: &str) -> Vec<(String, String)> {
        vec![
            (
                "oauth_consumer_key".to_string(),
                self.credentials.consumer_key().to_string(),
            ),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            (
                "oauth_token".to_string(),
                self.credentials.access_token().to_string(),
            ),
            ("oauth_version".to_string(), "1.0".to_string()),
        ]
    }

    fn signature(
        &self,
        method: &Method,
        url: &Url,
        form_params: &[(&str, &str)],
        oauth_params: &[(String, String)],
    ) -> Result<String> {
        let base = signature_base_string(method, url, form_params, oauth_params)?;
        let key = format!(
            "{}&{}",
            encode(self.credentials.consumer_secret()),
            encode(self.credentials.access_token_secret())
        );

        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| ConfigError::InvalidValue(format!("signing key: {}", e)))?;
        mac.update(base.as_bytes());

        Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }
}

/// Build the signature base string: `METHOD&base_url&parameters`.
pub fn signature_base_string(
    method: &Method,
    url: &Url,
    form_params: &[(&str, &str)],
    oauth_params: &[(String, String)],
) -> Result<String> {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k), encode(&v)))
        .chain(form_params.iter().map(|(k, v)| (encode(k), encode(v))))
        .chain(oauth_params.iter().map(|(k, v)| (encode(k), encode(v))))
        .collect();
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "{}&{}&{}",
        method.as_str().to_uppercase(),
        encode(&base_url(url)?),
        encode(&normalized)
    ))
}

/// Scheme, host, non-default port and path; no query or fragment.
fn base_url(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| ConfigError::InvalidValue(format!("URL has no host: {}", url)))?;

    let authority = match url.port() {
        Some(port) => format!("{}:{}", host.to_lowercase(), port),
        None => host.to_lowercase(),
    };

    Ok(format!(
        "{}://{}{}",
        url.scheme().to_lowercase(),
        authority,
        url.path()
    ))
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}
