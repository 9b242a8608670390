// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;
use std::sync::Mutex;

use http::header::AUTHORIZATION;
use http::HeaderValue;
use http::Method;
use log::debug;

use super::constants::*;
use super::Config;
use crate::encode::parse_pairs;
use crate::encode::rfc3986_encode;
use crate::encode::serialize_pairs;
use crate::encode::split_url;
use crate::hash::base64_hmac_sha1;
use crate::hash::base64_hmac_sha256;
use crate::hash::hex_sha1;
use crate::hash::hex_sha256;
use crate::time::format_unix_timestamp;
use crate::time::now;
use crate::time::DateTime;
use crate::utils::Redact;
use crate::Error;
use crate::RequestDescriptor;
use crate::Result;

/// SignatureMethod is the `oauth_signature_method` used to sign requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMethod {
    /// `HMAC-SHA1`
    HmacSha1,
    /// `HMAC-SHA256`
    HmacSha256,
}

impl SignatureMethod {
    /// Name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::HmacSha256 => "HMAC-SHA256",
        }
    }

    /// Hex encoded digest of content with the underlying hash.
    pub fn hex_digest(&self, content: &[u8]) -> String {
        match self {
            SignatureMethod::HmacSha1 => hex_sha1(content),
            SignatureMethod::HmacSha256 => hex_sha256(content),
        }
    }

    /// Base64 encoded HMAC of content.
    pub fn base64_hmac(&self, key: &[u8], content: &[u8]) -> String {
        match self {
            SignatureMethod::HmacSha1 => base64_hmac_sha1(key, content),
            SignatureMethod::HmacSha256 => base64_hmac_sha256(key, content),
        }
    }
}

impl Display for SignatureMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
            "HMAC-SHA256" => Ok(SignatureMethod::HmacSha256),
            v => Err(Error::unsupported_signing_method(v)),
        }
    }
}

/// Build the OAuth1 signature base string.
///
/// Query parameters already on `url` are merged into `params` before
/// normalization.
///
/// ```shell
/// METHOD&enc(base_url)&enc(enc(k1))%3Denc(enc(v1))%26enc(enc(k2))%3Denc(enc(v2))
/// ```
pub fn base_string(method: &Method, url: &str, params: &BTreeMap<String, String>) -> String {
    let (base_url, query) = split_url(url);

    let mut merged = params.clone();
    if let Some(query) = query {
        merged.extend(parse_pairs(query));
    }

    let mut pairs = merged
        .iter()
        .map(|(k, v)| {
            (
                rfc3986_encode(&rfc3986_encode(k)),
                rfc3986_encode(&rfc3986_encode(v)),
            )
        })
        .collect::<Vec<_>>();
    pairs.sort();

    let mut s = String::with_capacity(256);
    s.push_str(method.as_str());
    s.push('&');
    s.push_str(&rfc3986_encode(base_url));
    s.push('&');
    for (idx, (k, v)) in pairs.iter().enumerate() {
        if idx != 0 {
            s.push_str("%26");
        }
        s.push_str(k);
        s.push_str("%3D");
        s.push_str(v);
    }

    s
}

/// Sign the base string with `enc(consumer_secret)&`.
///
/// This client has no token secret, so the part after `&` is always empty.
pub fn signature(method: SignatureMethod, consumer_secret: &str, base_string: &str) -> String {
    let key = format!("{}&", rfc3986_encode(consumer_secret));
    method.base64_hmac(key.as_bytes(), base_string.as_bytes())
}

/// Oauth1Signer signs requests with OAuth 1.0 HMAC signatures.
///
/// The computed body or `Authorization` value is cached per signer and only
/// dropped on the invalidation branches of [`Oauth1Signer::apply`]. The cache
/// is guarded by a mutex, but a signer shared by concurrent requests still
/// hands the same cached value to all of them: use one signer per in-flight
/// request.
pub struct Oauth1Signer {
    consumer_key: String,
    consumer_secret: String,
    method: SignatureMethod,

    signature: Mutex<Option<String>>,
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl Debug for Oauth1Signer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Oauth1Signer")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("method", &self.method)
            .field("cached", &self.has_cached_signature())
            .finish()
    }
}

impl Clone for Oauth1Signer {
    fn clone(&self) -> Self {
        Self {
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            method: self.method,
            signature: Mutex::new(self.cached_signature()),
            time: self.time,
            nonce: self.nonce.clone(),
        }
    }
}

impl Oauth1Signer {
    /// Create a new signer, `consumer_key` and `consumer_secret` play the
    /// role of username and password.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        method: SignatureMethod,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            method,

            signature: Mutex::new(None),
            time: None,
            nonce: None,
        }
    }

    /// Build a signer from config.
    ///
    /// Returns an `UnsupportedSigningMethod` error if the configured method
    /// is neither `HMAC-SHA1` nor `HMAC-SHA256`.
    pub fn from_config(config: Config) -> Result<Self> {
        let consumer_key = config
            .consumer_key
            .ok_or_else(|| Error::config_invalid("oauth1 consumer_key is required"))?;
        let consumer_secret = config
            .consumer_secret
            .ok_or_else(|| Error::config_invalid("oauth1 consumer_secret is required"))?;
        let method = match config.signature_method {
            Some(v) => v.parse()?,
            None => SignatureMethod::HmacSha1,
        };

        Ok(Self::new(consumer_key, consumer_secret, method))
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// Nonce must be unique per request.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// The signature method of this signer.
    pub fn method(&self) -> SignatureMethod {
        self.method
    }

    /// Whether a signed body or header value is cached.
    pub fn has_cached_signature(&self) -> bool {
        self.signature.lock().expect("lock poisoned").is_some()
    }

    /// Get the cached signed body or header value.
    pub fn cached_signature(&self) -> Option<String> {
        self.signature.lock().expect("lock poisoned").clone()
    }

    /// Drop the cached signature, the next apply signs again.
    pub fn invalidate(&self) {
        *self.signature.lock().expect("lock poisoned") = None;
    }

    /// Sign the request.
    ///
    /// - Requests without operation scoped authorizations are left untouched.
    /// - `application/x-www-form-urlencoded` requests get all oauth parameters
    ///   and the signature in the body.
    /// - Other requests get an `Authorization: OAuth ...` header carrying a
    ///   body hash.
    ///
    /// Always returns `true`, a request that already carries a signature is
    /// treated as signed.
    pub fn apply(&self, req: &mut RequestDescriptor) -> Result<bool> {
        if !req.is_operation_scoped() {
            debug!("request is not operation scoped, oauth1 signing skipped");
            return Ok(true);
        }

        if req.content_type() == Some(FORM_URLENCODED) {
            self.sign_form(req)?;
        } else {
            self.sign_header(req)?;
        }
        Ok(true)
    }

    fn sign_form(&self, req: &mut RequestDescriptor) -> Result<()> {
        let body = req.body.take().unwrap_or_default();
        if body.contains(OAUTH_SIGNATURE) {
            debug!("form body already carries {OAUTH_SIGNATURE}, invalidate cache");
            req.body = Some(body);
            self.invalidate();
            return Ok(());
        }

        let mut cache = self.signature.lock().expect("lock poisoned");
        let signed = match cache.clone() {
            Some(v) => v,
            None => {
                let mut params = parse_pairs(&body)
                    .into_iter()
                    .collect::<BTreeMap<_, _>>();
                params.extend(self.oauth_params());
                params.insert(
                    OAUTH_CALLBACK.to_string(),
                    OAUTH_CALLBACK_ABOUT_BLANK.to_string(),
                );

                let signature = self.sign_params(&req.method, &req.url, &params);
                params.insert(OAUTH_SIGNATURE.to_string(), signature);

                let v = serialize_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                *cache = Some(v.clone());
                v
            }
        };

        req.body = Some(signed);
        if body.is_empty() {
            debug!("form body is empty, invalidate cache");
            *cache = None;
        }
        Ok(())
    }

    fn sign_header(&self, req: &mut RequestDescriptor) -> Result<()> {
        if req.headers.contains_key(AUTHORIZATION) {
            debug!("authorization header already present, invalidate cache");
            self.invalidate();
            return Ok(());
        }

        let mut cache = self.signature.lock().expect("lock poisoned");
        let value = match cache.clone() {
            Some(v) => v,
            None => {
                let body = req.body.as_deref().unwrap_or_default();

                let mut params = self.oauth_params();
                params.insert(
                    OAUTH_BODY_HASH.to_string(),
                    self.method.hex_digest(body.as_bytes()),
                );

                let signature = self.sign_params(&req.method, &req.url, &params);
                params.insert(OAUTH_SIGNATURE.to_string(), signature);

                let v = format!(
                    "OAuth {}",
                    params
                        .iter()
                        .map(|(k, v)| format!("{}=\"{}\"", rfc3986_encode(k), rfc3986_encode(v)))
                        .collect::<Vec<_>>()
                        .join(",")
                );
                *cache = Some(v.clone());
                v
            }
        };

        let mut value = HeaderValue::try_from(value)?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    fn sign_params(&self, method: &Method, url: &str, params: &BTreeMap<String, String>) -> String {
        let base = base_string(method, url, params);
        debug!("calculated base string: {base}");

        signature(self.method, &self.consumer_secret, &base)
    }

    fn oauth_params(&self) -> BTreeMap<String, String> {
        let nonce = self.nonce.clone().unwrap_or_else(generate_nonce);
        let timestamp = format_unix_timestamp(self.time.unwrap_or_else(now));

        BTreeMap::from([
            (OAUTH_CONSUMER_KEY.to_string(), self.consumer_key.clone()),
            (OAUTH_NONCE.to_string(), nonce),
            (
                OAUTH_SIGNATURE_METHOD.to_string(),
                self.method.as_str().to_string(),
            ),
            (OAUTH_TIMESTAMP.to_string(), timestamp),
            (OAUTH_VERSION.to_string(), OAUTH_VERSION_1_0.to_string()),
        ])
    }
}

/// 32 hex chars from 16 random bytes.
fn generate_nonce() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}
