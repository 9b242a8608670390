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
use std::sync::Arc;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use http::header::AUTHORIZATION;
use http::Method;
use log::debug;
use percent_encoding::percent_decode_str;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use pretty_assertions::assert_eq;
use reqauth::oauth1::SignatureMethod;
use reqauth::oauth1::FORM_URLENCODED;
use reqauth::Authorizations;
use reqauth::RequestDescriptor;
use reqauth::Result;
use sha1::Sha1;
use sha2::Digest;
use sha2::Sha256;
use test_case::test_case;

use super::fixed_signer;
use super::init_logger;

const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const CONSUMER_SECRET: &str = "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw";

fn enc(v: &str) -> String {
    utf8_percent_encode(v, UNRESERVED).to_string()
}

/// Rebuild the base string following RFC 5849 section 3.4.1 directly.
fn rebuild_base_string(method: &str, base_url: &str, params: &BTreeMap<String, String>) -> String {
    let mut pairs = params
        .iter()
        .map(|(k, v)| (enc(k), enc(v)))
        .collect::<Vec<_>>();
    pairs.sort();
    let normalized = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{method}&{}&{}", enc(base_url), enc(&normalized))
}

fn hmac_base64(method: SignatureMethod, base: &str) -> String {
    let key = format!("{}&", enc(CONSUMER_SECRET));
    let digest = match method {
        SignatureMethod::HmacSha1 => {
            let mut h = Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("any key length");
            h.update(base.as_bytes());
            h.finalize().into_bytes().to_vec()
        }
        SignatureMethod::HmacSha256 => {
            let mut h = Hmac::<Sha256>::new_from_slice(key.as_bytes()).expect("any key length");
            h.update(base.as_bytes());
            h.finalize().into_bytes().to_vec()
        }
    };
    BASE64_STANDARD.encode(digest)
}

fn scoped(req: RequestDescriptor) -> RequestDescriptor {
    req.with_client_authorizations(Arc::new(Authorizations::new()))
}

#[test_case(SignatureMethod::HmacSha1; "hmac sha1")]
#[test_case(SignatureMethod::HmacSha256; "hmac sha256")]
fn test_form_body_signature_verifies(method: SignatureMethod) -> Result<()> {
    init_logger();

    let signer = fixed_signer(method);
    let mut req = scoped(
        RequestDescriptor::new(
            Method::POST,
            "https://api.twitter.com/1.1/statuses/update.json?include_entities=true",
        )
        .with_header("Content-Type", FORM_URLENCODED)?
        .with_body("status=Hello+Ladies+%2B+Gentlemen%2C+a+signed+OAuth+request%21"),
    );

    assert!(signer.apply(&mut req)?);
    let body = req.body.clone().expect("body must be set");
    debug!("signed body: {body}");

    let mut params = form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect::<BTreeMap<String, String>>();
    let signature = params
        .remove("oauth_signature")
        .expect("signature must be present");

    assert_eq!(
        params.get("status").map(String::as_str),
        Some("Hello Ladies + Gentlemen, a signed OAuth request!")
    );
    assert_eq!(
        params.get("oauth_consumer_key").map(String::as_str),
        Some("xvz1evFS4wEEPTGEFPHBog")
    );
    assert_eq!(
        params.get("oauth_signature_method").map(String::as_str),
        Some(method.as_str())
    );
    assert_eq!(
        params.get("oauth_timestamp").map(String::as_str),
        Some("1318622958")
    );
    assert_eq!(params.get("oauth_version").map(String::as_str), Some("1.0"));
    assert_eq!(
        params.get("oauth_callback").map(String::as_str),
        Some("about:blank")
    );
    // Query parameters are signed but stay on the url.
    assert!(!params.contains_key("include_entities"));

    params.insert("include_entities".to_string(), "true".to_string());
    let base = rebuild_base_string(
        "POST",
        "https://api.twitter.com/1.1/statuses/update.json",
        &params,
    );
    assert_eq!(signature, hmac_base64(method, &base));
    Ok(())
}

#[test]
fn test_header_signature_format() -> Result<()> {
    init_logger();

    let body = r#"{"name":"doggie","tags":["a b"]}"#;
    let signer = fixed_signer(SignatureMethod::HmacSha256);
    let mut req = scoped(
        RequestDescriptor::new(Method::PUT, "http://petstore.example.com/v2/pet?dry_run=1")
            .with_header("Content-Type", "application/json")?
            .with_body(body),
    );

    assert!(signer.apply(&mut req)?);
    let header = req.headers[AUTHORIZATION].to_str()?.to_string();
    assert!(
        header.starts_with(r#"OAuth oauth_body_hash=""#),
        "unexpected header: {header}"
    );

    let pairs = header["OAuth ".len()..]
        .split(',')
        .map(|pair| {
            let (k, v) = pair.split_once('=').expect("pair must have =");
            let v = v
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .expect("value must be quoted");
            (k.to_string(), v.to_string())
        })
        .collect::<Vec<_>>();

    let keys = pairs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec![
            "oauth_body_hash",
            "oauth_consumer_key",
            "oauth_nonce",
            "oauth_signature",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_version",
        ]
    );

    let mut params = BTreeMap::new();
    for (k, v) in pairs {
        let decoded = percent_decode_str(&v).decode_utf8_lossy().to_string();
        // Every value is percent encoded exactly once.
        assert_eq!(enc(&decoded), v);
        params.insert(k, decoded);
    }

    assert_eq!(
        params.get("oauth_body_hash").map(String::as_str),
        Some(hex::encode(Sha256::digest(body.as_bytes())).as_str())
    );

    let signature = params
        .remove("oauth_signature")
        .expect("signature must be present");
    params.insert("dry_run".to_string(), "1".to_string());
    let base = rebuild_base_string("PUT", "http://petstore.example.com/v2/pet", &params);
    assert_eq!(signature, hmac_base64(SignatureMethod::HmacSha256, &base));

    // Body is never touched by header signing.
    assert_eq!(req.body.as_deref(), Some(body));
    Ok(())
}

#[test]
fn test_header_second_apply_keeps_header_and_clears_cache() -> Result<()> {
    init_logger();

    let signer = fixed_signer(SignatureMethod::HmacSha1);
    let mut req = scoped(RequestDescriptor::new(Method::GET, "http://x/y"));

    assert!(signer.apply(&mut req)?);
    let first = req.headers[AUTHORIZATION].clone();
    assert!(signer.has_cached_signature());

    assert!(signer.apply(&mut req)?);
    assert_eq!(req.headers[AUTHORIZATION], first);
    assert_eq!(req.headers.get_all(AUTHORIZATION).iter().count(), 1);
    assert!(!signer.has_cached_signature());
    Ok(())
}

#[test]
fn test_unscoped_request_is_untouched() -> Result<()> {
    let signer = fixed_signer(SignatureMethod::HmacSha1);
    let mut req = RequestDescriptor::new(Method::POST, "http://x/y")
        .with_header("Content-Type", FORM_URLENCODED)?
        .with_body("a=b");

    assert!(signer.apply(&mut req)?);
    assert_eq!(req.body.as_deref(), Some("a=b"));
    assert!(!signer.has_cached_signature());
    Ok(())
}
