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


use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::Method;
use pretty_assertions::assert_eq;
use reqauth::oauth1::SignatureMethod;
use reqauth::ApiKey;
use reqauth::Authorization;
use reqauth::Authorizations;
use reqauth::Cookie;
use reqauth::Password;
use reqauth::RequestDescriptor;
use reqauth::Result;
use reqauth::SecurityRequirement;

use super::fixed_signer;
use super::init_logger;

fn petstore() -> Authorizations {
    let mut auths = Authorizations::new();
    auths.add_many([
        ("api_key", Authorization::from(ApiKey::header("api_key", "special-key"))),
        ("petstore_auth", Authorization::from(Password::new("user", "pass"))),
        ("session", Authorization::from(Cookie::new("JSESSIONID=abc; Path=/"))),
        ("query_key", Authorization::from(ApiKey::query("key", "abc123"))),
    ]);
    auths
}

#[test]
fn test_apply_query_key_without_securities() -> Result<()> {
    init_logger();

    let mut auths = Authorizations::new();
    let key: ApiKey = serde_json::from_str(r#"{"name":"key","value":"abc123","type":"query"}"#)?;
    auths.add_one("key", key);

    let mut req = RequestDescriptor::new(Method::GET, "http://x/y");
    assert!(auths.apply(&mut req, None)?);
    assert_eq!(req.url, "http://x/y?key=abc123");
    Ok(())
}

#[test]
fn test_apply_flattens_securities() -> Result<()> {
    init_logger();

    let auths = petstore();
    let securities: Vec<SecurityRequirement> =
        serde_json::from_str(r#"[{"api_key": []}, "petstore_auth"]"#)?;

    let mut req = RequestDescriptor::new(Method::GET, "http://petstore.example.com/v2/pet/1");
    assert!(auths.apply(&mut req, Some(securities.as_slice()))?);

    assert_eq!(req.headers["api_key"], "special-key");
    assert_eq!(req.headers[AUTHORIZATION], "Basic dXNlcjpwYXNz");
    assert_eq!(req.url, "http://petstore.example.com/v2/pet/1");
    assert!(req.cookie_jar.is_none());
    Ok(())
}

#[test]
fn test_apply_all() -> Result<()> {
    init_logger();

    let auths = petstore();
    let mut req = RequestDescriptor::new(Method::GET, "http://petstore.example.com/v2/pet/1");
    assert!(auths.apply(&mut req, None)?);

    assert_eq!(req.url, "http://petstore.example.com/v2/pet/1?key=abc123");
    assert_eq!(
        req.cookie_jar
            .as_ref()
            .and_then(|jar| jar.cookie_header())
            .as_deref(),
        Some("JSESSIONID=abc")
    );

    // A second pass reports the skipped query key but changes nothing.
    let headers = req.headers.clone();
    assert!(!auths.apply(&mut req, None)?);
    assert_eq!(req.url, "http://petstore.example.com/v2/pet/1?key=abc123");
    assert_eq!(req.headers, headers);
    Ok(())
}

#[test]
fn test_apply_operation_scoped_oauth1() -> Result<()> {
    init_logger();

    let client = petstore();

    let mut scoped = Authorizations::new();
    scoped.add_one("a_key", ApiKey::query("key", "abc123"));
    scoped.add_one("oauth", fixed_signer(SignatureMethod::HmacSha1));
    let scoped = Arc::new(scoped);

    let mut req = RequestDescriptor::new(Method::GET, "http://x/y")
        .with_client_authorizations(scoped.clone());
    assert!(client.apply(&mut req, None)?);

    // Only the scoped registry ran: query key first, then the signature over it.
    assert_eq!(req.url, "http://x/y?key=abc123");
    assert!(!req.headers.contains_key("api_key"));
    let header = req.headers[AUTHORIZATION].to_str()?;
    assert!(header.starts_with("OAuth "), "unexpected header: {header}");

    let Some(Authorization::OAuth1(signer)) = scoped.get("oauth") else {
        panic!("oauth must be registered");
    };
    assert_eq!(signer.cached_signature().as_deref(), Some(header));
    Ok(())
}

#[test]
fn test_oauth1_in_client_registry_is_noop() -> Result<()> {
    init_logger();

    let mut client = Authorizations::new();
    client.add_one("oauth", fixed_signer(SignatureMethod::HmacSha1));

    let mut req = RequestDescriptor::new(Method::GET, "http://x/y");
    assert!(client.apply(&mut req, None)?);
    assert!(req.headers.is_empty());
    Ok(())
}
