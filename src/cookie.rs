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
use std::fmt::Formatter;

use crate::utils::Redact;
use crate::RequestDescriptor;

/// Cookie registers a raw session cookie into the request's jar.
#[derive(Clone, PartialEq, Eq)]
pub struct Cookie {
    raw: String,
}

impl Debug for Cookie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cookie")
            .field("raw", &Redact::from(&self.raw))
            .finish()
    }
}

impl Cookie {
    /// Create a new cookie authorization from a string like `session=abc123`.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Apply this cookie to the request, the jar is created if absent.
    ///
    /// Always returns `true`.
    pub fn apply(&self, req: &mut RequestDescriptor) -> bool {
        req.cookie_jar_mut().set_cookie(&self.raw);
        true
    }
}

/// CookieStore is the opaque jar a request carries cookies in.
///
/// Transports read [`CookieStore::cookie_header`] when sending the request.
pub trait CookieStore: Debug + Send + Sync + 'static {
    /// Register a raw `Set-Cookie` style string like `session=abc; Path=/`.
    fn set_cookie(&mut self, raw: &str);

    /// Render all stored cookies as a `Cookie` header value.
    ///
    /// Returns `None` if the jar is empty.
    fn cookie_header(&self) -> Option<String>;
}

/// MemoryCookieJar keeps the `name=value` part of every cookie in memory.
///
/// Attributes like `Path` or `Expires` are ignored, a later cookie with the
/// same name replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: BTreeMap<String, String>,
}

impl MemoryCookieJar {
    /// Get cookie value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|v| v.as_str())
    }
}

impl CookieStore for MemoryCookieJar {
    fn set_cookie(&mut self, raw: &str) {
        let pair = raw.split(';').next().unwrap_or_default();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        self.cookies
            .insert(name.to_string(), value.trim().to_string());
    }

    fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }

        Some(
            self.cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
