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

use http::header::CONTENT_TYPE;
use http::HeaderMap;
use http::HeaderName;
use http::HeaderValue;
use http::Method;

use crate::cookie::CookieStore;
use crate::cookie::MemoryCookieJar;
use crate::Authorizations;
use crate::Result;

/// RequestDescriptor is the outgoing request that authorizations mutate in place.
///
/// The descriptor is owned by the caller for one request, strategies only
/// borrow it while applying. Header names follow [`HeaderMap`] rules, so
/// `Authorization` and `authorization` are the same header.
#[derive(Debug, Default)]
pub struct RequestDescriptor {
    /// Full request url, may contain a query string.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Raw wire payload.
    pub body: Option<String>,
    /// Cookie jar, created on first use.
    pub cookie_jar: Option<Box<dyn CookieStore>>,
    /// Operation scoped authorizations that override the client's registry.
    pub client_authorizations: Option<Arc<Authorizations>>,
}

impl RequestDescriptor {
    /// Create a new descriptor with given method and url.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            ..Default::default()
        }
    }

    /// Insert a header, replacing any existing value.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        self.headers
            .insert(HeaderName::try_from(name)?, HeaderValue::try_from(value)?);
        Ok(self)
    }

    /// Set the raw body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach operation scoped authorizations.
    pub fn with_client_authorizations(mut self, auths: Arc<Authorizations>) -> Self {
        self.client_authorizations = Some(auths);
        self
    }

    /// Whether this request carries its own operation scoped authorizations.
    #[inline]
    pub fn is_operation_scoped(&self) -> bool {
        self.client_authorizations.is_some()
    }

    /// Get the declared content type.
    ///
    /// Returns `None` if the header is absent or not visible ASCII.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Get the cookie jar, creating a [`MemoryCookieJar`] if absent.
    pub fn cookie_jar_mut(&mut self) -> &mut dyn CookieStore {
        let jar = self
            .cookie_jar
            .get_or_insert_with(|| Box::new(MemoryCookieJar::default()) as Box<dyn CookieStore>);
        &mut **jar
    }
}
