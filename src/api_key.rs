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


use std::fmt::Debug;
use std::fmt::Formatter;

use http::HeaderName;
use http::HeaderValue;
use log::debug;
use serde::Deserialize;

use crate::encode::split_url;
use crate::utils::Redact;
use crate::RequestDescriptor;
use crate::Result;

/// Where an api key is placed on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    /// Append `name=value` to the url query.
    Query,
    /// Set header `name: value`.
    Header,
}

/// ApiKey places a static key in a query parameter or header.
///
/// Deserializes from `{"name": "key", "value": "abc123", "type": "query"}`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ApiKey {
    /// Parameter or header name.
    pub name: String,
    /// The api key.
    pub value: String,
    /// Placement of this key.
    #[serde(rename = "type")]
    pub location: ApiKeyLocation,
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("name", &self.name)
            .field("value", &Redact::from(&self.value))
            .field("location", &self.location)
            .finish()
    }
}

impl ApiKey {
    /// Create a new api key sent in the url query.
    pub fn query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            location: ApiKeyLocation::Query,
        }
    }

    /// Create a new api key sent as header.
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            location: ApiKeyLocation::Header,
        }
    }

    /// Apply this key to the request.
    ///
    /// - Query: returns `false` without touching the url if the parameter is already present.
    /// - Header: an existing header is kept as is, still returns `true`.
    pub fn apply(&self, req: &mut RequestDescriptor) -> Result<bool> {
        match self.location {
            ApiKeyLocation::Query => Ok(self.apply_query(req)),
            ApiKeyLocation::Header => self.apply_header(req),
        }
    }

    fn apply_query(&self, req: &mut RequestDescriptor) -> bool {
        let (_, query) = split_url(&req.url);
        let exists = query.is_some_and(|q| {
            q.split('&')
                .any(|pair| pair.split('=').next() == Some(self.name.as_str()))
        });
        if exists {
            debug!("query parameter {} already present, skipped", self.name);
            return false;
        }

        let sep = if req.url.contains('?') { '&' } else { '?' };
        req.url.push(sep);
        req.url.push_str(&self.name);
        req.url.push('=');
        req.url.push_str(&self.value);
        true
    }

    fn apply_header(&self, req: &mut RequestDescriptor) -> Result<bool> {
        let name = HeaderName::try_from(self.name.as_str())?;
        if req.headers.contains_key(&name) {
            debug!("header {} already present, skipped", self.name);
            return Ok(true);
        }

        let mut value = HeaderValue::try_from(self.value.as_str())?;
        value.set_sensitive(true);
        req.headers.insert(name, value);
        Ok(true)
    }
}
