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

use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::debug;

use crate::hash::base64_encode;
use crate::utils::Redact;
use crate::RequestDescriptor;
use crate::Result;

/// Password sends HTTP Basic credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    username: String,
    password: String,
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("username", &self.username)
            .field("password", &Redact::from(&self.password))
            .finish()
    }
}

impl Password {
    /// Create a new basic authorization.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Set `Authorization: Basic base64(username:password)` unless the request
    /// already carries an `Authorization` header.
    ///
    /// Always returns `true`.
    pub fn apply(&self, req: &mut RequestDescriptor) -> Result<bool> {
        if req.headers.contains_key(AUTHORIZATION) {
            debug!("authorization header already present, skipped basic auth");
            return Ok(true);
        }

        let token = base64_encode(format!("{}:{}", self.username, self.password).as_bytes());
        let mut value = HeaderValue::try_from(format!("Basic {token}"))?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);
        Ok(true)
    }
}
