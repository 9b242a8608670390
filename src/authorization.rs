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


use crate::ApiKey;
use crate::Cookie;
use crate::Oauth1Signer;
use crate::Password;
use crate::RequestDescriptor;
use crate::Result;

/// Authorization is one strategy that proves the caller's identity.
#[derive(Debug, Clone)]
pub enum Authorization {
    /// Api key in query or header.
    ApiKey(ApiKey),
    /// Session cookie.
    Cookie(Cookie),
    /// HTTP Basic credentials.
    Password(Password),
    /// OAuth 1.0 signature.
    OAuth1(Oauth1Signer),
}

impl Authorization {
    /// Apply this authorization to the request in place.
    ///
    /// Returns `false` if the strategy decided to skip the request, see
    /// [`ApiKey::apply`].
    pub fn apply(&self, req: &mut RequestDescriptor) -> Result<bool> {
        match self {
            Authorization::ApiKey(v) => v.apply(req),
            Authorization::Cookie(v) => Ok(v.apply(req)),
            Authorization::Password(v) => v.apply(req),
            Authorization::OAuth1(v) => v.apply(req),
        }
    }
}

impl From<ApiKey> for Authorization {
    fn from(v: ApiKey) -> Self {
        Authorization::ApiKey(v)
    }
}

impl From<Cookie> for Authorization {
    fn from(v: Cookie) -> Self {
        Authorization::Cookie(v)
    }
}

impl From<Password> for Authorization {
    fn from(v: Password) -> Self {
        Authorization::Password(v)
    }
}

impl From<Oauth1Signer> for Authorization {
    fn from(v: Oauth1Signer) -> Self {
        Authorization::OAuth1(v)
    }
}
