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


use super::constants::*;
use crate::Context;

/// Config carries all the configuration for OAuth1 signing.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH1_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH1_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `signature_method` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`REQAUTH_OAUTH1_SIGNATURE_METHOD`]
    /// - default to `HMAC-SHA1`
    pub signature_method: Option<String>,
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH1_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH1_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(REQAUTH_OAUTH1_SIGNATURE_METHOD) {
            self.signature_method.get_or_insert(v);
        }

        self
    }
}
