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


// Parameters defined by OAuth 1.0.
pub const OAUTH_BODY_HASH: &str = "oauth_body_hash";
pub const OAUTH_CALLBACK: &str = "oauth_callback";
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_VERSION: &str = "oauth_version";

pub const OAUTH_VERSION_1_0: &str = "1.0";
/// This client never registers a real callback.
pub const OAUTH_CALLBACK_ABOUT_BLANK: &str = "about:blank";

/// Content type that switches signing into the request body.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Env values used by oauth1 config.
pub const REQAUTH_OAUTH1_CONSUMER_KEY: &str = "REQAUTH_OAUTH1_CONSUMER_KEY";
pub const REQAUTH_OAUTH1_CONSUMER_SECRET: &str = "REQAUTH_OAUTH1_CONSUMER_SECRET";
pub const REQAUTH_OAUTH1_SIGNATURE_METHOD: &str = "REQAUTH_OAUTH1_SIGNATURE_METHOD";
