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


//! URL-encoded key/value codec shared by every authorization.

use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// AsciiSet for [RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986#section-2.3) as
/// required by [OAuth 1.0](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6).
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - `!`, `*`, `'`, `(` and `)` are encoded too.
pub static RFC3986_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent encode input with [`RFC3986_ENCODE_SET`].
pub fn rfc3986_encode(input: &str) -> String {
    utf8_percent_encode(input, &RFC3986_ENCODE_SET).to_string()
}

/// Split url into the part before `?` and the raw query string.
///
/// Fragment is dropped from both parts.
///
/// ```shell
/// "http://x/y?a=b#c" => ("http://x/y", Some("a=b"))
/// ```
pub fn split_url(url: &str) -> (&str, Option<&str>) {
    let url = url.split_once('#').map_or(url, |(v, _)| v);
    match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    }
}

/// Parse `&` joined `key=value` pairs with form decoding.
///
/// Pairs without `=` get an empty value, empty segments are skipped.
pub fn parse_pairs(input: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(input.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Serialize pairs into `&` joined `key=value` with [`RFC3986_ENCODE_SET`].
///
/// ```shell
/// [(a, b c), (d, e)] => "a=b%20c&d=e"
/// ```
pub fn serialize_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut s = String::with_capacity(64);

    for (idx, (k, v)) in pairs.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }

        s.push_str(&rfc3986_encode(k));
        s.push('=');
        s.push_str(&rfc3986_encode(v));
    }

    s
}
