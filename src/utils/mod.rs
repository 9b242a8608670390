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


//! Helpers shared by the credential types.

use std::fmt;

/// Masks a secret when it is formatted with `{:?}`.
///
/// Values of twelve characters or more keep their first and last three
/// characters, anything shorter is fully masked. An empty value prints as
/// `EMPTY` so a missing secret stays visible in logs.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a, T: AsRef<str> + ?Sized> From<&'a T> for Redact<'a> {
    fn from(value: &'a T) -> Self {
        Redact(value.as_ref())
    }
}

const VISIBLE: usize = 3;
const MIN_PARTIAL: usize = 12;

impl fmt::Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.chars().count();
        if count == 0 {
            return f.write_str("EMPTY");
        }
        if count < MIN_PARTIAL {
            return f.write_str("***");
        }

        let head: String = self.0.chars().take(VISIBLE).collect();
        let tail: String = self.0.chars().skip(count - VISIBLE).collect();
        write!(f, "{head}***{tail}")
    }
}
