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


use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::collections::HashSet;

use log::debug;
use log::trace;
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::Authorization;
use crate::RequestDescriptor;
use crate::Result;

/// SecurityRequirement names the authorizations an operation accepts.
///
/// Deserializes from either a bare name or an object keyed by names:
///
/// ```json
/// [{"api_key": []}, "petstore_auth"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SecurityRequirement {
    /// A bare authorization name.
    Name(String),
    /// Authorization names mapped to their scopes, scopes of any shape are ignored.
    Schemes(BTreeMap<String, IgnoredAny>),
}

impl SecurityRequirement {
    /// Names referenced by this requirement.
    pub fn names(&self) -> Vec<&str> {
        match self {
            SecurityRequirement::Name(v) => vec![v.as_str()],
            SecurityRequirement::Schemes(v) => v.keys().map(|k| k.as_str()).collect(),
        }
    }
}

/// Authorizations is the registry of named authorizations owned by a client.
///
/// Entries are applied in name order.
#[derive(Debug, Clone, Default)]
pub struct Authorizations {
    entries: BTreeMap<String, Authorization>,
}

impl Authorizations {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an authorization under name, overwriting any existing entry.
    ///
    /// Returns the stored authorization.
    pub fn add_one(
        &mut self,
        name: impl Into<String>,
        auth: impl Into<Authorization>,
    ) -> &Authorization {
        match self.entries.entry(name.into()) {
            Entry::Occupied(mut e) => {
                e.insert(auth.into());
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(auth.into()),
        }
    }

    /// Merge all entries, existing names are overwritten.
    pub fn add_many<N, A>(&mut self, entries: impl IntoIterator<Item = (N, A)>)
    where
        N: Into<String>,
        A: Into<Authorization>,
    {
        self.entries
            .extend(entries.into_iter().map(|(n, a)| (n.into(), a.into())));
    }

    /// Remove the named entry, returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Get authorization by name.
    pub fn get(&self, name: &str) -> Option<&Authorization> {
        self.entries.get(name)
    }

    /// Registered names in apply order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Number of registered authorizations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply eligible authorizations to the request.
    ///
    /// - Authorizations attached to the request override this registry.
    /// - `None` or empty `securities` makes every entry eligible, otherwise
    ///   only the names they reference.
    ///
    /// Every eligible entry runs, the result is `true` only if all of them
    /// returned `true`.
    pub fn apply(
        &self,
        req: &mut RequestDescriptor,
        securities: Option<&[SecurityRequirement]>,
    ) -> Result<bool> {
        let scoped = req.client_authorizations.clone();
        let effective = match scoped.as_deref() {
            Some(v) => {
                debug!("using operation scoped authorizations");
                v
            }
            None => self,
        };

        let eligible = securities
            .filter(|v| !v.is_empty())
            .map(|v| v.iter().flat_map(|s| s.names()).collect::<HashSet<_>>());

        let mut status = true;
        for (name, auth) in &effective.entries {
            if let Some(eligible) = &eligible {
                if !eligible.contains(name.as_str()) {
                    trace!("authorization {name} is not required, skipped");
                    continue;
                }
            }

            trace!("applying authorization {name}");
            let applied = auth.apply(req)?;
            if !applied {
                debug!("authorization {name} reported failure");
            }
            status &= applied;
        }

        Ok(status)
    }
}
