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

use crate::constants::DEFAULT_REGION;

/// Config for signing requests.
///
/// Built once by the caller and passed by reference into the signer; the
/// signer never reads flags or environment on its own.
#[derive(Clone, Debug)]
pub struct Config {
    /// Region placed in the credential scope.
    ///
    /// Defaults to `us-east-1`.
    pub region: String,
    /// Credential scope, a.k.a. the service name.
    ///
    /// Falls back to the first label of the target host when unset or empty.
    pub credential_scope: Option<String>,
    /// Do not inject or sign the `host` header.
    ///
    /// Some non-standard verifiers don't include it in their canonical request.
    pub skip_host: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            credential_scope: None,
            skip_host: false,
        }
    }
}

impl Config {
    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the credential scope.
    pub fn with_credential_scope(mut self, scope: impl Into<String>) -> Self {
        self.credential_scope = Some(scope.into());
        self
    }

    /// Disable signing the `host` header.
    pub fn with_skip_host(mut self, skip_host: bool) -> Self {
        self.skip_host = skip_host;
        self
    }

    /// Resolve the credential scope for a request sent to `host`.
    ///
    /// `host` must not carry a port. IPv6 literals may keep their brackets.
    pub fn scope_for(&self, host: &str) -> String {
        match self.credential_scope.as_deref() {
            Some(scope) if !scope.is_empty() => scope.to_string(),
            _ => {
                let host = host.trim_start_matches('[').trim_end_matches(']');
                host.split('.').next().unwrap_or(host).to_string()
            }
        }
    }
}
