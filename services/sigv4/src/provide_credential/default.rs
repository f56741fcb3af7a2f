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

use crate::constants::{HMACURL_ACCESS_KEY, HMACURL_SECRET_KEY};
use crate::provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
use crate::Credential;
use async_trait::async_trait;
use hmacurl_core::{Context, ProvideCredential, Result};
use log::debug;

/// DefaultCredentialProvider resolves each key from its explicit value first
/// and falls back to the matching environment variable.
///
/// Resolution:
///
/// 1. Both keys given to [`DefaultCredentialProvider::with_static`]: used as is.
/// 2. Neither key given: [`EnvCredentialProvider`].
/// 3. Only one given: that key, plus the other one from its environment variable
///    (`HMACURL_ACCESS_KEY` or `HMACURL_SECRET_KEY`).
///
/// Empty values count as not given.
#[derive(Debug, Default)]
pub struct DefaultCredentialProvider {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    env: EnvCredentialProvider,
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set explicit keys, either of which may be absent.
    pub fn with_static(
        mut self,
        access_key_id: Option<&str>,
        secret_access_key: Option<&str>,
    ) -> Self {
        self.access_key_id = access_key_id.filter(|v| !v.is_empty()).map(String::from);
        self.secret_access_key = secret_access_key
            .filter(|v| !v.is_empty())
            .map(String::from);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(ak), Some(sk)) => {
                debug!("loaded credential from static keys");
                StaticCredentialProvider::new(ak, sk)
                    .provide_credential(ctx)
                    .await
            }
            (None, None) => {
                let cred = self.env.provide_credential(ctx).await?;
                if cred.is_some() {
                    debug!("loaded credential from environment");
                }
                Ok(cred)
            }
            (ak, sk) => {
                let env_var = |key: &str| ctx.env_var(key).filter(|v| !v.is_empty());
                let ak = ak.clone().or_else(|| env_var(HMACURL_ACCESS_KEY));
                let sk = sk.clone().or_else(|| env_var(HMACURL_SECRET_KEY));

                match (ak, sk) {
                    (Some(ak), Some(sk)) => {
                        debug!("loaded credential from static key and environment");
                        Ok(Some(Credential::new(ak, sk)))
                    }
                    _ => Ok(None),
                }
            }
        }
    }
}
