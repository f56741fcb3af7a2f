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

use crate::canonical_request::canonical_request;
use crate::constants::{ALGORITHM, SCOPE_TERMINATOR, SECRET_KEY_PREFIX, X_AMZ_DATE};
use crate::{Config, Credential};
use hmacurl_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use hmacurl_core::time::{format_date, format_iso8601, now, DateTime};
use hmacurl_core::{Error, Result, SigningCredential, SigningRequest};
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer holds no mutable state; one instance can sign any number of
/// requests, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct RequestSigner {
    config: Config,
}

impl RequestSigner {
    /// Create a new signer from config.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Sign the request at the current time.
    ///
    /// See [`RequestSigner::sign_at`].
    pub fn sign(&self, req: &mut Parts, payload: &[u8], cred: &Credential) -> Result<String> {
        self.sign_at(req, payload, cred, now())
    }

    /// Sign the request as of `now`.
    ///
    /// `x-amz-date` is set to `now` and, unless `skip_host` is configured or
    /// the caller already set one, `host` is set to the URL authority. Every
    /// header on the request is signed, so all headers must be final before
    /// calling this. `payload` must be exactly the bytes that will be sent.
    ///
    /// On success the `Authorization` header is inserted and its value is
    /// returned. On failure no `Authorization` header is added.
    pub fn sign_at(
        &self,
        req: &mut Parts,
        payload: &[u8],
        cred: &Credential,
        now: DateTime,
    ) -> Result<String> {
        let mut signed_req = SigningRequest::build(req)?;
        let result = self.sign_signing_request(&mut signed_req, payload, cred, now);

        // Always hand the headers back, even if signing failed.
        signed_req.apply(req)?;
        result
    }

    fn sign_signing_request(
        &self,
        signed_req: &mut SigningRequest,
        payload: &[u8],
        cred: &Credential,
        now: DateTime,
    ) -> Result<String> {
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "access key and secret key must not be empty",
            ));
        }

        let region = self.config.region.as_str();
        let scope = self.config.scope_for(signed_req.host());

        // canonicalize context
        canonicalize_header(signed_req, now, self.config.skip_host)?;

        // build canonical request and string to sign.
        let creq = canonical_request(signed_req, payload)?;
        debug!("calculated canonical request: {}", creq.canonical_string);
        let encoded_req = hex_sha256(creq.canonical_string.as_bytes());

        debug!(
            "calculated scope: {}",
            credential_scope(now, region, &scope)
        );

        let string_to_sign = string_to_sign(now, &encoded_req, region, &scope);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(&cred.secret_access_key, now, region, &scope);
        let signature = calculate_signature(&signing_key, &string_to_sign);

        let authorization = format_authorization(
            &cred.access_key_id,
            now,
            region,
            &scope,
            &creq.signed_headers,
            &signature,
        );
        debug!("calculated authorization: {authorization}");

        let mut value = HeaderValue::from_str(&authorization)?;
        value.set_sensitive(true);
        signed_req.headers.insert(header::AUTHORIZATION, value);

        Ok(authorization)
    }
}

fn canonicalize_header(ctx: &mut SigningRequest, now: DateTime, skip_host: bool) -> Result<()> {
    // Insert HOST header if not present.
    if !skip_host && ctx.headers.get(header::HOST).is_none() {
        let host = HeaderValue::from_str(ctx.authority.as_str())?;
        ctx.headers.insert(header::HOST, host);
    }

    // Always overwrite DATE header: it must carry the same instant as the signature.
    ctx.headers.insert(X_AMZ_DATE, HeaderValue::try_from(format_iso8601(now))?);

    // A previous signature must never be part of the canonical request.
    ctx.headers.remove(header::AUTHORIZATION);

    Ok(())
}

/// Scope: `20220313/<region>/<service>/aws4_request`
pub fn credential_scope(now: DateTime, region: &str, scope: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        format_date(now),
        region,
        scope,
        SCOPE_TERMINATOR
    )
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(
    now: DateTime,
    hashed_canonical_request: &str,
    region: &str,
    scope: &str,
) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        format_iso8601(now),
        credential_scope(now, region, scope),
        hashed_canonical_request
    )
}

/// Derive the signing key scoped to one date, region and service.
///
/// Each step's output is the key of the next step.
pub fn generate_signing_key(secret: &str, time: DateTime, region: &str, scope: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("{SECRET_KEY_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), scope.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), SCOPE_TERMINATOR.as_bytes())
}

/// Lowercase hex HMAC-SHA256 of the string to sign under the signing key.
pub fn calculate_signature(signing_key: &[u8], string_to_sign: &str) -> String {
    hex_hmac_sha256(signing_key, string_to_sign.as_bytes())
}

/// `AWS4-HMAC-SHA256 Credential=<ak>/<scope>, SignedHeaders=<list>, Signature=<hex>`
pub fn format_authorization(
    access_key_id: &str,
    now: DateTime,
    region: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM,
        access_key_id,
        credential_scope(now, region, scope),
        signed_headers,
        signature
    )
}
