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

//! Canonical request construction.
//!
//! Canonical request:
//!
//! ```text
//! <METHOD>\n
//! <canonical uri>\n
//! <canonical query>\n
//! <name>:<value>\n ... one line per header
//! \n
//! <signed headers>\n
//! <hex sha256 of payload>
//! ```

use std::fmt::Write;

use hmacurl_core::hash::hex_sha256;
use hmacurl_core::{Result, SigningRequest};
use percent_encoding::{percent_encode, utf8_percent_encode};

use crate::constants::{AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET};

/// Canonical form of one request, built fresh for every signing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// The canonical request string that gets hashed into the string to sign.
    pub canonical_string: String,
    /// Sorted, lowercased header names joined with `;`.
    pub signed_headers: String,
}

/// Build the canonical request for `req` carrying `payload`.
///
/// Every header present in `req.headers` is signed.
pub fn canonical_request(req: &SigningRequest, payload: &[u8]) -> Result<CanonicalRequest> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", req.method)?;
    writeln!(f, "{}", canonical_uri(req))?;
    writeln!(f, "{}", canonical_query(req))?;

    let signed_headers = req.header_name_to_vec_sorted();
    for name in signed_headers.iter() {
        writeln!(f, "{}:{}", name, req.header_value_joined(name)?)?;
    }
    writeln!(f)?;

    let signed_headers = signed_headers.join(";");
    writeln!(f, "{}", signed_headers)?;
    write!(f, "{}", hex_sha256(payload))?;

    Ok(CanonicalRequest {
        canonical_string: f,
        signed_headers,
    })
}

/// Path percent decoded and re-encoded with the URI encode set, `/` if empty.
pub fn canonical_uri(req: &SigningRequest) -> String {
    let path = req.path_percent_decoded();
    if path.is_empty() {
        return "/".to_string();
    }

    percent_encode(&path, &AWS_URI_ENCODE_SET).to_string()
}

/// Query pairs encoded, sorted by key then value, and joined with `&`.
pub fn canonical_query(req: &SigningRequest) -> String {
    let mut query = req
        .query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    query.sort();

    query
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}
