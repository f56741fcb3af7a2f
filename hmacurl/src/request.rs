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

//! Assemble the request to sign from command line input.
//!
//! Every header that takes part in signing must be final before the request
//! reaches the signer, so defaults are filled in here.

use bytes::Bytes;
use hmacurl_core::{Context, Error, Result};
use http::header::{HeaderName, CONTENT_TYPE};
use http::request::Parts;
use http::{HeaderMap, HeaderValue, Method, Uri};
use log::warn;

/// Content type used when the caller didn't set one.
pub fn default_content_type(method: &Method) -> &'static str {
    if method == Method::POST {
        "application/x-www-form-urlencoded"
    } else {
        "application/octet-stream"
    }
}

/// Only POST and PUT carry a body.
pub fn method_has_body(method: &Method) -> bool {
    method == Method::POST || method == Method::PUT
}

/// Parse `Name: value` header arguments.
///
/// The name is split at the first `:` and the value is trimmed. Names are
/// case-insensitive; when one is given twice, the last value wins.
pub fn parse_headers(headers: &[String]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for header in headers {
        let (name, value) = header.split_once(':').ok_or_else(|| {
            Error::request_invalid(format!("header {header:?} must be in 'Name: value' form"))
        })?;

        let name = HeaderName::from_bytes(name.trim().as_bytes())?;
        let value = HeaderValue::from_str(value.trim())?;
        map.insert(name, value);
    }

    Ok(map)
}

/// Load the payload to hash and send.
///
/// Literal data wins over a file. A file loses exactly one trailing newline,
/// before the bytes are ever hashed, so the signed and the sent payload are
/// the same bytes.
pub async fn load_payload(
    ctx: &Context,
    method: &Method,
    data: Option<&str>,
    file: Option<&str>,
) -> Result<Bytes> {
    let data = data.filter(|v| !v.is_empty());
    let file = file.filter(|v| !v.is_empty());

    if !method_has_body(method) {
        if data.is_some() || file.is_some() {
            warn!("{method} request doesn't carry a body, payload ignored");
        }
        return Ok(Bytes::new());
    }

    if let Some(data) = data {
        return Ok(Bytes::copy_from_slice(data.as_bytes()));
    }

    if let Some(path) = file {
        let mut content = ctx.file_read(path).await?;
        if content.last() == Some(&b'\n') {
            content.pop();
        }
        return Ok(Bytes::from(content));
    }

    Ok(Bytes::new())
}

/// Build the request parts handed to the signer.
pub fn build_parts(method: Method, uri: Uri, mut headers: HeaderMap) -> Result<Parts> {
    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(default_content_type(&method)),
        );
    }

    let mut parts = http::Request::builder()
        .method(method)
        .uri(uri)
        .body(())?
        .into_parts()
        .0;
    parts.headers = headers;

    Ok(parts)
}
