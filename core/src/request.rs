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

use std::borrow::Cow;
use std::mem;

use http::uri::Authority;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Methods accepted for signing.
pub const SUPPORTED_METHODS: [Method; 3] = [Method::GET, Method::PUT, Method::POST];

/// Parse a method name, case-insensitively, into one of [`SUPPORTED_METHODS`].
pub fn parse_method(method: &str) -> Result<Method> {
    let upper = method.trim().to_ascii_uppercase();
    let parsed = Method::from_bytes(upper.as_bytes())
        .map_err(|e| Error::method_invalid(format!("method {method} is invalid")).with_source(e))?;

    if !SUPPORTED_METHODS.contains(&parsed) {
        return Err(Error::method_invalid(format!(
            "method {method} is invalid"
        )));
    }

    Ok(parsed)
}

/// Parse an absolute `http` or `https` URL.
///
/// Relative URLs and URLs without a host can't be signed: the host is part of
/// the canonical request.
pub fn parse_url(url: &str) -> Result<Uri> {
    let uri: Uri = url
        .parse()
        .map_err(|e| Error::url_invalid(format!("invalid url {url}")).with_source(e))?;

    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        _ => {
            return Err(Error::url_invalid(format!(
                "invalid url {url}: scheme must be http or https"
            )))
        }
    }
    match uri.host() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(Error::url_invalid(format!("invalid url {url}: missing host"))),
    }

    Ok(uri)
}

/// Signing context for request.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method, normalized to uppercase.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority, host plus optional port.
    pub authority: Authority,
    /// HTTP path, as sent on the wire.
    pub path: String,
    /// HTTP query parameters, form-urlencoded decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    ///
    /// The method is validated before anything else. The headers are moved out
    /// of `parts` and must be handed back with [`SigningRequest::apply`].
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let method = parse_method(parts.method.as_str())?;

        let scheme = parts
            .uri
            .scheme()
            .cloned()
            .ok_or_else(|| Error::url_invalid("request without scheme is invalid for signing"))?;
        let authority = parts
            .uri
            .authority()
            .cloned()
            .ok_or_else(|| Error::url_invalid("request without authority is invalid for signing"))?;

        Ok(SigningRequest {
            method,
            scheme,
            authority,
            path: parts.uri.path().to_string(),
            query: parts
                .uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    ///
    /// The URI is never rewritten: the query sent on the wire stays exactly
    /// what the caller built.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        Ok(())
    }

    /// Host without port.
    #[inline]
    pub fn host(&self) -> &str {
        self.authority.host()
    }

    /// Get the path percent decoded, as raw bytes.
    ///
    /// Escapes that don't form valid UTF-8 are kept byte for byte.
    pub fn path_percent_decoded(&self) -> Cow<'_, [u8]> {
        percent_encoding::percent_decode_str(&self.path).into()
    }

    /// Get all values of a header joined with `,`, each value normalized.
    ///
    /// Values must be valid UTF-8.
    pub fn header_value_joined(&self, key: &str) -> Result<String> {
        let mut values = Vec::new();
        for v in self.headers.get_all(key) {
            let v = std::str::from_utf8(v.as_bytes()).map_err(|e| {
                Error::request_invalid(format!("value of header {key} is not valid utf-8"))
                    .with_source(e)
            })?;
            values.push(Self::header_value_normalize(v));
        }

        Ok(values.join(","))
    }

    /// Normalize header value.
    ///
    /// Leading and trailing whitespace is removed and every internal run of
    /// whitespace is collapsed into a single space. A value made only of
    /// whitespace becomes empty.
    pub fn header_value_normalize(v: &str) -> String {
        v.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Get header names as sorted vector.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        let mut h = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }
}
