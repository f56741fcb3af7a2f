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

//! AWS Signature Version 4 signing for arbitrary HTTP requests.
//!
//! The pipeline is a chain of pure functions:
//!
//! ```text
//! canonical_request -> hex_sha256 -> string_to_sign
//!                                        |
//! generate_signing_key ------------> calculate_signature -> format_authorization
//! ```
//!
//! [`RequestSigner`] runs the whole chain over an `http::request::Parts`,
//! capturing the signing instant once.
//!
//! ## Example
//!
//! ```
//! use hmacurl_sigv4::{Config, Credential, RequestSigner};
//!
//! # fn main() -> hmacurl_core::Result<()> {
//! let signer = RequestSigner::new(Config::default().with_region("us-east-1"));
//! let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
//!
//! let mut parts = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.us-east-1.amazonaws.com/")
//!     .body(())?
//!     .into_parts()
//!     .0;
//!
//! let authorization = signer.sign(&mut parts, b"", &cred)?;
//! assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
//! # Ok(())
//! # }
//! ```

mod canonical_request;
pub use canonical_request::{canonical_query, canonical_request, canonical_uri, CanonicalRequest};

mod config;
pub use config::Config;

pub mod constants;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{
    calculate_signature, credential_scope, format_authorization, generate_signing_key,
    string_to_sign, RequestSigner,
};
