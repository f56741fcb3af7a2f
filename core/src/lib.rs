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

//! Core components for signing HTTP requests.
//!
//! This crate provides the foundational types shared by the hmacurl
//! workspace: the error type, hashing and time helpers, the [`Context`] that
//! carries I/O collaborators, and [`SigningRequest`], the view of an
//! `http::request::Parts` that signers canonicalize.
//!
//! ## Overview
//!
//! - **Context**: holds implementations for file reading, HTTP sending and
//!   environment access. Signing never uses it; the outer layers do.
//! - **Traits**: [`ProvideCredential`] loads credentials, [`SigningCredential`]
//!   validates them, [`FileRead`], [`HttpSend`] and [`Env`] abstract I/O.
//! - **Utilities**: [`hash`], [`time`] and [`utils`].
//!
//! ## Example
//!
//! ```
//! use hmacurl_core::{parse_method, parse_url, SigningRequest};
//!
//! # fn main() -> hmacurl_core::Result<()> {
//! let method = parse_method("get")?;
//! let uri = parse_url("https://example.com/hello?b=2&a=1")?;
//!
//! let mut parts = http::Request::builder()
//!     .method(method)
//!     .uri(uri)
//!     .body(())?
//!     .into_parts()
//!     .0;
//!
//! let req = SigningRequest::build(&mut parts)?;
//! assert_eq!(req.host(), "example.com");
//! req.apply(&mut parts)?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::FileRead;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopFileRead;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::{ProvideCredential, SigningCredential};
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::{parse_method, parse_url, SigningRequest, SUPPORTED_METHODS};
