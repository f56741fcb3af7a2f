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

//! Command line tool that signs an HTTP request with AWS Signature Version 4
//! and either sends it or prints the matching curl command.
//!
//! The binary is a thin wrapper around [`run`]: everything it touches outside
//! the process goes through the [`Context`] built by [`build_context`], so the
//! whole flow can be driven from tests with in-memory collaborators.

#![warn(missing_docs)]

mod cli;
pub use cli::Args;

mod curl;
pub use curl::curl_command;

pub mod request;

use hmacurl_core::{
    parse_method, parse_url, Context, Error, ErrorKind, OsEnv, ProvideCredential, Result,
};
use hmacurl_file_read_tokio::TokioFileRead;
use hmacurl_http_send_reqwest::ReqwestHttpSend;
use hmacurl_sigv4::{Config, DefaultCredentialProvider, RequestSigner};
use log::debug;
use std::io::Write;

/// Build the production context: tokio file reads, reqwest dispatch and the
/// process environment.
pub fn build_context(args: &Args) -> Result<Context> {
    let http = match args.proxy.as_deref().filter(|v| !v.is_empty()) {
        Some(proxy) => ReqwestHttpSend::with_proxy(proxy)?,
        None => ReqwestHttpSend::default(),
    };

    Ok(Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(http)
        .with_env(OsEnv))
}

/// Signer config derived from the command line.
pub fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default()
        .with_region(args.region.clone())
        .with_skip_host(args.skip_host);
    if let Some(scope) = args.credential_scope.as_deref() {
        config = config.with_credential_scope(scope);
    }
    config
}

/// Sign the request described by `args`, then send it or print it as curl.
///
/// Output meant for the user (the curl command, or the response status and
/// body) is written to `out`.
pub async fn run(ctx: &Context, args: &Args, out: &mut impl Write) -> Result<()> {
    let method = parse_method(&args.request)?;
    let uri = parse_url(&args.url)?;

    let payload =
        request::load_payload(ctx, &method, args.data.as_deref(), args.file.as_deref()).await?;
    let headers = request::parse_headers(&args.headers)?;
    let mut parts = request::build_parts(method, uri, headers)?;

    let cred = DefaultCredentialProvider::new()
        .with_static(args.access_key.as_deref(), args.secret_key.as_deref())
        .provide_credential(ctx)
        .await?
        .ok_or_else(|| {
            Error::credential_invalid(
                "access key and secret key are required, use -a/-s or HMACURL_*_KEY",
            )
        })?;

    let signer = RequestSigner::new(config_from_args(args));
    signer.sign(&mut parts, &payload, &cred)?;

    if args.curl_only {
        writeln!(out, "{}", curl_command(&parts, &payload))?;
        return Ok(());
    }

    debug!("sending {} {}", parts.method, parts.uri);
    let resp = ctx.http_send(http::Request::from_parts(parts, payload)).await?;

    let status = resp.status();
    if status.as_u16() >= 300 {
        writeln!(out, "Received HTTP response: {status}")?;
    }
    out.write_all(resp.body())?;
    writeln!(out)?;

    Ok(())
}

/// Process exit code for an error.
///
/// - `1`: invalid method, credential, request or config
/// - `2`: invalid url
/// - `3`: payload file couldn't be read
/// - `4`: the request couldn't be sent
pub fn exit_code(err: &Error) -> i32 {
    match err.kind() {
        ErrorKind::MethodInvalid
        | ErrorKind::CredentialInvalid
        | ErrorKind::RequestInvalid
        | ErrorKind::ConfigInvalid => 1,
        ErrorKind::UrlInvalid => 2,
        ErrorKind::Io => 3,
        ErrorKind::Unexpected => 4,
    }
}
