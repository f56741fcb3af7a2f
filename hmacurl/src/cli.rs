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

use clap::Parser;
use hmacurl_sigv4::constants::DEFAULT_REGION;

/// Sign an HTTP request with AWS Signature Version 4 and send it.
#[derive(Debug, Clone, Parser)]
#[command(name = "hmacurl")]
#[command(bin_name = "hmacurl")]
#[command(version, about = "Sign HTTP requests with AWS Signature Version 4", long_about = None)]
pub struct Args {
    /// The http method to use.
    #[arg(short = 'X', long = "request", default_value = "GET", value_name = "GET|PUT|POST")]
    pub request: String,

    /// Body to upload with POST or PUT. Takes precedence over --file.
    #[arg(short, long, value_name = "'my string body'")]
    pub data: Option<String>,

    /// File to upload as the body with POST or PUT. One trailing newline is trimmed.
    #[arg(short, long, value_name = "./file.txt")]
    pub file: Option<String>,

    /// Extra header to include, may be repeated.
    #[arg(short = 'H', long = "header", value_name = "'Content-Type: application/json'")]
    pub headers: Vec<String>,

    /// Only print a curl command, don't send the request.
    #[arg(long)]
    pub curl_only: bool,

    /// Access key used for signing. Falls back to HMACURL_ACCESS_KEY.
    #[arg(short, long)]
    pub access_key: Option<String>,

    /// Secret key used for signing. Falls back to HMACURL_SECRET_KEY.
    #[arg(short, long)]
    pub secret_key: Option<String>,

    /// Credential scope (aka service name). Defaults to the short host name.
    #[arg(short, long)]
    pub credential_scope: Option<String>,

    /// Region placed in the credential scope.
    #[arg(short, long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Do not sign the host header.
    #[arg(long)]
    pub skip_host: bool,

    /// Proxy server to use instead of the one from the environment.
    #[arg(short, long)]
    pub proxy: Option<String>,

    /// Log the canonical request, string to sign and authorization header.
    #[arg(long)]
    pub debug: bool,

    /// Target url.
    pub url: String,
}
