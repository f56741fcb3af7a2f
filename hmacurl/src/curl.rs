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

//! Render a signed request as a curl command line.

use http::request::Parts;

/// Quote `v` for a POSIX shell.
fn quote(v: &str) -> String {
    format!("'{}'", v.replace('\'', r"'\''"))
}

/// Build the curl command that replays the signed request.
///
/// Headers are emitted sorted by name so the output is stable. Header values
/// that are not valid UTF-8 are rendered lossily.
pub fn curl_command(parts: &Parts, payload: &[u8]) -> String {
    let mut headers: Vec<(&str, String)> = parts
        .headers
        .iter()
        .map(|(k, v)| (k.as_str(), String::from_utf8_lossy(v.as_bytes()).to_string()))
        .collect();
    headers.sort();

    let mut cmd = format!("curl -X{}", parts.method);
    for (k, v) in headers {
        cmd.push_str(" -H ");
        cmd.push_str(&quote(&format!("{k}:{v}")));
    }
    cmd.push(' ');
    cmd.push_str(&quote(&parts.uri.to_string()));
    cmd.push_str(" -v");

    if !payload.is_empty() {
        cmd.push_str(" -d");
        cmd.push_str(&quote(&String::from_utf8_lossy(payload)));
    }

    cmd
}
