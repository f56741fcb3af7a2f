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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Algorithm identifier of HMAC-SHA256 based signing.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
/// Prefix prepended to the raw secret before the first key derivation step.
pub const SECRET_KEY_PREFIX: &str = "AWS4";
/// Terminator closing every credential scope for a generic request signature.
pub const SCOPE_TERMINATOR: &str = "aws4_request";
/// Region used when the caller doesn't pick one.
pub const DEFAULT_REGION: &str = "us-east-1";

// Headers injected by the signer.
pub const X_AMZ_DATE: &str = "x-amz-date";

// Env values used by the env credential provider.
pub const HMACURL_ACCESS_KEY: &str = "HMACURL_ACCESS_KEY";
pub const HMACURL_SECRET_KEY: &str = "HMACURL_SECRET_KEY";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static AWS_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query, where `/` is encoded too.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
