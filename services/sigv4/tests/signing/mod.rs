mod properties;

use anyhow::Result;
use hmacurl_core::time::{parse_iso8601, DateTime};
use hmacurl_sigv4::{Config, Credential, RequestSigner};
use http::request::Parts;
use log::debug;

pub const ACCESS_KEY: &str = "AKIDEXAMPLE";
pub const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";
pub const HOST_URL: &str = "https://example.us-east-1.amazonaws.com";

/// Initialize test logging and return the fixed signing instant.
pub fn init_signing_test() -> DateTime {
    let _ = env_logger::builder().is_test(true).try_init();

    parse_iso8601("20150830T123600Z").expect("time must be valid")
}

pub fn test_signer(region: &str, scope: &str) -> RequestSigner {
    RequestSigner::new(
        Config::default()
            .with_region(region)
            .with_credential_scope(scope),
    )
}

pub fn test_credential() -> Credential {
    Credential::new(ACCESS_KEY, SECRET_KEY)
}

pub fn build_parts(method: &str, uri: &str, headers: &[(&str, &str)]) -> Result<Parts> {
    let mut builder = http::Request::builder().method(method).uri(uri);
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }

    Ok(builder.body(())?.into_parts().0)
}

/// Sign and return `(signed_headers, signature, parts)`.
pub fn sign_parts(
    signer: &RequestSigner,
    mut parts: Parts,
    payload: &[u8],
    cred: &Credential,
    now: DateTime,
) -> Result<(String, String, Parts)> {
    let authorization = signer.sign_at(&mut parts, payload, cred, now)?;
    debug!("signed request: {parts:?}");

    let signed_headers = field(&authorization, "SignedHeaders=");
    let signature = field(&authorization, "Signature=");
    Ok((signed_headers, signature, parts))
}

fn field(authorization: &str, name: &str) -> String {
    authorization
        .split(", ")
        .find_map(|v| v.strip_prefix(name))
        .expect("authorization field must exist")
        .to_string()
}
