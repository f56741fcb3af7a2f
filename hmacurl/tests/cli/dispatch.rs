use super::*;
use hmacurl_core::time::parse_iso8601;
use hmacurl_sigv4::constants::{HMACURL_ACCESS_KEY, HMACURL_SECRET_KEY};
use hmacurl_sigv4::{Config, Credential, RequestSigner};
use http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use http::Method;
use pretty_assertions::assert_eq;
use std::io::Write;

/// Sign the captured request again at its own `x-amz-date` and compare with
/// the authorization it was sent with. This only holds if the sent body is
/// the body that was hashed.
fn assert_resigns(req: http::Request<Bytes>, config: Config) -> Result<String> {
    let (mut parts, body) = req.into_parts();
    let authorization = parts.headers[AUTHORIZATION].to_str()?.to_string();
    let now = parse_iso8601(parts.headers["x-amz-date"].to_str()?)?;

    let expected = RequestSigner::new(config).sign_at(
        &mut parts,
        &body,
        &Credential::new(ACCESS_KEY, SECRET_KEY),
        now,
    )?;
    assert_eq!(authorization, expected);

    Ok(authorization)
}

#[tokio::test]
async fn test_post_data() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "{\"ok\":true}");
    let ctx = test_context(http.clone(), &[]);
    let args = parse_args(&[
        "-X",
        "post",
        "-d",
        "hello=world",
        "-a",
        ACCESS_KEY,
        "-s",
        SECRET_KEY,
        HOST_URL,
    ]);

    let output = run_to_string(&ctx, &args).await?;
    assert_eq!(output, "{\"ok\":true}\n");

    let req = http.take_captured().expect("request must be sent");
    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.uri().to_string(), HOST_URL);
    assert_eq!(&req.body()[..], b"hello=world");
    assert_eq!(req.headers()[CONTENT_TYPE], "application/x-www-form-urlencoded");
    assert_eq!(req.headers()[HOST], "example.us-east-1.amazonaws.com");

    let authorization = assert_resigns(req, Config::default())?;
    assert!(authorization.contains("/us-east-1/example/aws4_request"));
    assert!(authorization.contains("SignedHeaders=content-type;host;x-amz-date,"));
    Ok(())
}

#[tokio::test]
async fn test_put_file_trims_trailing_newline() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"hello=world\n")?;
    let path = file.path().to_string_lossy().to_string();

    let http = MockHttpSend::new(StatusCode::OK, "");
    let ctx = test_context(http.clone(), &[]);
    let args = parse_args(&[
        "-X", "PUT", "-f", &path, "-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL,
    ]);

    run_to_string(&ctx, &args).await?;

    let req = http.take_captured().expect("request must be sent");
    assert_eq!(&req.body()[..], b"hello=world");
    assert_eq!(req.headers()[CONTENT_TYPE], "application/octet-stream");
    assert_resigns(req, Config::default())?;
    Ok(())
}

#[tokio::test]
async fn test_get_ignores_data() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "body");
    let ctx = test_context(http.clone(), &[]);
    let args = parse_args(&["-d", "hello=world", "-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL]);

    run_to_string(&ctx, &args).await?;

    let req = http.take_captured().expect("request must be sent");
    assert_eq!(req.method(), Method::GET);
    assert!(req.body().is_empty());
    assert_resigns(req, Config::default())?;
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_reported() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::FORBIDDEN, "denied");
    let ctx = test_context(http, &[]);
    let args = parse_args(&["-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL]);

    let output = run_to_string(&ctx, &args).await?;
    assert_eq!(output, "Received HTTP response: 403 Forbidden\ndenied\n");
    Ok(())
}

#[tokio::test]
async fn test_credential_from_env() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "");
    let ctx = test_context(
        http.clone(),
        &[(HMACURL_ACCESS_KEY, ACCESS_KEY), (HMACURL_SECRET_KEY, SECRET_KEY)],
    );
    let args = parse_args(&[HOST_URL]);

    run_to_string(&ctx, &args).await?;

    let req = http.take_captured().expect("request must be sent");
    let authorization = assert_resigns(req, Config::default())?;
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    Ok(())
}

#[tokio::test]
async fn test_access_key_flag_with_secret_from_env() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "");
    let ctx = test_context(
        http.clone(),
        &[(HMACURL_ACCESS_KEY, "ENVACCESSKEY"), (HMACURL_SECRET_KEY, SECRET_KEY)],
    );
    let args = parse_args(&["-a", ACCESS_KEY, HOST_URL]);

    run_to_string(&ctx, &args).await?;

    let req = http.take_captured().expect("request must be sent");
    let authorization = assert_resigns(req, Config::default())?;
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    Ok(())
}

#[tokio::test]
async fn test_headers_scope_and_region() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "");
    let ctx = test_context(http.clone(), &[]);
    let args = parse_args(&[
        "-X",
        "POST",
        "-d",
        "{}",
        "-H",
        "Content-Type: application/json",
        "-H",
        "X-Custom:   Value ",
        "-r",
        "eu-west-1",
        "-c",
        "service",
        "-a",
        ACCESS_KEY,
        "-s",
        SECRET_KEY,
        HOST_URL,
    ]);

    run_to_string(&ctx, &args).await?;

    let req = http.take_captured().expect("request must be sent");
    assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(req.headers()["x-custom"], "Value");

    let config = Config::default()
        .with_region("eu-west-1")
        .with_credential_scope("service");
    let authorization = assert_resigns(req, config)?;
    assert!(authorization.contains("/eu-west-1/service/aws4_request"));
    assert!(authorization.contains("SignedHeaders=content-type;host;x-amz-date;x-custom,"));
    Ok(())
}

#[tokio::test]
async fn test_utf8_header_value() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "");
    let ctx = test_context(http.clone(), &[]);
    let args = parse_args(&["-H", "X-Name: café", "-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL]);

    run_to_string(&ctx, &args).await?;

    let req = http.take_captured().expect("request must be sent");
    assert_eq!(req.headers()["x-name"].as_bytes(), "café".as_bytes());

    let authorization = assert_resigns(req, Config::default())?;
    assert!(authorization.contains("SignedHeaders=content-type;host;x-amz-date;x-name,"));
    Ok(())
}

#[tokio::test]
async fn test_skip_host() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, "");
    let ctx = test_context(http.clone(), &[]);
    let args = parse_args(&["--skip-host", "-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL]);

    run_to_string(&ctx, &args).await?;

    let req = http.take_captured().expect("request must be sent");
    assert!(!req.headers().contains_key(HOST));

    let authorization = assert_resigns(req, Config::default().with_skip_host(true))?;
    assert!(authorization.contains("SignedHeaders=content-type;x-amz-date,"));
    Ok(())
}
