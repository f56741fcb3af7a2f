use super::*;
use hmacurl::exit_code;
use hmacurl_core::ErrorKind;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(&["-X", "DELETE", "-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL], ErrorKind::MethodInvalid, 1; "invalid method")]
#[test_case(&["-a", ACCESS_KEY, "-s", SECRET_KEY, "ftp://example.com/"], ErrorKind::UrlInvalid, 2; "unsupported scheme")]
#[test_case(&["-a", ACCESS_KEY, "-s", SECRET_KEY, "not a url"], ErrorKind::UrlInvalid, 2; "unparsable url")]
#[test_case(&["-X", "POST", "-f", "/not/here/payload.txt", "-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL], ErrorKind::Io, 3; "missing payload file")]
#[test_case(&[HOST_URL], ErrorKind::CredentialInvalid, 1; "missing credential")]
#[test_case(&["-a", ACCESS_KEY, "-s", "", HOST_URL], ErrorKind::CredentialInvalid, 1; "empty secret")]
#[test_case(&["-H", "no colon", "-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL], ErrorKind::RequestInvalid, 1; "malformed header")]
#[tokio::test]
async fn test_input_errors(args: &[&str], kind: ErrorKind, code: i32) {
    let http = MockHttpSend::new(StatusCode::OK, "");
    let ctx = test_context(http.clone(), &[]);
    let args = parse_args(args);

    let err = run_to_string(&ctx, &args).await.unwrap_err();

    assert_eq!(err.kind(), kind);
    assert_eq!(exit_code(&err), code);
    assert!(http.take_captured().is_none());
}

#[tokio::test]
async fn test_transport_error() {
    let ctx = test_context(MockHttpSend::failing(), &[]);
    let args = parse_args(&["-a", ACCESS_KEY, "-s", SECRET_KEY, HOST_URL]);

    let err = run_to_string(&ctx, &args).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(exit_code(&err), 4);
}
