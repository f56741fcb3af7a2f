use super::*;
use hmacurl_sigv4::generate_signing_key;
use pretty_assertions::assert_eq;

#[test]
fn test_signing_is_deterministic() -> Result<()> {
    let now = init_signing_test();
    let signer = test_signer("us-east-1", "service");
    let headers = [("x-custom", "Value"), ("content-type", "text/plain")];

    let mut results = Vec::new();
    for _ in 0..3 {
        let parts = build_parts("PUT", &format!("{HOST_URL}/object"), &headers)?;
        let (signed_headers, signature, _) =
            sign_parts(&signer, parts, b"payload", &test_credential(), now)?;
        results.push((signed_headers, signature));
    }

    assert!(results.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}

#[test]
fn test_header_order_independence() -> Result<()> {
    let now = init_signing_test();
    let signer = test_signer("us-east-1", "service");

    let forward = build_parts(
        "GET",
        HOST_URL,
        &[("x-a", "1"), ("x-b", "2"), ("x-c", "3")],
    )?;
    let backward = build_parts(
        "GET",
        HOST_URL,
        &[("x-c", "3"), ("x-b", "2"), ("x-a", "1")],
    )?;

    let (lh, ls, _) = sign_parts(&signer, forward, b"", &test_credential(), now)?;
    let (rh, rs, _) = sign_parts(&signer, backward, b"", &test_credential(), now)?;

    assert_eq!(lh, "host;x-a;x-amz-date;x-b;x-c");
    assert_eq!(lh, rh);
    assert_eq!(ls, rs);
    Ok(())
}

#[test]
fn test_header_case_normalization() -> Result<()> {
    let now = init_signing_test();
    let signer = test_signer("us-east-1", "service");

    let lower = build_parts("GET", HOST_URL, &[("x-custom", "Value")])?;
    let upper = build_parts("GET", HOST_URL, &[("X-CUSTOM", "Value")])?;
    let mixed = build_parts("GET", HOST_URL, &[("X-Custom", "Value")])?;

    let (_, lower, _) = sign_parts(&signer, lower, b"", &test_credential(), now)?;
    let (_, upper, _) = sign_parts(&signer, upper, b"", &test_credential(), now)?;
    let (_, mixed, _) = sign_parts(&signer, mixed, b"", &test_credential(), now)?;

    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    Ok(())
}

#[test]
fn test_header_whitespace_normalization() -> Result<()> {
    let now = init_signing_test();
    let signer = test_signer("us-east-1", "service");

    let compact = build_parts("GET", HOST_URL, &[("x-custom", "a b")])?;
    let spaced = build_parts("GET", HOST_URL, &[("x-custom", "  a    b ")])?;

    let (_, compact, _) = sign_parts(&signer, compact, b"", &test_credential(), now)?;
    let (_, spaced, _) = sign_parts(&signer, spaced, b"", &test_credential(), now)?;

    assert_eq!(compact, spaced);
    Ok(())
}

#[test]
fn test_method_case_normalization() -> Result<()> {
    let now = init_signing_test();
    let signer = test_signer("us-east-1", "service");

    let lower = build_parts("get", HOST_URL, &[])?;
    let (_, signature, parts) = sign_parts(&signer, lower, b"", &test_credential(), now)?;

    assert_eq!(parts.method, http::Method::GET);
    assert_eq!(
        signature,
        "b870c0ce94ada344870ca91c3baa199ffb7a332dca1bb8a4f923fdb208bcd7bc"
    );
    Ok(())
}

#[test]
fn test_key_chain_sensitivity() -> Result<()> {
    let now = init_signing_test();

    let base_key = generate_signing_key(SECRET_KEY, now, "us-east-1", "service");
    let region_key = generate_signing_key(SECRET_KEY, now, "eu-west-1", "service");
    let scope_key = generate_signing_key(SECRET_KEY, now, "us-east-1", "example");
    assert_ne!(base_key, region_key);
    assert_ne!(base_key, scope_key);
    assert_ne!(region_key, scope_key);

    let mut signatures = Vec::new();
    for (region, scope) in [
        ("us-east-1", "service"),
        ("eu-west-1", "service"),
        ("us-east-1", "example"),
    ] {
        let parts = build_parts("GET", HOST_URL, &[])?;
        let (_, signature, _) = sign_parts(
            &test_signer(region, scope),
            parts,
            b"",
            &test_credential(),
            now,
        )?;
        signatures.push(signature);
    }

    assert_eq!(
        signatures[1],
        "efe2480e4e50232586111c4ea819a9e23f0a723fca25bc09bf0397a7f551ca56"
    );
    assert_ne!(signatures[0], signatures[1]);
    assert_ne!(signatures[0], signatures[2]);
    Ok(())
}

#[test]
fn test_signer_shared_across_threads() -> Result<()> {
    let now = init_signing_test();
    let signer = test_signer("us-east-1", "service");
    let signer = &signer;

    let signatures = std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| {
                s.spawn(move || -> Result<String> {
                    let parts = build_parts("GET", HOST_URL, &[])?;
                    let (_, signature, _) =
                        sign_parts(signer, parts, b"", &test_credential(), now)?;
                    Ok(signature)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().expect("thread must not panic"))
            .collect::<Result<Vec<_>>>()
    })?;

    assert!(signatures
        .iter()
        .all(|v| v == "b870c0ce94ada344870ca91c3baa199ffb7a332dca1bb8a4f923fdb208bcd7bc"));
    Ok(())
}
