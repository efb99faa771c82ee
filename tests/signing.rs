use http::header::AUTHORIZATION;
use log::debug;
use volcsign::hash::hex_sha256;
use volcsign::{Context, RequestSigner, Result, Signer, StaticCredentialProvider};

fn init_signer() -> Signer<volcsign::Credential> {
    let _ = env_logger::builder().is_test(true).try_init();

    let loader = StaticCredentialProvider::new("test_access_key", "test_secret_key");
    let ctx = Context::new();
    Signer::new(ctx, loader, RequestSigner::new("cv", "cn-north-1"))
}

#[tokio::test]
async fn test_sign_submit_task() -> Result<()> {
    let signer = init_signer();

    let body = br#"{"req_key":"jimeng_t2i_v30","prompt":"a red bicycle"}"#;
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("https://visual.volcengineapi.com/?Action=CVSync2AsyncSubmitTask&Version=2022-08-31")
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::HOST, "visual.volcengineapi.com")
        .body(body.to_vec())?;

    let (mut parts, body) = req.into_parts();
    signer.sign(&mut parts, &body).await?;

    debug!("signed request headers: {:?}", parts.headers);

    // X-Date carries the compact ISO8601 timestamp.
    let x_date = parts.headers["x-date"].to_str().expect("must be valid");
    assert_eq!(x_date.len(), 16);
    assert_eq!(&x_date[8..9], "T");
    assert!(x_date.ends_with('Z'));

    // X-Content-Sha256 is the hex SHA-256 of the raw body bytes.
    assert_eq!(
        parts.headers["x-content-sha256"].to_str().expect("must be valid"),
        hex_sha256(&body)
    );

    let authorization = parts.headers[AUTHORIZATION].to_str().expect("must be valid");
    assert!(authorization.starts_with("HMAC-SHA256 Credential=test_access_key/"));
    assert!(authorization.contains("/cn-north-1/cv/request"));
    assert!(authorization.contains("SignedHeaders=content-type;host;x-content-sha256;x-date"));
    assert!(authorization.contains("Signature="));

    Ok(())
}

#[tokio::test]
async fn test_sign_get_result_reuses_credential() -> Result<()> {
    let signer = init_signer();

    for _ in 0..2 {
        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri("https://visual.volcengineapi.com/?Action=CVSync2AsyncGetResult&Version=2022-08-31")
            .header(http::header::CONTENT_TYPE, "application/json")
            .header(http::header::HOST, "visual.volcengineapi.com")
            .body(br#"{"task_id":"123"}"#.to_vec())?;

        let (mut parts, body) = req.into_parts();
        signer.sign(&mut parts, &body).await?;

        assert!(parts.headers.contains_key(AUTHORIZATION));
    }

    Ok(())
}

#[tokio::test]
async fn test_sign_is_safe_to_share_across_tasks() -> Result<()> {
    let signer = init_signer();

    let mut handles = Vec::new();
    for i in 0..8 {
        let signer = signer.clone();
        handles.push(tokio::spawn(async move {
            let req = http::Request::builder()
                .method(http::Method::POST)
                .uri("https://visual.volcengineapi.com/?Action=CVSync2AsyncSubmitTask&Version=2022-08-31")
                .header(http::header::CONTENT_TYPE, "application/json")
                .header(http::header::HOST, "visual.volcengineapi.com")
                .body(format!(r#"{{"seed":{i}}}"#).into_bytes())
                .expect("request must be valid");

            let (mut parts, body) = req.into_parts();
            signer.sign(&mut parts, &body).await.expect("sign must succeed");
            parts.headers.contains_key(AUTHORIZATION)
        }));
    }

    for handle in handles {
        assert!(handle.await.expect("task must not panic"));
    }

    Ok(())
}
