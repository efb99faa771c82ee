use std::collections::HashMap;

use volcsign::{
    Context, DefaultCredentialProvider, ErrorKind, RequestSigner, Result, Signer, StaticEnv,
};

fn submit_request() -> http::Request<Vec<u8>> {
    http::Request::builder()
        .method(http::Method::POST)
        .uri("https://visual.volcengineapi.com/?Action=CVSync2AsyncSubmitTask&Version=2022-08-31")
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::HOST, "visual.volcengineapi.com")
        .body(b"{}".to_vec())
        .expect("request must be valid")
}

#[tokio::test]
async fn test_sign_with_env_credentials() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            ("VOLC_ACCESSKEY".to_string(), "env_access_key".to_string()),
            ("VOLC_SECRETKEY".to_string(), "env_secret_key".to_string()),
        ]),
    });

    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new("cv", "cn-north-1"),
    );

    let (mut parts, body) = submit_request().into_parts();
    signer.sign(&mut parts, &body).await?;

    let authorization = parts.headers["authorization"]
        .to_str()
        .expect("must be valid");
    assert!(authorization.starts_with("HMAC-SHA256 Credential=env_access_key/"));

    Ok(())
}

#[tokio::test]
async fn test_sign_without_credentials_fails() {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(StaticEnv::default());

    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new("cv", "cn-north-1"),
    );

    let (mut parts, body) = submit_request().into_parts();
    let err = signer
        .sign(&mut parts, &body)
        .await
        .expect_err("signing must fail without credentials");
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
