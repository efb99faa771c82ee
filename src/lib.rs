//! Signing Volcengine API requests without effort.
//!
//! This crate computes the Volcengine HMAC-SHA256 request signature: given
//! an outbound HTTP request and a credential, it attaches the `X-Date`,
//! `X-Content-Sha256`, and `Authorization` headers the API verifies before
//! accepting the request. Sending the request stays with the caller; the
//! crate never performs network I/O.
//!
//! ## Example
//!
//! ```no_run
//! use anyhow::Result;
//! use volcsign::{Context, DefaultCredentialProvider, RequestSigner, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new();
//!     let loader = DefaultCredentialProvider::new();
//!     let builder = RequestSigner::new("cv", "cn-north-1");
//!
//!     let signer = Signer::new(ctx, loader, builder);
//!
//!     let body = br#"{"req_key":"jimeng_t2i_v30"}"#;
//!     let req = http::Request::builder()
//!         .method(http::Method::POST)
//!         .uri("https://visual.volcengineapi.com/?Action=CVSync2AsyncSubmitTask&Version=2022-08-31")
//!         .header(http::header::CONTENT_TYPE, "application/json")
//!         .header(http::header::HOST, "visual.volcengineapi.com")
//!         .body(body.to_vec())?;
//!
//!     let (mut parts, body) = req.into_parts();
//!     signer.sign(&mut parts, &body).await?;
//!     let req = http::Request::from_parts(parts, body);
//!
//!     // Hand `req` to your HTTP client of choice.
//!     println!("signed request: {:?}", req);
//!     Ok(())
//! }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};

mod request;
pub use request::SigningRequest;

mod signer;
pub use signer::Signer;

mod constants;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, ProvideCredentialChain,
    StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;
