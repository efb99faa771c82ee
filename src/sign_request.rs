use crate::constants::{
    ALGORITHM, REQUEST_TERMINATOR, VOLC_URI_ENCODE_SET, X_CONTENT_SHA_256, X_DATE,
};
use crate::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use crate::request::SigningRequest;
use crate::time::{format_date, format_iso8601, now, DateTime};
use crate::{Context, Credential, Error, Result, SignRequest};
use async_trait::async_trait;
use http::{header, HeaderValue};
use log::debug;
use percent_encoding::utf8_percent_encode;
use std::fmt::Write;

/// Signed headers are fixed by the protocol, in this exact order.
///
/// The verifier reconstructs the same four-header canonical block, so the
/// order must never be derived from the caller's header map.
const SIGNED_HEADERS: [&str; 4] = ["content-type", "host", X_CONTENT_SHA_256, X_DATE];

/// RequestSigner that implements the Volcengine HMAC-SHA256 signature.
///
/// The scheme follows the same shape as AWS SigV4: a canonical request is
/// hashed into a string to sign, which is signed with a key derived from
/// the secret key through a date/region/service HMAC chain.
#[derive(Debug)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given service and region.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::config_invalid("missing credential to sign request"));
        };
        if cred.access_key_id.is_empty() || cred.secret_access_key.is_empty() {
            return Err(Error::config_invalid(
                "access key id and secret access key must not be empty",
            ));
        }

        let now = self.time.unwrap_or_else(now);
        let x_date = format_iso8601(now);
        let short_date = format_date(now);

        let mut signed_req = SigningRequest::build(req)?;

        // The payload hash is used twice: as a header value and inside the
        // canonical request. An empty body hashes to the SHA-256 of the
        // empty byte sequence.
        let payload_hash = hex_sha256(body);

        let creq = canonical_request_string(&mut signed_req, &payload_hash, &x_date)?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20240101/<region>/<service>/request"
        let scope = format!(
            "{}/{}/{}/{}",
            short_date, self.region, self.service, REQUEST_TERMINATOR
        );
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // HMAC-SHA256
        // 20240101T000000Z
        // 20240101/<region>/<service>/request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{ALGORITHM}")?;
            writeln!(f, "{x_date}")?;
            writeln!(f, "{scope}")?;
            write!(f, "{encoded_req}")?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            &cred.secret_access_key,
            &short_date,
            &self.region,
            &self.service,
        );
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "{ALGORITHM} Credential={}/{}, SignedHeaders={}, Signature={}",
            cred.access_key_id,
            scope,
            SIGNED_HEADERS.join(";"),
            signature
        ))?;
        authorization.set_sensitive(true);

        signed_req
            .headers
            .insert(X_DATE, HeaderValue::from_str(&x_date)?);
        signed_req
            .headers
            .insert(X_CONTENT_SHA_256, HeaderValue::from_str(&payload_hash)?);
        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        // Apply to the request.
        signed_req.apply(req)
    }
}

fn canonical_request_string(
    ctx: &mut SigningRequest,
    payload_hash: &str,
    x_date: &str,
) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", ctx.method)?;
    // Insert path as given; the encoding rule applies to query names and
    // values only.
    writeln!(f, "{}", ctx.path)?;
    // Insert canonical query: sort by raw parameter name first, then
    // percent-encode both name and value.
    ctx.query.sort();
    ctx.query = ctx
        .query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &VOLC_URI_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &VOLC_URI_ENCODE_SET).to_string(),
            )
        })
        .collect();
    writeln!(
        f,
        "{}",
        ctx.query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    )?;

    // Insert canonical headers. Only content-type and host come from the
    // caller; x-content-sha256 and x-date always carry the values computed
    // in this call.
    let content_type = match ctx.headers.get(header::CONTENT_TYPE) {
        Some(v) => v.to_str()?,
        None => "application/json",
    };
    let host = match ctx.headers.get(header::HOST) {
        Some(v) => v.to_str()?,
        None => "",
    };
    writeln!(f, "content-type:{content_type}")?;
    writeln!(f, "host:{host}")?;
    writeln!(f, "{X_CONTENT_SHA_256}:{payload_hash}")?;
    writeln!(f, "{X_DATE}:{x_date}")?;
    writeln!(f)?;

    // Insert signed headers
    writeln!(f, "{}", SIGNED_HEADERS.join(";"))?;
    write!(f, "{payload_hash}")?;

    Ok(f)
}

fn generate_signing_key(secret: &str, short_date: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), short_date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), REQUEST_TERMINATOR.as_bytes())
}
