use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait implemented by the credential types that
/// request signers consume.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is still usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by the signer to load a credential
/// from the environment.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load a credential from the current context.
    ///
    /// Returns `Ok(None)` when this provider has nothing to offer, which
    /// lets chains fall through to the next provider.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by the signer to compute and attach the
/// authentication material for a request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential consumed by this signer.
    type Credential: SigningCredential;

    /// Sign the request parts in place.
    ///
    /// ## Body
    ///
    /// The raw body bytes are passed separately from the parts because the
    /// signature scheme hashes the payload; an empty slice is a valid body.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
