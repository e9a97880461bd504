use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use azblob_put_sign::{Credential, DefaultCredentialProvider, PutBlobRequest, RequestSigner};
use blobsig_core::time::{parse_http_date, FixedClock};
use blobsig_core::{
    Context, ErrorKind, ProvideCredential, ProvideCredentialChain, Result, Signer, StaticEnv,
};

const ZERO_KEY: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// Mock provider that tracks how many times it was called
#[derive(Debug)]
struct CountingProvider {
    credential: Option<Credential>,
    calls: Arc<AtomicUsize>,
}

impl CountingProvider {
    fn new(credential: Option<&str>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Self {
            credential: credential.map(Credential::with_shared_key),
            calls: calls.clone(),
        };
        (provider, calls)
    }
}

impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.credential.clone())
    }
}

#[test]
fn test_chain_stops_at_first_success() {
    let (p1, c1) = CountingProvider::new(None);
    let (p2, c2) = CountingProvider::new(Some(ZERO_KEY));
    let (p3, c3) = CountingProvider::new(Some("c2Vjb25k"));

    let chain = ProvideCredentialChain::new().push(p1).push(p2).push(p3);
    let cred = chain.provide_credential(&Context::new()).unwrap().unwrap();

    assert_eq!(cred.account_key, ZERO_KEY);
    assert_eq!(c1.load(Ordering::SeqCst), 1);
    assert_eq!(c2.load(Ordering::SeqCst), 1);
    assert_eq!(c3.load(Ordering::SeqCst), 0);
}

#[test]
fn test_signer_caches_credential() {
    let (provider, calls) = CountingProvider::new(Some(ZERO_KEY));
    let ctx = Context::new().with_clock(FixedClock(
        parse_http_date("Wed, 01 Jan 2025 12:00:00 GMT").unwrap(),
    ));
    let signer = Signer::new(ctx, provider, RequestSigner::new());

    let req = PutBlobRequest::new("acct", "c", "b.txt", "10");
    let first = signer.sign(&req).unwrap();
    let second = signer.sign(&req).unwrap();

    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_default_provider_prefers_pushed_provider() {
    let (provider, calls) = CountingProvider::new(Some("ZnJvbnQ="));
    let ctx = Context::new().with_env(StaticEnv::from_pairs([("AZBLOB_ACCOUNT_KEY", ZERO_KEY)]));

    let cred = DefaultCredentialProvider::new()
        .push_front(provider)
        .provide_credential(&ctx)
        .unwrap()
        .unwrap();

    assert_eq!(cred.account_key, "ZnJvbnQ=");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_default_provider_reads_connection_string() {
    let ctx = Context::new().with_env(StaticEnv::from_pairs([(
        "AZURE_STORAGE_CONNECTION_STRING",
        "DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=Y29ubg==;EndpointSuffix=core.windows.net",
    )]));

    let cred = DefaultCredentialProvider::new()
        .provide_credential(&ctx)
        .unwrap()
        .unwrap();

    assert_eq!(cred.account_key, "Y29ubg==");
}

#[test]
fn test_missing_credential_fails_signing() {
    let signer = Signer::new(
        Context::new(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    let err = signer
        .sign(&PutBlobRequest::new("acct", "c", "b.txt", "10"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
}
