use azblob_put_sign::{
    generate_signature, string_to_sign, Credential, PutBlobRequest, RequestSigner,
    StaticCredentialProvider,
};
use blobsig_core::time::{format_http_date, parse_http_date, FixedClock};
use blobsig_core::{Context, ErrorKind, Signer};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use test_case::test_case;

const ZERO_KEY: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";
const AZURITE_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
const REQUEST_TIME: &str = "Wed, 01 Jan 2025 12:00:00 GMT";

fn signer_at(key: &str, request_time: &str) -> Signer<RequestSigner> {
    let ctx = Context::new().with_clock(FixedClock(parse_http_date(request_time).unwrap()));
    Signer::new(
        ctx,
        StaticCredentialProvider::new_shared_key(key),
        RequestSigner::new(),
    )
}

#[test_case(ZERO_KEY, "10", "WNYJ2dD7z7F9sHHlvNL2LACAYb5I8FGHqZwT7J59ukI="; "zero key")]
#[test_case(ZERO_KEY, "11", "qA8v4jkWx0R+0+VaFflLFbVXrK6fV8k5ORrTlVKLXqY="; "content length is signed")]
#[test_case(ZERO_KEY, "0", "QaUYI17yfGyVDXQYdbIa65jBZsQEK3UUuDRJnUMa2yI="; "zero content length")]
#[test_case(AZURITE_KEY, "10", "rC6UEblazFFYfs7vWcTPc4orDg0i5eoUYaqxGNx26DU="; "azurite key")]
fn test_signature(key: &str, content_length: &str, expected: &str) {
    let req = PutBlobRequest::new("acct", "c", "b.txt", content_length);

    let sig = signer_at(key, REQUEST_TIME).sign(&req).unwrap();

    assert_eq!(sig.signature, expected);
    assert_eq!(sig.to_string(), format!("{expected};{REQUEST_TIME}"));
}

#[test]
fn test_content_length_only_changes_its_line() {
    let ten = PutBlobRequest::new("acct", "c", "b.txt", "10");
    let eleven = PutBlobRequest::new("acct", "c", "b.txt", "11");
    let ten = string_to_sign(&ten, REQUEST_TIME).unwrap();
    let eleven = string_to_sign(&eleven, REQUEST_TIME).unwrap();

    let ten: Vec<&str> = ten.split('\n').collect();
    let eleven: Vec<&str> = eleven.split('\n').collect();
    assert_eq!(ten.len(), eleven.len());

    let changed: Vec<usize> = (0..ten.len()).filter(|&i| ten[i] != eleven[i]).collect();
    // Content-Length is the fourth field.
    assert_eq!(changed, vec![3]);
    assert_eq!(ten[3], "10");
    assert_eq!(eleven[3], "11");
}

#[test]
fn test_signature_is_bound_to_request_time() {
    let req = PutBlobRequest::new("acct", "c", "b.txt", "10");

    let sig = signer_at(ZERO_KEY, "Tue, 05 Mar 2024 07:08:09 GMT")
        .sign(&req)
        .unwrap();

    assert_eq!(sig.request_time, "Tue, 05 Mar 2024 07:08:09 GMT");
    assert_eq!(sig.signature, "J93ceORzVSE7oH68o9ZY6nPnzp630CRheB7QThAJ/jc=");
}

#[test]
fn test_signature_is_deterministic() {
    let req = PutBlobRequest::new("acct", "c", "b.txt", "10");
    let cred = Credential::with_shared_key(AZURITE_KEY);
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();

    let first = generate_signature(&req, &cred, now).unwrap();
    let second = generate_signature(&req, &cred, now).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_request_time_is_the_signed_date() {
    let req = PutBlobRequest::new("acct", "c", "b.txt", "10");
    let cred = Credential::with_shared_key(ZERO_KEY);
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();

    let sig = generate_signature(&req, &cred, now).unwrap();
    let signed = string_to_sign(&req, &sig.request_time).unwrap();

    assert_eq!(sig.request_time, format_http_date(now));
    assert!(signed.contains("\nx-ms-date:Tue, 05 Mar 2024 07:08:09 GMT\n"));
}

#[test]
fn test_output_format() {
    let req = PutBlobRequest::new("acct", "c", "b.txt", "10");
    let out = signer_at(AZURITE_KEY, REQUEST_TIME)
        .sign(&req)
        .unwrap()
        .to_string();

    let (signature, request_time) = out.split_once(';').unwrap();
    // HMAC-SHA256 digest is 32 bytes, 44 chars in padded base64.
    assert_eq!(signature.len(), 44);
    assert!(signature.ends_with('='));
    assert!(!request_time.contains(';'));
    assert!(parse_http_date(request_time).is_ok());
}

#[test]
fn test_invalid_key_is_reported() {
    let req = PutBlobRequest::new("acct", "c", "b.txt", "10");

    let err = signer_at("%%%", REQUEST_TIME).sign(&req).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidKeyEncoding);
}
