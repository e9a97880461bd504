use std::env;

use anyhow::Result;
use azblob_put_sign::{Config, PutBlobRequest, RequestSigner, StaticCredentialProvider};
use blobsig_core::{Context, OsEnv, Signer};
use http::StatusCode;
use log::debug;
use log::warn;
use reqwest::Client;

mod signing;

struct LiveTest {
    ctx: Context,
    account_name: String,
    account_key: String,
    container: String,
}

fn init_live_test() -> Option<LiveTest> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("AZBLOB_PUT_SIGN_TEST").unwrap_or_default() != "on" {
        return None;
    }

    Some(LiveTest {
        ctx: Context::new().with_env(OsEnv),
        account_name: env::var("AZBLOB_PUT_SIGN_ACCOUNT_NAME")
            .expect("env AZBLOB_PUT_SIGN_ACCOUNT_NAME must set"),
        account_key: env::var("AZBLOB_PUT_SIGN_ACCOUNT_KEY")
            .expect("env AZBLOB_PUT_SIGN_ACCOUNT_KEY must set"),
        container: env::var("AZBLOB_PUT_SIGN_CONTAINER").unwrap_or_else(|_| "test".to_string()),
    })
}

#[tokio::test]
async fn test_put_blob() -> Result<()> {
    let Some(t) = init_live_test() else {
        warn!("AZBLOB_PUT_SIGN_TEST is not set, skipped");
        return Ok(());
    };

    let body = "hello world";
    let config = Config::default().from_env(&t.ctx);
    let req = PutBlobRequest::new(
        &t.account_name,
        &t.container,
        "azblob-put-sign/hello.txt",
        body.len().to_string(),
    )
    .with_config(&config);

    let signer = Signer::new(
        t.ctx.clone(),
        StaticCredentialProvider::new_shared_key(&t.account_key),
        RequestSigner::new(),
    );
    let signature = signer.sign(&req)?;
    let http_req = signature.to_http_request(&req, &config)?;
    debug!("signed request: {:?}", http_req);

    let resp = Client::new()
        .put(http_req.uri().to_string())
        .headers(http_req.headers().clone())
        .body(body)
        .send()
        .await?;

    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::CREATED, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_put_blob_with_wrong_key() -> Result<()> {
    let Some(t) = init_live_test() else {
        warn!("AZBLOB_PUT_SIGN_TEST is not set, skipped");
        return Ok(());
    };

    let body = "hello world";
    let config = Config::default().from_env(&t.ctx);
    let req = PutBlobRequest::new(
        &t.account_name,
        &t.container,
        "azblob-put-sign/forbidden.txt",
        body.len().to_string(),
    )
    .with_config(&config);

    let signer = Signer::new(
        t.ctx.clone(),
        StaticCredentialProvider::new_shared_key("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="),
        RequestSigner::new(),
    );
    let http_req = signer.sign(&req)?.to_http_request(&req, &config)?;

    let resp = Client::new()
        .put(http_req.uri().to_string())
        .headers(http_req.headers().clone())
        .body(body)
        .send()
        .await?;

    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::FORBIDDEN, resp.status());
    Ok(())
}
