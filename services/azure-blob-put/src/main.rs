//! Binary printing the Shared Key signature of an Azure Blob "Put Blob" request.
//!
//! ```text
//! AZBLOB_ACCOUNT_KEY=... azblob-put-sign <account> <container> <blob> <content_length>
//! ```
//!
//! Prints `{signature};{request_time}` on stdout. The caller sends the
//! upload with `Authorization: SharedKey {account}:{signature}` and
//! `x-ms-date: {request_time}`.

use anyhow::Result;
use azblob_put_sign::{Config, DefaultCredentialProvider, PutBlobRequest, RequestSigner};
use blobsig_core::{Context, OsEnv, Signer};
use clap::Parser;
use log::debug;

#[derive(Debug, Parser)]
#[command(version, about = "Sign an Azure Blob Storage Put Blob request with Shared Key", long_about = None)]
struct Args {
    /// Azure storage account name
    #[arg(allow_hyphen_values = true)]
    storage_account_name: String,
    /// Target container name
    #[arg(allow_hyphen_values = true)]
    container_name: String,
    /// Target blob name
    #[arg(allow_hyphen_values = true)]
    blob_name: String,
    /// Content-Length of the upload, signed verbatim
    #[arg(allow_hyphen_values = true)]
    content_length: String,
}

fn main() -> Result<()> {
    // stdout carries the signature only, logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    debug!("signing put blob request: {args:?}");

    let ctx = Context::new().with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    let req = PutBlobRequest::new(
        args.storage_account_name,
        args.container_name,
        args.blob_name,
        args.content_length,
    )
    .with_config(&config);

    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
    let signature = signer.sign(&req)?;

    println!("{signature}");
    Ok(())
}
