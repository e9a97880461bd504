mod credential_chain;
mod shared_key;
