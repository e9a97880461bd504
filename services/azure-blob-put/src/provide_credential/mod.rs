mod env;
pub use env::EnvCredentialProvider;

mod connection_string;
pub use connection_string::ConnectionStringCredentialProvider;

mod static_provider;
pub use static_provider::StaticCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;
