use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

use crate::actor_framework::IdScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Command line and environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", version, about = "Product and user catalog over in-memory stores")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "STOREFRONT_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Request buffer of each store actor
    #[arg(long, env = "STOREFRONT_CHANNEL_CAPACITY", default_value_t = 32)]
    pub channel_capacity: usize,

    /// How stores identify newly created records
    #[arg(long, env = "STOREFRONT_ID_SCHEME", value_enum, default_value_t = IdScheme::Sequential)]
    pub id_scheme: IdScheme,

    /// Start with empty stores instead of the fixture catalog and accounts
    #[arg(long, env = "STOREFRONT_NO_SEED")]
    pub no_seed: bool,

    #[arg(long, env = "STOREFRONT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
