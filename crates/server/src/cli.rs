use std::{
    net::{AddrParseError, IpAddr, SocketAddr},
    str::FromStr,
};

use axum::http::{header::InvalidHeaderValue, HeaderValue};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "0.0.0.0")]
    pub bind_addr: String,
    /// Origin allowed to make cross origin requests. `*` allows any origin
    #[arg(long, env, default_value = "*")]
    pub cors_origin: String,
}

impl Cli {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        Ok(SocketAddr::new(IpAddr::from_str(&self.bind_addr)?, self.port))
    }

    pub fn cors_layer(&self) -> Result<CorsLayer, InvalidHeaderValue> {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        if self.cors_origin == "*" {
            Ok(layer.allow_origin(Any))
        } else {
            Ok(layer.allow_origin(HeaderValue::from_str(&self.cors_origin)?))
        }
    }
}
