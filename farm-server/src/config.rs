//! Listener configuration from the command line and environment.

use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Parser, Debug)]
#[command(name = "farm-server", version, about = "Smart farming API server")]
pub struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
        }
    }

    /// Falls back to all interfaces when the host does not parse.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], self.port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", DEFAULT_PORT)
    }
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self::new(&args.host, args.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_args_override() {
        let args = Args::try_parse_from(["farm-server", "--host", "127.0.0.1", "--port", "8080"]).unwrap();
        let config = ServerConfig::from(args);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bad_host_falls_back() {
        let config = ServerConfig::new("not a host", 5001);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5001");
    }
}
