//! Listen address for the server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port the service has always listened on.
pub const DEFAULT_PORT: u16 = 8080;

/// Where the server binds. Only the default is used by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}
