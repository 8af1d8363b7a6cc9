use std::net::SocketAddr;

/// Errors that stop the site server from starting or serving
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid Leptos configuration: {0}")]
    Config(String),
    #[error("Could not bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
