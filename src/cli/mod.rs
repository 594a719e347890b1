use clap::Subcommand;

use crate::connector::DEFAULT_POPULAR_COUNT;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP API over a fresh in-memory store
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,

        /// Number of films returned by /films/popular when no count is given
        #[arg(long, default_value_t = DEFAULT_POPULAR_COUNT)]
        popular_count: i64,
    },
}
