use crate::imagery::consts::MAX_SEARCH_LIMIT;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "treewalk-api", version, about = "TreeWalk API")]
pub struct Args {
    #[arg(long, env = "LISTEN_ADDRESS")]
    #[arg(default_value = "0.0.0.0:8000")]
    pub listen_address: SocketAddr,
    /// Mapillary client token. Without it every lookup answers in stub mode.
    #[arg(long, env = "MAPILLARY_CLIENT_TOKEN", hide_env_values = true)]
    pub mapillary_client_token: Option<String>,
    #[arg(long, env = "MAPILLARY_API_URL")]
    #[arg(default_value = "https://graph.mapillary.com")]
    pub mapillary_api_url: Url,
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS")]
    #[arg(default_value_t = 5)]
    pub provider_timeout_secs: u64,
    /// Candidate images fetched per lookup. The nearest panorama is only chosen among these.
    #[arg(long, env = "MAPILLARY_SEARCH_LIMIT")]
    #[arg(default_value_t = MAX_SEARCH_LIMIT)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_SEARCH_LIMIT as i64))]
    pub search_limit: u32,
}

impl Args {
    pub fn mapillary_token(&self) -> Option<&str> {
        self.mapillary_client_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }
}
