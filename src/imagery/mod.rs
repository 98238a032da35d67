use crate::cli::Args;

pub mod consts;
pub mod errors;
pub mod extractors;
pub mod geo;
pub mod handlers;
pub mod mapillary;
pub mod models;
pub mod provider;
pub mod requests;
pub mod responses;

pub fn init(args: &Args) {
    if args.mapillary_token().is_none() {
        tracing::warn!(
            "The `MAPILLARY_CLIENT_TOKEN` environment variable isn't set. \
            Nearest image lookups will answer in stub mode."
        );
    }
}
