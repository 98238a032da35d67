use crate::cli::Args;
use crate::imagery::errors::ProviderError;
use crate::imagery::mapillary::MapillaryClient;
use crate::imagery::provider::ImageryProvider;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppContext {
    /// `None` when no provider credential is configured.
    pub imagery: Option<Arc<dyn ImageryProvider>>,
}

impl AppContext {
    pub fn with_provider(provider: impl ImageryProvider + 'static) -> Self {
        Self {
            imagery: Some(Arc::new(provider)),
        }
    }
}

pub fn init(args: &Args) -> Result<AppContext, ProviderError> {
    let Some(token) = args.mapillary_token() else {
        return Ok(AppContext::default());
    };
    let client = MapillaryClient::new(
        args.mapillary_api_url.clone(),
        token,
        args.provider_timeout(),
        args.search_limit,
    )?;
    Ok(AppContext::with_provider(client))
}
