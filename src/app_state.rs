use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{
        catalogue_service::Catalogue,
        gateway_client::{ChatCompletionClient, HttpChatCompletionClient},
        question_service::QuestionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub gateway: Arc<dyn ChatCompletionClient>,
    pub catalogue: Arc<Catalogue>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let catalogue = match &config.catalogue_path {
            Some(path) => Catalogue::load(path),
            None => Catalogue::bundled(),
        }
        .map_err(|e| AppError::InternalError(e.to_string()))?;

        let gateway: Arc<dyn ChatCompletionClient> =
            Arc::new(HttpChatCompletionClient::new(config.gateway.clone())?);

        Ok(Self::with_client(config, gateway, catalogue))
    }

    /// Wires the services around an existing upstream client.
    pub fn with_client(
        config: Config,
        gateway: Arc<dyn ChatCompletionClient>,
        catalogue: Catalogue,
    ) -> Self {
        let question_service = Arc::new(QuestionService::new(
            Arc::clone(&gateway),
            &config.blurt_model,
            &config.varied_model,
        ));

        Self {
            question_service,
            gateway,
            catalogue: Arc::new(catalogue),
            config: Arc::new(config),
        }
    }
}
