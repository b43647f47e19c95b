use std::sync::Arc;

use crate::application::ports::{DocumentProcessor, GenerationOptions};
use crate::application::services::GenerationService;
use crate::domain::DeckStyle;
use crate::presentation::config::Settings;

pub struct AppState<D: ?Sized>
where
    D: DocumentProcessor,
{
    pub generation_service: Arc<GenerationService<D>>,
    pub settings: Settings,
}

impl<D: ?Sized> AppState<D>
where
    D: DocumentProcessor,
{
    /// Configured defaults with the per-request overrides applied.
    pub fn options_for(
        &self,
        style: Option<DeckStyle>,
        use_mock: Option<bool>,
        api_key: Option<String>,
    ) -> GenerationOptions {
        let mut options = self.settings.generation.options();
        if let Some(style) = style {
            options.style = style;
        }
        if let Some(use_mock) = use_mock {
            options.use_mock = use_mock;
        }
        if let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) {
            options.api_key = Some(api_key);
        }
        options
    }
}

impl<D: ?Sized> Clone for AppState<D>
where
    D: DocumentProcessor,
{
    fn clone(&self) -> Self {
        Self {
            generation_service: Arc::clone(&self.generation_service),
            settings: self.settings.clone(),
        }
    }
}
