use std::sync::Arc;

use crate::media::application::ports::incoming::use_cases::{
    CreateMediaUseCase, EditMediaUseCase, GetMediaListUseCase, GetMediaUseCase, RemoveMediaUseCase,
};

/// The five media operations, one handle per transport-facing use case.
#[derive(Clone)]
pub struct MediaUseCases {
    pub create_media: Arc<dyn CreateMediaUseCase + Send + Sync>,
    pub edit_media: Arc<dyn EditMediaUseCase + Send + Sync>,
    pub get_media: Arc<dyn GetMediaUseCase + Send + Sync>,
    pub get_media_list: Arc<dyn GetMediaListUseCase + Send + Sync>,
    pub remove_media: Arc<dyn RemoveMediaUseCase + Send + Sync>,
}
