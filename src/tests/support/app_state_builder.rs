use actix_web::web;
use std::sync::Arc;

use crate::media::application::ports::incoming::use_cases::{
    CreateMediaUseCase, EditMediaUseCase, GetMediaListUseCase, GetMediaUseCase,
    RemoveMediaUseCase,
};
use crate::media::MediaUseCases;
use crate::tests::support::stubs::{
    StubCreateMediaUseCase, StubEditMediaUseCase, StubGetMediaListUseCase, StubGetMediaUseCase,
    StubRemoveMediaUseCase,
};
use crate::AppState;

/// Assembles an [`AppState`] for route tests. Every use case defaults to a
/// stub that panics when touched, so a test only wires what it exercises.
pub struct TestAppStateBuilder {
    create_media: Arc<dyn CreateMediaUseCase + Send + Sync>,
    edit_media: Arc<dyn EditMediaUseCase + Send + Sync>,
    get_media: Arc<dyn GetMediaUseCase + Send + Sync>,
    get_media_list: Arc<dyn GetMediaListUseCase + Send + Sync>,
    remove_media: Arc<dyn RemoveMediaUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_media: Arc::new(StubCreateMediaUseCase),
            edit_media: Arc::new(StubEditMediaUseCase),
            get_media: Arc::new(StubGetMediaUseCase),
            get_media_list: Arc::new(StubGetMediaListUseCase),
            remove_media: Arc::new(StubRemoveMediaUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_media(
        mut self,
        use_case: impl CreateMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_media = Arc::new(use_case);
        self
    }

    pub fn with_edit_media(
        mut self,
        use_case: impl EditMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.edit_media = Arc::new(use_case);
        self
    }

    pub fn with_get_media(
        mut self,
        use_case: impl GetMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_media = Arc::new(use_case);
        self
    }

    pub fn with_get_media_list(
        mut self,
        use_case: impl GetMediaListUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_media_list = Arc::new(use_case);
        self
    }

    pub fn with_remove_media(
        mut self,
        use_case: impl RemoveMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.remove_media = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            media: MediaUseCases {
                create_media: self.create_media,
                edit_media: self.edit_media,
                get_media: self.get_media,
                get_media_list: self.get_media_list,
                remove_media: self.remove_media,
            },
        })
    }
}
