use async_trait::async_trait;

use crate::media::application::domain::entities::MediaDescriptor;
use crate::media::application::ports::incoming::use_cases::{
    CreateMediaCommand, CreateMediaError, CreateMediaUseCase, EditMediaCommand, EditMediaError,
    EditMediaUseCase, GetMediaCommand, GetMediaError, GetMediaListCommand, GetMediaListError,
    GetMediaListUseCase, GetMediaUseCase, RemoveMediaCommand, RemoveMediaError,
    RemoveMediaUseCase,
};

#[derive(Default, Clone)]
pub struct StubCreateMediaUseCase;

#[async_trait]
impl CreateMediaUseCase for StubCreateMediaUseCase {
    async fn execute(
        &self,
        _command: CreateMediaCommand,
    ) -> Result<MediaDescriptor, CreateMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEditMediaUseCase;

#[async_trait]
impl EditMediaUseCase for StubEditMediaUseCase {
    async fn execute(
        &self,
        _command: EditMediaCommand,
    ) -> Result<MediaDescriptor, EditMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMediaUseCase;

#[async_trait]
impl GetMediaUseCase for StubGetMediaUseCase {
    async fn execute(
        &self,
        _command: GetMediaCommand,
    ) -> Result<MediaDescriptor, GetMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMediaListUseCase;

#[async_trait]
impl GetMediaListUseCase for StubGetMediaListUseCase {
    async fn execute(
        &self,
        _command: GetMediaListCommand,
    ) -> Result<Vec<MediaDescriptor>, GetMediaListError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveMediaUseCase;

#[async_trait]
impl RemoveMediaUseCase for StubRemoveMediaUseCase {
    async fn execute(&self, _command: RemoveMediaCommand) -> Result<(), RemoveMediaError> {
        unimplemented!("Not used in this test")
    }
}
