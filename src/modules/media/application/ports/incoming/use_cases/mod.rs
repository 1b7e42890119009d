mod create_media;
mod edit_media;
mod get_media;
mod get_media_list;
mod remove_media;

pub use create_media::{
    CreateMediaCommand, CreateMediaCommandBuilder, CreateMediaError, CreateMediaUseCase,
    MediaCommandError, MAX_NAME_LEN,
};
pub use edit_media::{EditMediaCommand, EditMediaError, EditMediaUseCase};
pub use get_media::{GetMediaCommand, GetMediaError, GetMediaUseCase};
pub use get_media_list::{GetMediaListCommand, GetMediaListError, GetMediaListUseCase};
pub use remove_media::{RemoveMediaCommand, RemoveMediaError, RemoveMediaUseCase};
