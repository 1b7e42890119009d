mod create_media;
mod edit_media;
mod get_media;
mod list_media;
pub mod media_dto;
mod remove_media;

pub use create_media::create_media_handler;
pub use edit_media::edit_media_handler;
pub use get_media::get_media_handler;
pub use list_media::list_media_handler;
pub use remove_media::remove_media_handler;
