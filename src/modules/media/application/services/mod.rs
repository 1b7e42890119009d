pub mod create_media_service;
pub mod edit_media_service;
pub mod get_media_list_service;
pub mod get_media_service;
pub mod remove_media_service;

pub use create_media_service::CreateMediaService;
pub use edit_media_service::EditMediaService;
pub use get_media_list_service::GetMediaListService;
pub use get_media_service::GetMediaService;
pub use remove_media_service::RemoveMediaService;
