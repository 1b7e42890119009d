pub mod adapter;
pub mod application;
pub mod media_use_cases;

pub use media_use_cases::MediaUseCases;
