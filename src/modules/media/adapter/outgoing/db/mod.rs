pub mod media_repository_postgres;

pub use media_repository_postgres::MediaRepositoryPostgres;
