pub mod sea_orm_entity;
mod account_repository_postgres;
mod random_handle_generator;

pub use account_repository_postgres::AccountRepositoryPostgres;
pub use random_handle_generator::RandomHandleGenerator;
