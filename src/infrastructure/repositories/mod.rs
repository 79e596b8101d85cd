//! Repository implementations

pub mod author_repository;
pub mod book_repository;
pub mod memory_repository;

pub use author_repository::SeaOrmAuthorRepository;
pub use book_repository::SeaOrmBookRepository;
pub use memory_repository::InMemoryCatalog;
