mod in_memory_contact_repository;
mod sql_contact_repository;

pub use in_memory_contact_repository::InMemoryContactRepository;
pub use sql_contact_repository::SqlContactRepository;
