pub mod in_memory_profile_store;
pub mod postgres_profile_store;

pub use in_memory_profile_store::InMemoryProfileStore;
pub use postgres_profile_store::PostgresProfileStore;
