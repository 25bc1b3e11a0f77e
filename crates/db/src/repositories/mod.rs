//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every folder/prompt query
//! is owner-scoped: a row belonging to another profile behaves exactly as
//! if it did not exist.

pub mod folder_repo;
pub mod profile_repo;
pub mod prompt_repo;
pub mod session_repo;

pub use folder_repo::FolderRepo;
pub use profile_repo::ProfileRepo;
pub use prompt_repo::PromptRepo;
pub use session_repo::SessionRepo;
