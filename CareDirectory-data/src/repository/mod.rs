// Repository module structure
pub mod errors;
mod directory;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use directory::{DirectoryRepository, DirectoryRepositoryTrait};

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use directory::tests;
