// Row models for the two directory tables
pub mod patient;
pub mod provider;

// Re-export commonly used types
pub use patient::Patient;
pub use provider::Provider;
