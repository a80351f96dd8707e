// Export all route modules
pub mod companies;
pub mod founders;
pub mod funding_rounds;
pub mod investors;

// Re-export all route handlers for easy importing
pub use companies::*;
pub use founders::*;
pub use funding_rounds::*;
pub use investors::*;
