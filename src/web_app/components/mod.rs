// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (SubmitButton, Card, PriceBadge, Spinner, TextInput)
// - search.rs: Search-related components (tabs, forms, seller select, URL banner)
// - product.rs: Product display components (ProductCard, ResultsSection)
// - toast.rs: Toast notifications and the Toaster handle

pub mod common;
pub mod search;
pub mod product;
pub mod toast;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use product::*;
pub use toast::*;
