//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod shortener;

pub use shortener::ShortenerForm;
