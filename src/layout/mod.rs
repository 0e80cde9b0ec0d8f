//! Section layout management
//!
//! - **state**: `SectionState`, defaults and reconciliation against the registry
//! - **store**: `SectionStore`, the mutable layout with persistence

pub mod state;
pub mod store;

pub use state::SectionState;
pub use store::SectionStore;
