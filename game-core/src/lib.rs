pub mod round;
pub mod store;
pub mod verb_list;

// Re-export main components
pub use round::*;
pub use store::*;
pub use verb_list::*;
