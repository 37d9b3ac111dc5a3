pub mod hit;
pub mod loader;
pub mod router;
pub mod search;
pub mod state;
