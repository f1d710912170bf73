//! Page Components

mod profile;
mod store;

pub use profile::{Profile, ProfilePage};
pub use store::StorePage;
