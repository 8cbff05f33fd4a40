//! Repository layer: one stateless struct per table.

mod contact_repo;
mod property_repo;
mod user_repo;

pub use contact_repo::ContactRepo;
pub use property_repo::PropertyRepo;
pub use user_repo::UserRepo;
