//! In-memory adapters for user ports.

mod user;

pub use user::InMemoryUserRepository;
