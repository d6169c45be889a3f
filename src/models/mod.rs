// Data models and DTOs

pub mod tag;
pub mod user;

pub use tag::{Tag, TagResponse};
pub use user::{NewUser, User, UserResponse};
