mod auth;
mod health_check;
mod profile;

pub use auth::{login, register};
pub use health_check::health_check;
pub use profile::{get_profile, update_profile};
