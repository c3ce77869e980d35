//! Authentication endpoints.

mod login;
mod me;
mod register;

pub use login::login;
pub use me::{current_user, update_profile};
pub use register::register;
