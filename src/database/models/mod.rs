pub mod bean;
pub mod user;

pub use bean::{CoffeeBean, NewBean};
pub use user::{PublicUser, User};
