mod classification;
mod entity;
mod film;
mod user;

pub use classification::*;
pub use entity::*;
pub use film::*;
pub use user::*;
