pub mod seed;
pub mod user;
