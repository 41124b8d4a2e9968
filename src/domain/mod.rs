pub mod errors;
pub mod search;
pub mod user;
