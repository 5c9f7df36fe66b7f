pub mod controller;
pub mod field;
pub mod state;
pub mod user;
