pub mod branch;
pub mod health;
pub mod index;
