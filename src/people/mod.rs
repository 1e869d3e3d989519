// src/people/mod.rs

//! People and who is responsible for which task.

pub mod assignment;
pub mod roster;

pub use assignment::Assignments;
pub use roster::{Person, Roster};
