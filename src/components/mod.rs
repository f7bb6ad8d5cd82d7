//! UI Components for Usuarios.

pub mod cards;

pub use cards::NewUserCard;
