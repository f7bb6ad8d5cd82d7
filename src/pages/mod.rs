//! Application pages

mod users;

pub use users::Users;
