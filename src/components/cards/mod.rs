//! Card components

mod new_user_card;

pub use new_user_card::NewUserCard;
