pub mod form_state;
pub mod use_user;

pub use form_state::*;
pub use use_user::*;
