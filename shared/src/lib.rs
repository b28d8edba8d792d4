pub mod api;
pub mod auto_spin;
pub mod campaign;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod pricing;
pub mod promo;
pub mod spin_limits;
pub mod spin_store;
pub mod spin_wheel;
pub mod user;
pub mod validation;
pub mod wallet;
pub mod wheel_angle;
