pub mod cooldown;
pub mod ctx;
