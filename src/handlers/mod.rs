pub mod fallback;
pub mod health;
pub mod layout;
pub mod login;
pub mod orders;
pub mod stage;
pub mod stats;
