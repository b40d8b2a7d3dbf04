pub mod health;
pub mod intake;
pub mod pages;
pub mod proxy;
pub mod status;
