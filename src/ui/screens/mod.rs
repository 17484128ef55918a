pub mod auth;
pub mod dashboard;
pub mod fines;
pub mod health;
pub mod reels;
pub mod rewards;
pub mod sector;
pub mod splash;
pub mod vendors;
