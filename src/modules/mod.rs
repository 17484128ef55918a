pub mod assistant;
pub mod catalog;
pub mod conversation;
pub mod module_handler;
pub mod navigation;
pub mod screens;
pub mod session;
