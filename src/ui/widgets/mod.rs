pub mod assistant_panel;
pub mod bottom_nav;
pub mod header;
