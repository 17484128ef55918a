//! Small reusable paragraphs shared by the screens

mod empty_message;
mod help;
mod status;

pub struct UiComponent;
