//! Custom widget components

mod button;
mod header;
mod loading;
mod select_list;
mod status_bar;
mod text_input;

pub use button::SubmitButton;
pub use header::FormHeader;
pub use loading::LoadingPlaceholder;
pub use select_list::SelectList;
pub use status_bar::StatusBar;
pub use text_input::{visible_tail, TextInput};
