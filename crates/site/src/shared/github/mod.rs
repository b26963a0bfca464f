pub mod api;
mod star_button;

pub use star_button::StarButton;
