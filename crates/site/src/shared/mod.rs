pub mod components;
pub mod format;
pub mod github;
pub mod icons;
pub mod responsive;
