pub mod details;
pub mod export;
pub mod list;
pub mod new;
pub mod payload;
pub mod show;
pub mod view;
