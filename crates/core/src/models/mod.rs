pub mod action;
pub mod aggregate;
pub mod category;
pub mod contribution;
pub mod entry;
pub mod month;
pub mod portfolio;
pub mod settings;
pub mod snapshot;
