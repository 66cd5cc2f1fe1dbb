pub mod cli;
pub mod error;
pub mod github;
pub mod links;
pub mod logging;
pub mod types;
pub mod updater;
