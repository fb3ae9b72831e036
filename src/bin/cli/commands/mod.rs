pub mod backup;
pub mod delete;
pub mod import;
pub mod list;
pub mod recall;
pub mod show;
pub mod stats;
