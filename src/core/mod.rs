pub mod add;
pub mod del;
pub mod draft;
pub mod edit;
pub mod export;
pub mod form;
pub mod import;
pub mod list;
pub mod log;
pub mod session;
pub mod stats;
