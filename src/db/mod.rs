pub mod drafts;
pub mod events;
pub mod initialize;
pub mod log;
pub mod pool;
