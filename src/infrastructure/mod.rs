pub mod api;
pub mod notifiers;
pub mod storage;
