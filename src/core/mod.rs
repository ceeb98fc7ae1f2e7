pub mod backend;
pub mod patch;
pub mod service;
pub mod store;
pub mod validate;
pub mod week;

pub use backend::{MemoryBackend, TimesheetBackend};
pub use service::TimesheetService;
pub use store::TimesheetStore;
