pub mod access;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;
pub mod navigation;
pub mod view;

// Consultancy domain records
pub mod billing;
pub mod consultant;
pub mod project;
pub mod reports;
pub mod timesheet;

pub use access::*;
pub use config::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
pub use view::*;

pub use billing::*;
pub use consultant::*;
pub use project::*;
pub use reports::*;
pub use timesheet::*;
