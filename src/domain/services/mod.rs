mod history;
mod persistence;
mod session;
mod session_service;

pub use history::*;
pub use persistence::*;
pub use session::*;
pub use session_service::*;
