mod document;
mod envelope;
mod message;
mod remote;
mod storage;

pub use document::*;
pub use envelope::*;
pub use message::*;
pub use remote::*;
pub use storage::*;
