pub mod http;
pub mod noop;

use anyhow::Result;

use crate::domain::models::Remote;
use crate::domain::models::RemoteName;

pub type RemoteBox = Box<dyn Remote + Send + Sync>;

pub struct RemoteManager {}

impl RemoteManager {
    pub fn get(name: RemoteName) -> Result<RemoteBox> {
        if name == RemoteName::Http {
            return Ok(Box::<http::HttpRemote>::default());
        }

        return Ok(Box::<noop::NoopRemote>::default());
    }
}
