//! CLI command implementations.

pub mod build;
pub mod init;
pub mod search;
pub mod watch;

pub use build::build_wiki;
pub use init::init_wiki;
pub use search::{search_wiki, SearchOptions};
pub use watch::watch_wiki;
