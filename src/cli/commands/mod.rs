//! Command implementations

mod check;
mod find;
mod init;
mod match_cmd;
mod translate;

pub use check::check;
pub use find::find;
pub use init::init;
pub use match_cmd::match_paths;
pub use translate::translate;
