pub mod info_message;
pub mod package;

pub use info_message::InfoMessage;
pub use package::{load_packages, Package};
