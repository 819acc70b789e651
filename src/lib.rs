pub mod format;
pub mod guard;
pub mod lister;
pub mod release;

pub use format::OutputMode;
pub use lister::{AssetLister, ListOptions, Listing};
pub use release::{Asset, ReleaseResponse};
