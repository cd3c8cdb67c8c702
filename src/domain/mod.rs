//! Domain types - pure data independent of git and configuration

pub mod commit;
pub mod module;
pub mod prerelease;
pub mod severity;
pub mod version;

pub use commit::Commit;
pub use module::{
    BumpReason, Module, ModuleChange, ModuleKind, ModuleVersionChange, ROOT_PATH,
};
pub use prerelease::PreRelease;
pub use severity::BumpSeverity;
pub use version::Version;
