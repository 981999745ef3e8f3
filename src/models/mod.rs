pub mod classify;
pub mod folder;

pub use classify::Classification;
pub use folder::NewFolder;
