pub mod classify;
pub mod connection;
pub mod documents;
pub mod folders;
pub mod upload;

// Re-export for convenience
pub use classify::ClassifyApi;
pub use connection::ConnectionApi;
pub use documents::DocumentApi;
pub use folders::FolderApi;
pub use upload::UploadApi;
