use thiserror::Error;

/// Errors raised while attaching the app to the page.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountError {
    /// The host page has no element to render into.
    #[error("Root element not found")]
    RootNotFound,
}
