//! Obscura - tales from the shadows, rendered with Yew.
//!
//! The crate is a client-side rendered site: a router, two pages and the
//! story cards they are built from. [`mount_app`] is the single entry point
//! used by the browser binary.

mod app;
pub mod components;
mod error;
pub mod features;
pub mod pages;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_util;

pub use app::{switch, App, Route, StaticApp, StaticAppProps};
pub use error::MountError;

use gloo::console::log;
use web_sys::Element;
use yew::AppHandle;

/// Id of the host element in `index.html`.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Attaches a fresh routed app to `root`.
///
/// Returns [`MountError::RootNotFound`] without rendering anything when the
/// caller could not locate a host element. Every successful call builds its
/// own tree, so mounting into two elements yields two independent apps.
pub fn mount_app(root: Option<Element>) -> Result<AppHandle<App>, MountError> {
    let root = root.ok_or(MountError::RootNotFound)?;

    log!(format!(
        "obscura: mounting into <{}>",
        root.tag_name().to_lowercase()
    ));

    Ok(yew::Renderer::<App>::with_root(root).render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_is_rejected_before_rendering() {
        let Err(err) = mount_app(None) else {
            panic!("mount without a root element must fail");
        };
        assert_eq!(err, MountError::RootNotFound);
        assert_eq!(err.to_string(), "Root element not found");
    }
}
