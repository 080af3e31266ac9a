//! Page chrome and layout wrappers shared by every page.

mod footer;
mod header;
mod section;

pub use footer::{copyright_year, Footer};
pub use header::Header;
pub use section::{combined_classes, Section, SectionElement, SectionProps, SectionVariant};

use crate::app::Route;

/// The fixed route set linked from both the header and the footer.
const NAV_LINKS: [(Route, &str); 3] = [
    (Route::Home, "Home"),
    (Route::Stories, "Stories"),
    (Route::About, "About"),
];
