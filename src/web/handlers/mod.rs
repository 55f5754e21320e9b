//! HTML handlers for the browser-facing pages.

mod logout;
mod pages;

pub use logout::logout_handler;
pub use pages::{NavLink, NotFoundTemplate, PageTemplate, nav_links, not_found_handler, page_route};
