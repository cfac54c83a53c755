//! Views module - the page and its navigation chrome

mod home;
pub use home::Home;

mod navbar;
pub use navbar::Navbar;
