//! Content section components
//!
//! Each section owns its static record list and keys a scroll-reveal
//! tracker to the list's indices.

mod certifications;
pub use certifications::Certifications;

mod contact;
pub use contact::Contact;

mod experience;
pub use experience::Experience;

mod hero;
pub use hero::Hero;

mod projects;
pub use projects::Projects;

mod skills;
pub use skills::Skills;

/// Entrance classes for a tracked card: held below its resting position
/// and transparent until its index reveals.
pub(crate) fn entrance_class(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_class_follows_reveal_state() {
        assert_eq!(entrance_class(true), "opacity-100 translate-y-0");
        assert_eq!(entrance_class(false), "opacity-0 translate-y-10");
    }
}
