//! Contact-count modes that select the geometry branch.

/// How many contacts drive the active stroke.
///
/// Recomputed on every geometry update from the live contact set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMode {
    /// No session, or a session whose contacts have all ended
    Empty,
    /// One contact tracing an open path
    Single,
    /// Two contacts spanning a filled ring
    Paired,
    /// Three or more contacts (only reachable with the `concatenate` overflow policy)
    Overflow,
}

impl ContactMode {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => ContactMode::Empty,
            1 => ContactMode::Single,
            2 => ContactMode::Paired,
            _ => ContactMode::Overflow,
        }
    }
}
