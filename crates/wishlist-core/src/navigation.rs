//! Detail Page Navigation
//!
//! When the detail view gives up on its wish and returns to the list.

/// What the detail view knows about its wish at a given moment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailLookup {
    /// The id resolved to a wish in the collection
    pub found: bool,
    /// The first fetch has settled, successful or not
    pub loaded: bool,
    /// A request is still in flight
    pub loading: bool,
    /// This page deleted its own wish and is already on a delayed way out
    pub leaving: bool,
}

impl DetailLookup {
    /// Leave for the list right away: the wish is missing and no pending
    /// fetch could still bring it in.
    pub fn should_redirect(&self) -> bool {
        !self.found && self.loaded && !self.loading && !self.leaving
    }
}
