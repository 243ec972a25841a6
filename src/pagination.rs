//! Pagination Cursor
//!
//! Tracks the continuation URLs used by the `map` and `mapb` commands.

/// Continuation URLs for the location listing.
///
/// An empty string means "no such page".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub next: String,
    pub prev: String,
}

impl Cursor {
    /// Starts paging at `seed_url` with nothing behind it.
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            next: seed_url.into(),
            prev: String::new(),
        }
    }

    /// Guard shared by forward and backward paging.
    ///
    /// Backward paging deliberately checks `next` too, so an exhausted
    /// forward cursor also refuses to page back.
    pub fn is_exhausted(&self) -> bool {
        self.next.is_empty()
    }

    // == Advance Forward ==
    /// Applies a page fetched from `next`: that URL becomes `prev` and the
    /// page's own `next` link (or nothing) becomes `next`.
    pub fn advance_forward(&mut self, response_next: Option<&str>) {
        self.prev = std::mem::take(&mut self.next);
        self.next = response_next.unwrap_or_default().to_string();
    }

    // == Advance Backward ==
    /// Applies a page fetched while paging back: the old `prev` becomes
    /// `next` and the page's own `previous` link (or nothing) becomes `prev`.
    pub fn advance_backward(&mut self, response_prev: Option<&str>) {
        self.next = std::mem::take(&mut self.prev);
        self.prev = response_prev.unwrap_or_default().to_string();
    }
}
