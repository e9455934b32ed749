// src/paging.rs
//
// Offset pagination for the infinite-scroll lists.

/// How the offset moves after a page arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// offset += limit (sales)
    ByLimit,
    /// offset += received (news)
    ByReceived,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
    pub loading: bool,
    advance: Advance,
}

impl Paginator {
    pub fn new(limit: u32, advance: Advance) -> Self {
        Self { limit, offset: 0, has_more: true, loading: false, advance }
    }

    /// Start over from the first page (filters changed, reload).
    pub fn reset(&mut self) {
        self.offset = 0;
        self.has_more = true;
        self.loading = false;
    }

    /// `(limit, offset)` of the next page, marking the paginator busy.
    /// `None` while a page is in flight or once the end was reached.
    pub fn next_request(&mut self) -> Option<(u32, u32)> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        Some((self.limit, self.offset))
    }

    /// Record a page of `received` items.
    pub fn apply(&mut self, received: usize) {
        let received = u32::try_from(received).unwrap_or(u32::MAX);
        self.offset = self.offset.saturating_add(match self.advance {
            Advance::ByLimit => self.limit,
            Advance::ByReceived => received,
        });
        self.has_more = received >= self.limit;
        self.loading = false;
    }

    /// A failed request frees the paginator without moving it, so the
    /// next scroll retries the same page.
    pub fn fail(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_advance_by_limit_until_short_page() {
        let mut p = Paginator::new(60, Advance::ByLimit);
        assert_eq!(p.next_request(), Some((60, 0)));
        assert_eq!(p.next_request(), None, "busy while loading");
        p.apply(60);
        assert_eq!(p.next_request(), Some((60, 60)));
        p.apply(12);
        assert!(!p.has_more);
        assert_eq!(p.offset, 120);
        assert_eq!(p.next_request(), None);
    }

    #[test]
    fn news_advance_by_received() {
        let mut p = Paginator::new(50, Advance::ByReceived);
        p.next_request();
        p.apply(50);
        assert_eq!(p.next_request(), Some((50, 50)));
        p.apply(7);
        assert_eq!(p.offset, 57);
        assert!(!p.has_more);
    }

    #[test]
    fn failure_retries_same_page_and_reset_starts_over() {
        let mut p = Paginator::new(60, Advance::ByLimit);
        p.next_request();
        p.apply(60);
        p.next_request();
        p.fail();
        assert_eq!(p.next_request(), Some((60, 60)));
        p.reset();
        assert_eq!(p.next_request(), Some((60, 0)));
    }
}
