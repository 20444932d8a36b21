//! Load state, pagination and roster summaries for the list views.

use std::collections::HashSet;

use api::{EventFilter, Registration};

/// Lifecycle of a view's data load.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Page position within `[1, total_pages]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page: page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Previous page, staying on the first.
    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    /// Next page, staying on the last.
    pub fn next(&self) -> u32 {
        (self.page + 1).min(self.total_pages)
    }

    /// The pager is only shown when there is somewhere to go.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Page and filter of the event listing. Transitions return `None` when
/// nothing would change, so callers only write state (and refetch) on a real
/// move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub filter: EventFilter,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filter: EventFilter::default(),
        }
    }
}

impl ListQuery {
    /// Switch filter; a different filter starts again from page 1.
    pub fn with_filter(self, filter: EventFilter) -> Option<Self> {
        (filter != self.filter).then_some(Self { page: 1, filter })
    }

    pub fn pager(self, total_pages: u32) -> Pager {
        Pager::new(self.page, total_pages)
    }

    /// Jump to `page`, clamped to `[1, total_pages]`.
    pub fn go_to(self, page: u32, total_pages: u32) -> Option<Self> {
        let page = Pager::new(page, total_pages).page();
        (page != self.page).then_some(Self { page, ..self })
    }

    pub fn previous(self, total_pages: u32) -> Option<Self> {
        self.go_to(self.pager(total_pages).prev(), total_pages)
    }

    pub fn next(self, total_pages: u32) -> Option<Self> {
        self.go_to(self.pager(total_pages).next(), total_pages)
    }
}

/// Summary counts shown above "My Registrations".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistrationStats {
    pub total: usize,
    pub unique_events: usize,
}

impl RegistrationStats {
    pub fn from_registrations(registrations: &[Registration]) -> Self {
        let unique_events = registrations
            .iter()
            .filter_map(Registration::event_id)
            .collect::<HashSet<_>>()
            .len();
        Self {
            total: registrations.len(),
            unique_events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::EventRef;

    #[test]
    fn test_pager_bounds() {
        let first = Pager::new(1, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());
        assert_eq!(first.prev(), 1);
        assert_eq!(first.next(), 2);

        let last = Pager::new(3, 3);
        assert!(last.has_prev());
        assert!(!last.has_next());
        assert_eq!(last.next(), 3);
        assert_eq!(last.prev(), 2);
    }

    #[test]
    fn test_pager_clamps_and_hides() {
        let pager = Pager::new(9, 4);
        assert_eq!(pager.page(), 4);
        assert_eq!(Pager::new(0, 4).page(), 1);

        let single = Pager::new(1, 0);
        assert_eq!(single.total_pages(), 1);
        assert!(!single.is_visible());
        assert!(Pager::new(1, 2).is_visible());
    }

    #[test]
    fn test_new_filter_restarts_from_first_page() {
        let query = ListQuery {
            page: 3,
            filter: EventFilter::All,
        };
        assert_eq!(
            query.with_filter(EventFilter::Upcoming),
            Some(ListQuery {
                page: 1,
                filter: EventFilter::Upcoming,
            })
        );
        assert_eq!(query.with_filter(EventFilter::All), None);
        assert_eq!(ListQuery::default().page, 1);
        assert_eq!(ListQuery::default().filter, EventFilter::All);
    }

    #[test]
    fn test_query_paging_stays_in_range() {
        let first = ListQuery::default();
        assert_eq!(first.previous(4), None);
        assert_eq!(first.next(4).map(|q| q.page), Some(2));

        let last = ListQuery {
            page: 4,
            filter: EventFilter::Past,
        };
        assert_eq!(last.next(4), None);
        let back = last.previous(4).unwrap();
        assert_eq!(back.page, 3);
        assert_eq!(back.filter, EventFilter::Past);

        assert_eq!(first.go_to(9, 4).map(|q| q.page), Some(4));
        assert_eq!(last.go_to(0, 4).map(|q| q.page), Some(1));
        assert_eq!(first.next(0), None);
    }

    #[test]
    fn test_loadable_accessors() {
        let loading: Loadable<u32> = Loadable::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.ready(), None);
        assert_eq!(Loadable::Ready(3).ready(), Some(&3));
        assert_eq!(Loadable::<u32>::Failed("boom".into()).ready(), None);
    }

    #[test]
    fn test_registration_stats_dedupe_events() {
        let reg = |id: &str, event: Option<&str>| Registration {
            id: id.into(),
            event: event.map(|e| EventRef::Id(e.into())),
            user: None,
            created_at: None,
        };
        let registrations = vec![
            reg("r1", Some("e1")),
            reg("r2", Some("e2")),
            reg("r3", Some("e1")),
            reg("r4", None),
        ];
        let stats = RegistrationStats::from_registrations(&registrations);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.unique_events, 2);
        assert_eq!(RegistrationStats::from_registrations(&[]), RegistrationStats::default());
    }
}
