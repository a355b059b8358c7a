//! Pagination arithmetic for the users table.
//!
//! The remote total is not read from responses; the table is sized from the
//! configured `total_users` and `page_size` (208 and 20 by default).

use crate::config::TableConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub total_users: u32,
    pub page_size: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self::from(&TableConfig::default())
    }
}

impl From<&TableConfig> for Pager {
    fn from(config: &TableConfig) -> Self {
        // A zero page size would turn into `limit=0`, which asks for everything
        Self {
            total_users: config.total_users,
            page_size: config.page_size.max(1),
        }
    }
}

impl Pager {
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_users.div_ceil(self.page_size)
    }

    pub fn previous_disabled(&self, current: u32, loading: bool) -> bool {
        current <= 1 || loading
    }

    pub fn next_disabled(&self, current: u32, loading: bool) -> bool {
        current >= self.total_pages() || loading
    }

    /// Numbered buttons only lock while a fetch is in flight.
    pub fn page_button_disabled(&self, loading: bool) -> bool {
        loading
    }

    /// 1-based row range shown by `current`: "Showing {from} to {to}".
    ///
    /// `current` is clamped to the known pages, so an out-of-range token
    /// reports the nearest real page instead of overflowing.
    pub fn range(&self, current: u32) -> (u32, u32) {
        let last = self.total_pages();
        if last == 0 {
            return (0, 0);
        }
        let current = current.clamp(1, last);
        let from = (current - 1).saturating_mul(self.page_size).saturating_add(1);
        let to = current.saturating_mul(self.page_size).min(self.total_users);
        (from, to)
    }

    /// Page numbers for the numbered controls.
    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let pager = Pager::default();
        assert_eq!(pager.total_pages(), 11);
        assert_eq!(pager.pages().count(), 11);

        let exact = Pager { total_users: 40, page_size: 20 };
        assert_eq!(exact.total_pages(), 2);

        let degenerate = Pager { total_users: 40, page_size: 0 };
        assert_eq!(degenerate.total_pages(), 0);
    }

    #[test]
    fn test_previous_disabled_iff_first_page() {
        let pager = Pager::default();
        assert!(pager.previous_disabled(0, false));
        assert!(pager.previous_disabled(1, false));
        for page in 2..=11 {
            assert!(!pager.previous_disabled(page, false));
        }
    }

    #[test]
    fn test_next_disabled_iff_last_page() {
        let pager = Pager::default();
        for page in 1..=10 {
            assert!(!pager.next_disabled(page, false));
        }
        assert!(pager.next_disabled(11, false));
        assert!(pager.next_disabled(12, false));
    }

    #[test]
    fn test_everything_locks_while_loading() {
        let pager = Pager::default();
        assert!(pager.previous_disabled(5, true));
        assert!(pager.next_disabled(5, true));
        assert!(pager.page_button_disabled(true));
        assert!(!pager.page_button_disabled(false));
    }

    #[test]
    fn test_range() {
        let pager = Pager::default();
        assert_eq!(pager.range(1), (1, 20));
        assert_eq!(pager.range(3), (41, 60));
        assert_eq!(pager.range(11), (201, 208));
    }

    #[test]
    fn test_range_clamps_out_of_range_pages() {
        let pager = Pager::default();
        assert_eq!(pager.range(0), (1, 20));
        assert_eq!(pager.range(300_000_000), (201, 208));
        assert_eq!(pager.range(u32::MAX), (201, 208));

        let huge = Pager { total_users: u32::MAX, page_size: u32::MAX };
        assert_eq!(huge.range(u32::MAX), (1, u32::MAX));

        let empty = Pager { total_users: 40, page_size: 0 };
        assert_eq!(empty.range(3), (0, 0));
    }

    #[test]
    fn test_initial_page_from_config_does_not_overflow() {
        let config = crate::DashboardConfig::from_toml("[table]\ninitial_page = \"300000000\"\n").unwrap();
        let state = crate::PageState::new(config.table.initial_page.clone());
        let pager = Pager::from(&config.table);
        assert_eq!(pager.range(state.current_page()), (201, 208));
    }

    #[test]
    fn test_zero_page_size_never_means_everything() {
        let config = crate::config::TableConfig { page_size: 0, ..Default::default() };
        let pager = Pager::from(&config);
        assert_eq!(pager.page_size, 1);
        assert_eq!(pager.total_pages(), 208);
    }
}
