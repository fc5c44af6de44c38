use crate::model::{Roster, RosterEntry, SortDirection, SortKey};
use std::cell::RefCell;
use std::rc::Rc;

/// Counts plus the current filter/sort view
#[derive(Debug, Clone)]
pub struct RosterStore {
    roster: Roster,
    /// Case-insensitive substring filter
    filter: String,
    /// None until a column is picked; the list shows by name meanwhile
    sort_key: Option<SortKey>,
    sort_direction: SortDirection,
}

impl RosterStore {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            filter: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
        }
    }

    /// Wrap for sharing between GTK callbacks
    pub fn shared(roster: Roster) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(roster)))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Key the view is ordered by
    pub fn sort_key(&self) -> SortKey {
        self.sort_key.unwrap_or(SortKey::Name)
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Add `delta` to a count, flooring at zero. Unknown names are ignored.
    pub fn adjust(&mut self, name: &str, delta: i32) -> Option<u32> {
        let Some(entry) = self.roster.entry_mut(name) else {
            tracing::debug!(name, delta, "ignoring adjustment for unknown name");
            return None;
        };
        let updated = (i64::from(entry.count) + i64::from(delta)).clamp(0, i64::from(u32::MAX));
        entry.count = updated as u32;
        Some(entry.count)
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_string();
    }

    /// Same key flips direction, a new key starts ascending
    pub fn set_sort_key(&mut self, key: SortKey) {
        if self.sort_key == Some(key) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Entries passing the filter, in display order
    pub fn view(&self) -> Vec<RosterEntry> {
        let needle = self.filter.to_lowercase();
        let mut visible: Vec<RosterEntry> = self
            .roster
            .entries()
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        // Stable sort, so ties stay in catalog order either way
        let key = self.sort_key();
        let direction = self.sort_direction;
        visible.sort_by(|a, b| {
            let ord = match key {
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Count => a.count.cmp(&b.count),
            };
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    fn store(names: &[&str]) -> RosterStore {
        RosterStore::new(Roster::zeroed(&Catalog::new(names.iter().copied())))
    }

    fn pairs(view: &[RosterEntry]) -> Vec<(&str, u32)> {
        view.iter().map(|e| (e.name.as_str(), e.count)).collect()
    }

    #[test]
    fn decrement_from_zero_stays_zero() {
        let catalog = Catalog::default();
        let mut store = RosterStore::new(Roster::zeroed(&catalog));
        for name in catalog.names() {
            assert_eq!(store.adjust(name, -1), Some(0));
            assert_eq!(store.roster().get(name), Some(0));
        }
    }

    #[test]
    fn clamping_applies_at_every_step() {
        let mut store = store(&["Hades"]);
        let deltas = [1, -1, -1, -1, 1, 1, -1, 1, 1];
        let mut expected: i64 = 0;
        for delta in deltas {
            expected = (expected + i64::from(delta)).max(0);
            store.adjust("Hades", delta);
        }
        // Plain sum would be 1; floored running sum is 3
        assert_eq!(expected, 3);
        assert_eq!(store.roster().get("Hades"), Some(3));
    }

    #[test]
    fn count_saturates_at_max() {
        let mut roster = Roster::zeroed(&Catalog::new(["Hades"]));
        roster.set("Hades", u32::MAX);
        let mut store = RosterStore::new(roster);
        assert_eq!(store.adjust("Hades", 1), Some(u32::MAX));
    }

    #[test]
    fn adjusting_unknown_name_changes_nothing() {
        let mut store = store(&["Hades", "Zeus"]);
        let before = store.roster().clone();
        assert_eq!(store.adjust("Thanatos", 1), None);
        assert_eq!(store.roster(), &before);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut store = RosterStore::new(Roster::zeroed(&Catalog::default()));
        store.set_filter("zeu");
        assert_eq!(pairs(&store.view()), vec![("Zeus", 0)]);

        store.set_filter("HE");
        let names: Vec<String> = store.view().into_iter().map(|e| e.name).collect();
        assert!(!names.is_empty());
        assert!(names.iter().all(|n| n.to_lowercase().contains("he")));
        assert!(names.contains(&"Hecate".to_string()));
        assert!(names.contains(&"Hephaestus".to_string()));
    }

    #[test]
    fn empty_filter_shows_everything() {
        let store = RosterStore::new(Roster::zeroed(&Catalog::default()));
        assert_eq!(store.view().len(), 33);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let mut store = store(&["Hades", "Zeus"]);
        store.set_filter("xyz");
        assert!(store.view().is_empty());
    }

    #[test]
    fn starts_by_name_ascending() {
        let store = store(&["Zeus", "Apollo", "Hera"]);
        assert_eq!(store.sort_key(), SortKey::Name);
        assert_eq!(store.sort_direction(), SortDirection::Ascending);
        assert_eq!(
            pairs(&store.view()),
            vec![("Apollo", 0), ("Hera", 0), ("Zeus", 0)]
        );
    }

    #[test]
    fn repeated_name_sort_toggles_direction() {
        let mut store = store(&["Zeus", "Apollo", "Hera"]);

        store.set_sort_key(SortKey::Name);
        assert_eq!(store.sort_direction(), SortDirection::Ascending);
        assert_eq!(
            pairs(&store.view()),
            vec![("Apollo", 0), ("Hera", 0), ("Zeus", 0)]
        );

        store.set_sort_key(SortKey::Name);
        assert_eq!(store.sort_direction(), SortDirection::Descending);
        assert_eq!(
            pairs(&store.view()),
            vec![("Zeus", 0), ("Hera", 0), ("Apollo", 0)]
        );
    }

    #[test]
    fn switching_key_resets_to_ascending() {
        let mut store = store(&["Hades"]);
        store.set_sort_key(SortKey::Name);
        store.set_sort_key(SortKey::Name);
        assert_eq!(store.sort_direction(), SortDirection::Descending);
        store.set_sort_key(SortKey::Count);
        assert_eq!(store.sort_key(), SortKey::Count);
        assert_eq!(store.sort_direction(), SortDirection::Ascending);
    }

    #[test]
    fn count_sort_descending_puts_highest_first() {
        let mut store = RosterStore::new(Roster::zeroed(&Catalog::default()));
        for _ in 0..3 {
            store.adjust("Hades", 1);
        }
        store.adjust("Zeus", 1);

        store.set_sort_key(SortKey::Count);
        store.set_sort_key(SortKey::Count);
        assert_eq!(store.sort_direction(), SortDirection::Descending);

        let view = store.view();
        assert_eq!(view.len(), 33);
        assert_eq!(pairs(&view[..2]), vec![("Hades", 3), ("Zeus", 1)]);
        assert!(view[2..].iter().all(|e| e.count == 0));
    }

    #[test]
    fn ties_keep_catalog_order_in_both_directions() {
        let mut store = store(&["Hera", "Apollo", "Zeus", "Echo"]);
        store.adjust("Zeus", 2);

        store.set_sort_key(SortKey::Count);
        assert_eq!(
            pairs(&store.view()),
            vec![("Hera", 0), ("Apollo", 0), ("Echo", 0), ("Zeus", 2)]
        );

        store.set_sort_key(SortKey::Count);
        assert_eq!(
            pairs(&store.view()),
            vec![("Zeus", 2), ("Hera", 0), ("Apollo", 0), ("Echo", 0)]
        );
    }

    #[test]
    fn view_does_not_reorder_roster() {
        let mut store = store(&["Zeus", "Apollo"]);
        store.set_sort_key(SortKey::Name);
        let _ = store.view();
        let names: Vec<&str> = store
            .roster()
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeus", "Apollo"]);
    }
}
