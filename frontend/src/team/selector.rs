//! Which team member is featured, and in what order the rest orbit them.
//!
//! The display order is kept as indices into the roster. It is always a
//! rotation of `0..roster.len()` with the active member in front.

use super::roster::RosterEntry;

/// Result of a selection that actually changed the featured member.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionChange {
    /// Roster index of the new active member.
    pub active: usize,
    /// Playback position the video should jump to, set for manual picks.
    pub seek_to: Option<f64>,
}

/// Roster index of the member whose segment is playing at `time`: the
/// latest timestamp not after `time`.
pub fn select_for_time(roster: &[RosterEntry], time: f64) -> Option<usize> {
    roster
        .iter()
        .enumerate()
        .filter(|(_, member)| member.video_timestamp_seconds <= time)
        .max_by(|(_, a), (_, b)| a.video_timestamp_seconds.total_cmp(&b.video_timestamp_seconds))
        .map(|(idx, _)| idx)
}

#[derive(Clone, Debug, PartialEq)]
pub struct MemberSelector<'a> {
    roster: &'a [RosterEntry],
    order: Vec<usize>,
}

impl<'a> MemberSelector<'a> {
    pub fn new(roster: &'a [RosterEntry]) -> Self {
        Self {
            roster,
            order: (0..roster.len()).collect(),
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.order.first().copied()
    }

    pub fn active(&self) -> Option<&'a RosterEntry> {
        self.active_index().map(|idx| &self.roster[idx])
    }

    /// Members in display order, active first.
    pub fn display_order(&self) -> impl Iterator<Item = &'a RosterEntry> + '_ {
        self.order.iter().map(|&idx| &self.roster[idx])
    }

    /// Apply a playback tick. Returns `None` when the featured member stays
    /// the same, including when `time` precedes every segment.
    pub fn advance_to(&mut self, time: f64) -> Option<SelectionChange> {
        let next = select_for_time(self.roster, time)?;
        if Some(next) == self.active_index() {
            return None;
        }
        self.rotate_to(next);
        Some(SelectionChange { active: next, seek_to: None })
    }

    /// Feature the member called `name`. Unknown names change nothing; the
    /// already active member keeps the order but still reports a seek.
    pub fn select_member(&mut self, name: &str) -> Option<SelectionChange> {
        let next = self.roster.iter().position(|member| member.name == name)?;
        if Some(next) != self.active_index() {
            self.rotate_to(next);
        }
        Some(SelectionChange {
            active: next,
            seek_to: Some(self.roster[next].video_timestamp_seconds),
        })
    }

    // Rotates the current order, not the canonical roster, so successive
    // selections compose.
    fn rotate_to(&mut self, roster_idx: usize) {
        if let Some(pos) = self.order.iter().position(|&idx| idx == roster_idx) {
            self.order.rotate_left(pos);
        }
        log::debug!("Active member is now {}", self.roster[roster_idx].name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::roster::ROSTER;

    fn names(selector: &MemberSelector) -> Vec<&'static str> {
        selector.display_order().map(|m| m.name).collect()
    }

    fn entry(name: &'static str, at: f64) -> RosterEntry {
        RosterEntry {
            name,
            role: "",
            image_url: "",
            video_timestamp_seconds: at,
            timezone_label: "UTC",
            zone: chrono_tz::UTC,
        }
    }

    #[test]
    fn starts_with_first_member_active_in_canonical_order() {
        let selector = MemberSelector::new(ROSTER);
        assert_eq!(selector.active().map(|m| m.name), Some("Abel Ortega"));
        assert_eq!(names(&selector), ["Abel Ortega", "Alex Avila", "Mateo Vilchez", "Belen Ramos"]);
    }

    #[test]
    fn picks_latest_segment_started() {
        assert_eq!(select_for_time(ROSTER, 4.9), None);
        assert_eq!(select_for_time(ROSTER, 5.0), Some(0));
        assert_eq!(select_for_time(ROSTER, 96.99), Some(0));
        assert_eq!(select_for_time(ROSTER, 100.0), Some(1));
        assert_eq!(select_for_time(ROSTER, 175.0), Some(2));
        assert_eq!(select_for_time(ROSTER, 10_000.0), Some(3));
    }

    #[test]
    fn selection_does_not_depend_on_roster_order() {
        let shuffled = [entry("C", 175.0), entry("A", 5.0), entry("D", 389.0), entry("B", 97.0)];
        assert_eq!(select_for_time(&shuffled, 100.0), Some(3));
        assert_eq!(select_for_time(&shuffled, 400.0), Some(2));
    }

    #[test]
    fn tick_at_100_features_second_member_and_rotates() {
        let roster = [entry("A", 5.0), entry("B", 97.0), entry("C", 175.0), entry("D", 389.0)];
        let mut selector = MemberSelector::new(&roster);

        let change = selector.advance_to(100.0);

        assert_eq!(change, Some(SelectionChange { active: 1, seek_to: None }));
        assert_eq!(names(&selector), ["B", "C", "D", "A"]);
        assert_eq!(selector.active().map(|m| m.name), Some("B"));
    }

    #[test]
    fn tick_before_every_segment_keeps_current_member() {
        let roster = [entry("A", 5.0), entry("B", 97.0)];
        let mut selector = MemberSelector::new(&roster);
        selector.select_member("B");

        assert_eq!(selector.advance_to(1.0), None);
        assert_eq!(selector.active().map(|m| m.name), Some("B"));
    }

    #[test]
    fn repeated_ticks_in_same_segment_are_quiet() {
        let mut selector = MemberSelector::new(ROSTER);
        assert!(selector.advance_to(98.0).is_some());
        assert_eq!(selector.advance_to(99.0), None);
        assert_eq!(selector.advance_to(174.0), None);
    }

    #[test]
    fn manual_pick_reports_seek_target() {
        let roster = [entry("A", 5.0), entry("B", 97.0), entry("C", 175.0), entry("D", 389.0)];
        let mut selector = MemberSelector::new(&roster);
        selector.advance_to(50.0);

        let change = selector.select_member("D");

        assert_eq!(change, Some(SelectionChange { active: 3, seek_to: Some(389.0) }));
        assert_eq!(names(&selector), ["D", "A", "B", "C"]);
        // playback jumped to 389s, ticks from there keep D
        assert_eq!(selector.advance_to(389.0), None);
        assert_eq!(selector.advance_to(390.0), None);
    }

    #[test]
    fn unknown_member_pick_is_ignored() {
        let mut selector = MemberSelector::new(ROSTER);
        selector.advance_to(120.0);

        assert_eq!(selector.select_member("Nobody"), None);
        assert_eq!(selector.active_index(), Some(1));
    }

    #[test]
    fn picking_active_member_again_seeks_without_rotating() {
        let mut selector = MemberSelector::new(ROSTER);
        selector.advance_to(120.0);

        let change = selector.select_member("Alex Avila");

        assert_eq!(change, Some(SelectionChange { active: 1, seek_to: Some(97.0) }));
        assert_eq!(names(&selector), ["Alex Avila", "Mateo Vilchez", "Belen Ramos", "Abel Ortega"]);
    }

    #[test]
    fn rotations_compose_against_current_order() {
        let roster = [entry("A", 5.0), entry("B", 97.0), entry("C", 175.0), entry("D", 389.0)];
        let mut selector = MemberSelector::new(&roster);

        selector.select_member("C");
        assert_eq!(names(&selector), ["C", "D", "A", "B"]);
        selector.select_member("B");
        assert_eq!(names(&selector), ["B", "C", "D", "A"]);
        selector.advance_to(400.0);
        assert_eq!(names(&selector), ["D", "A", "B", "C"]);
    }

    #[test]
    fn display_order_stays_a_rotation_of_the_roster() {
        let mut selector = MemberSelector::new(ROSTER);
        let steps: [&dyn Fn(&mut MemberSelector); 6] = [
            &|s| { s.advance_to(200.0); },
            &|s| { s.select_member("Alex Avila"); },
            &|s| { s.advance_to(390.0); },
            &|s| { s.select_member("Abel Ortega"); },
            &|s| { s.advance_to(2.0); },
            &|s| { s.advance_to(120.0); },
        ];

        for step in steps {
            step(&mut selector);
            let order: Vec<usize> = selector
                .display_order()
                .map(|m| ROSTER.iter().position(|r| r == m).unwrap())
                .collect();
            let active = order[0];
            let expected: Vec<usize> = (0..ROSTER.len()).map(|k| (active + k) % ROSTER.len()).collect();
            assert_eq!(order, expected);
            assert_eq!(selector.active_index(), Some(active));
        }
    }

    #[test]
    fn empty_roster_never_selects() {
        let mut selector = MemberSelector::new(&[]);
        assert_eq!(selector.active(), None);
        assert_eq!(selector.advance_to(100.0), None);
        assert_eq!(selector.select_member("A"), None);
    }
}
