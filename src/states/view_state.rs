//! Page View-State Logic
//!
//! The showcase pages hold their state as plain fields. The few pieces that
//! are more than a single assignment live here so they can be unit-tested
//! without opening a window.

/// Three independent booleans with a cosmetic derived parent display.
///
/// Used by the checkbox page (parent/children indeterminate demo and the
/// "pick exactly two" validation group) and by the switch page settings
/// group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriState {
    children: [bool; 3],
}

impl TriState {
    pub fn new(a: bool, b: bool, c: bool) -> Self {
        Self { children: [a, b, c] }
    }

    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < 3, "TriState index out of range: {index}");
        self.children[index]
    }

    pub fn set(&mut self, index: usize, value: bool) {
        debug_assert!(index < 3, "TriState index out of range: {index}");
        self.children[index] = value;
    }

    pub fn toggle(&mut self, index: usize) {
        debug_assert!(index < 3, "TriState index out of range: {index}");
        self.children[index] = !self.children[index];
    }

    /// Set all three children at once (parent checkbox click)
    pub fn set_all(&mut self, value: bool) {
        self.children = [value; 3];
    }

    pub fn all_checked(&self) -> bool {
        self.children.iter().all(|c| *c)
    }

    pub fn none_checked(&self) -> bool {
        self.children.iter().all(|c| !*c)
    }

    /// The parent displays indeterminate exactly when the children are
    /// neither all true nor all false.
    pub fn indeterminate(&self) -> bool {
        !self.all_checked() && !self.none_checked()
    }

    pub fn checked_count(&self) -> usize {
        self.children.iter().filter(|c| **c).count()
    }

    /// The "pick exactly two" demo shows its error text when this is false.
    pub fn exactly_two(&self) -> bool {
        self.checked_count() == 2
    }
}

/// A dismissible display item with a stable key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagItem {
    pub key: usize,
    pub label: &'static str,
}

/// A list of dismissible tags, mutated only by removing an entry by key
#[derive(Debug, Clone, Default)]
pub struct TagList {
    items: Vec<TagItem>,
}

impl TagList {
    pub fn new(labels: &[&'static str]) -> Self {
        Self {
            items: labels
                .iter()
                .enumerate()
                .map(|(key, label)| TagItem { key, label })
                .collect(),
        }
    }

    pub fn items(&self) -> &[TagItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove the entry with the given key, keeping the rest in order
    pub fn dismiss(&mut self, key: usize) {
        self.items.retain(|item| item.key != key);
    }
}

/// Hour and minute pair for the time picker demos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeValue {
    pub hour: u32,
    pub minute: u32,
}

impl TimeValue {
    pub fn new(hour: u32, minute: u32) -> Self {
        debug_assert!(hour < 24 && minute < 60, "invalid time {hour}:{minute}");
        Self { hour, minute }
    }

    /// 24-hour clock label, e.g. "14:05"
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// 12-hour clock label, e.g. "2:05 PM"
    pub fn label_12h(&self) -> String {
        let period = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        format!("{}:{:02} {}", hour, self.minute, period)
    }
}

/// Fixed numeric rating to text label lookup used by the rating page
pub fn rating_label(value: u8) -> &'static str {
    match value {
        1 => "Useless+",
        2 => "Poor+",
        3 => "Ok+",
        4 => "Good+",
        5 => "Excellent+",
        _ => "",
    }
}

/// Accessible description for a star value, e.g. "3 Stars, Ok+"
pub fn rating_text(value: u8) -> String {
    let plural = if value == 1 { "Star" } else { "Stars" };
    format!("{} {}, {}", value, plural, rating_label(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tri_state_parent_display() {
        let mut tri = TriState::new(false, false, false);
        assert!(!tri.indeterminate());
        assert!(!tri.all_checked());

        tri.set(0, true);
        assert!(tri.indeterminate());

        tri.set(1, true);
        tri.set(2, true);
        assert!(tri.all_checked());
        assert!(!tri.indeterminate());
    }

    #[test]
    fn test_tri_state_set_all() {
        let mut tri = TriState::new(true, false, true);
        tri.set_all(true);
        assert!(tri.all_checked());
        tri.set_all(false);
        assert!(tri.none_checked());
    }

    #[test]
    fn test_exactly_two_validation() {
        let mut tri = TriState::new(true, false, false);
        assert!(!tri.exactly_two());

        tri.set(1, true);
        assert!(tri.exactly_two());

        tri.set(2, true);
        assert!(!tri.exactly_two());
    }

    #[test]
    #[should_panic(expected = "TriState index out of range")]
    fn test_tri_state_rejects_out_of_range_index() {
        let tri = TriState::new(false, false, false);
        tri.get(3);
    }

    #[test]
    fn test_tag_dismiss_preserves_order() {
        let mut tags = TagList::new(&["Angular", "jQuery", "Polymer", "React", "Vue.js"]);
        tags.dismiss(2);

        let labels: Vec<_> = tags.items().iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Angular", "jQuery", "React", "Vue.js"]);
    }

    #[test]
    fn test_tag_dismiss_unknown_key_is_noop() {
        let mut tags = TagList::new(&["One", "Two"]);
        tags.dismiss(99);
        assert_eq!(tags.items().len(), 2);
    }

    #[test]
    fn test_time_labels() {
        assert_eq!(TimeValue::new(14, 5).label(), "14:05");
        assert_eq!(TimeValue::new(14, 5).label_12h(), "2:05 PM");
        assert_eq!(TimeValue::new(0, 0).label_12h(), "12:00 AM");
        assert_eq!(TimeValue::new(12, 30).label_12h(), "12:30 PM");
        assert_eq!(TimeValue::new(9, 0).label(), "09:00");
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(rating_label(1), "Useless+");
        assert_eq!(rating_label(5), "Excellent+");
        assert_eq!(rating_label(0), "");
        assert_eq!(rating_text(1), "1 Star, Useless+");
        assert_eq!(rating_text(4), "4 Stars, Good+");
    }
}
