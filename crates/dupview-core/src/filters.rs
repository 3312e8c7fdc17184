//! Ordered set of active group-by attributes.

/// Result of toggling a filter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Activated,
    Deactivated,
}

/// Active filter names in activation order.
///
/// A name appears at most once. Re-activating a name that was switched off
/// places it at the end, making it the primary grouping attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilterSet {
    names: Vec<String>,
}

impl ActiveFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `name` when present, otherwise appends it.
    ///
    /// Any string is accepted; names absent from the records simply produce
    /// `undefined` key segments downstream.
    pub fn toggle(&mut self, name: &str) -> Toggle {
        if let Some(pos) = self.names.iter().position(|active| active == name) {
            self.names.remove(pos);
            Toggle::Deactivated
        } else {
            self.names.push(name.to_string());
            Toggle::Activated
        }
    }

    /// The most recently activated name.
    pub fn last_active(&self) -> Option<&str> {
        self.names.iter().last().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|active| active == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Name activated at position `index` (0 = first activated).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

impl<S: AsRef<str>> FromIterator<S> for ActiveFilterSet {
    /// Toggles each name in turn, so repeated names cancel out.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.toggle(name.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut filters = ActiveFilterSet::new();
        assert_eq!(filters.toggle("size"), Toggle::Activated);
        assert!(filters.contains("size"));
        assert_eq!(filters.toggle("size"), Toggle::Deactivated);
        assert!(filters.is_empty());
        assert_eq!(filters.last_active(), None);
    }

    #[test]
    fn reactivation_moves_name_to_end() {
        let mut filters = ActiveFilterSet::new();
        filters.toggle("size");
        filters.toggle("noOfToppings");
        assert_eq!(filters.last_active(), Some("noOfToppings"));

        filters.toggle("size");
        filters.toggle("size");
        assert_eq!(filters.iter().collect::<Vec<_>>(), vec!["noOfToppings", "size"]);
        assert_eq!(filters.last_active(), Some("size"));
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn unknown_names_are_accepted() {
        let mut filters = ActiveFilterSet::new();
        assert_eq!(filters.toggle("crust"), Toggle::Activated);
        assert_eq!(filters.get(0), Some("crust"));
    }

    #[test]
    fn clear_deactivates_everything() {
        let mut filters: ActiveFilterSet = ["size", "noOfToppings"].into_iter().collect();
        filters.clear();
        assert!(filters.is_empty());
        assert_eq!(filters.last_active(), None);
        assert_eq!(filters.toggle("size"), Toggle::Activated);
    }

    #[test]
    fn collect_toggles_in_order() {
        let filters: ActiveFilterSet = ["size", "noOfToppings", "size"].into_iter().collect();
        assert_eq!(filters.iter().collect::<Vec<_>>(), vec!["noOfToppings"]);
    }
}
