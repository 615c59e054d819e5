//! SelectionState - Cross-Page Row Selection
//!
//! The selection is keyed by artwork id and kept in insertion order,
//! independent of which page is currently displayed. The overlay panel that
//! hosts the "select first N rows" request is tracked here as an explicit
//! boolean instead of a widget handle, so the selection logic never touches
//! a presentation API.

use hashlink::LinkedHashMap;

use crate::domain::artwork::Artwork;

/// State for the selected rows and the auto-select overlay
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selected records in insertion order, keyed by id
    selected: LinkedHashMap<i64, Artwork>,
    /// Whether the row-count overlay panel is open
    panel_open: bool,
    /// Raw text of the requested-count input
    count_input: String,
    /// Whether an auto-select sequence is running
    selecting: bool,
}

impl SelectionState {
    /// Replace the whole selection. Membership is by id; a record with a
    /// duplicate id overwrites the earlier one.
    pub fn replace(&mut self, artworks: Vec<Artwork>) {
        self.selected = artworks.into_iter().map(|a| (a.id, a)).collect();
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected records in selection order
    pub fn artworks(&self) -> Vec<Artwork> {
        self.selected.values().cloned().collect()
    }

    /// Selected ids in selection order
    pub fn ids(&self) -> Vec<i64> {
        self.selected.keys().copied().collect()
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    pub fn set_count_input(&mut self, input: impl Into<String>) {
        self.count_input = input.into();
    }

    /// Parse the requested-count input. Empty, non-numeric and non-positive
    /// values mean "no request".
    pub fn requested_count(&self) -> Option<usize> {
        match self.count_input.trim().parse::<usize>() {
            Ok(n) if n > 0 => Some(n),
            _ => None,
        }
    }

    pub fn selecting(&self) -> bool {
        self.selecting
    }

    pub fn set_selecting(&mut self, selecting: bool) {
        self.selecting = selecting;
    }

    /// Install the result of an auto-select run: replace the selection,
    /// clear the input and close the panel.
    pub fn finish_auto_select(&mut self, artworks: Vec<Artwork>) {
        self.replace(artworks);
        self.count_input.clear();
        self.panel_open = false;
        self.selecting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: i64, title: &str) -> Artwork {
        Artwork {
            id,
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = SelectionState::default();
        state.replace(vec![artwork(1, "a"), artwork(2, "b")]);
        state.replace(vec![artwork(3, "c")]);

        assert_eq!(state.ids(), vec![3]);
        assert!(!state.is_selected(1));
    }

    #[test]
    fn test_membership_is_by_id_not_identity() {
        let mut state = SelectionState::default();
        state.replace(vec![artwork(7, "original title")]);

        // A redisplayed snapshot of the same record still counts as selected.
        assert!(state.is_selected(artwork(7, "revised title").id));
    }

    #[test]
    fn test_manual_toggle_three_of_twelve() {
        let page: Vec<Artwork> = (1..=12).map(|id| artwork(id, "row")).collect();
        let checked = vec![page[0].clone(), page[4].clone(), page[9].clone()];

        let mut state = SelectionState::default();
        state.replace(checked);

        assert_eq!(state.ids(), vec![1, 5, 10]);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let mut state = SelectionState::default();
        state.replace(vec![artwork(9, "z"), artwork(2, "y"), artwork(5, "x")]);
        assert_eq!(state.ids(), vec![9, 2, 5]);
    }

    #[test]
    fn test_requested_count_parsing() {
        let mut state = SelectionState::default();
        assert_eq!(state.requested_count(), None);

        state.set_count_input("20");
        assert_eq!(state.requested_count(), Some(20));

        state.set_count_input(" 7 ");
        assert_eq!(state.requested_count(), Some(7));

        state.set_count_input("0");
        assert_eq!(state.requested_count(), None);

        state.set_count_input("twelve");
        assert_eq!(state.requested_count(), None);

        state.set_count_input("-3");
        assert_eq!(state.requested_count(), None);
    }

    #[test]
    fn test_finish_auto_select_clears_input_and_closes_panel() {
        let mut state = SelectionState::default();
        state.toggle_panel();
        state.set_count_input("20");
        state.set_selecting(true);

        state.finish_auto_select(vec![artwork(1, "a"), artwork(2, "b")]);

        assert_eq!(state.len(), 2);
        assert_eq!(state.count_input(), "");
        assert!(!state.panel_open());
        assert!(!state.selecting());
    }
}
