/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Single-select-with-toggle-off semantics for the channel breakdown.

/// Clicking the already-selected item clears the selection; clicking any
/// other item replaces it. At most one item is ever selected.
pub fn toggle_selection(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_selection;

    #[test]
    fn selecting_twice_clears() {
        let selected = toggle_selection(None, 2);
        assert_eq!(selected, Some(2));
        assert_eq!(toggle_selection(selected, 2), None);
    }

    #[test]
    fn selecting_another_replaces_never_accumulates() {
        let selected = toggle_selection(None, 0);
        assert_eq!(toggle_selection(selected, 3), Some(3));
    }

    #[test]
    fn clicking_same_item_twice_from_empty_round_trips() {
        let once = toggle_selection(None, 1);
        let twice = toggle_selection(once, 1);
        assert_eq!(twice, None);
    }
}
