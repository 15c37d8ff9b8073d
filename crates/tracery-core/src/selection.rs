//! Selection state: the selected shapes, the primary one, and the hovered one.

use crate::shapes::ShapeId;

/// Which shapes are selected and hovered.
///
/// Selected IDs keep their insertion order. The primary shape is the most
/// recently selected one still in the set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Vec<ShapeId>,
    primary: Option<ShapeId>,
    hovered: Option<ShapeId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with a single shape.
    pub fn select(&mut self, id: ShapeId) {
        self.selected.clear();
        self.selected.push(id);
        self.primary = Some(id);
    }

    /// Add a shape, making it primary.
    pub fn add(&mut self, id: ShapeId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
        self.primary = Some(id);
    }

    /// Remove a shape. If it was primary, the last remaining shape becomes
    /// primary.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.selected.iter().position(|&s| s == id) else {
            return false;
        };
        self.selected.remove(index);
        if self.primary == Some(id) {
            self.primary = self.selected.last().copied();
        }
        true
    }

    /// Add the shape if unselected, remove it otherwise. Returns whether it
    /// is now selected.
    pub fn toggle(&mut self, id: ShapeId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Replace the selection with `ids`, in order.
    pub fn set(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        self.clear();
        for id in ids {
            self.add(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.primary = None;
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &[ShapeId] {
        &self.selected
    }

    pub fn primary(&self) -> Option<ShapeId> {
        self.primary
    }

    pub fn hovered(&self) -> Option<ShapeId> {
        self.hovered
    }

    /// Set the hovered shape. Returns whether it changed.
    pub fn set_hovered(&mut self, id: Option<ShapeId>) -> bool {
        let changed = self.hovered != id;
        self.hovered = id;
        changed
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_select_replaces() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut selection = SelectionState::new();
        selection.select(a);
        selection.select(b);
        assert_eq!(selection.selected(), &[b]);
        assert_eq!(selection.primary(), Some(b));
    }

    #[test]
    fn test_toggle() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut selection = SelectionState::new();
        assert!(selection.toggle(a));
        assert!(selection.toggle(b));
        assert_eq!(selection.selected(), &[a, b]);
        assert_eq!(selection.primary(), Some(b));

        assert!(!selection.toggle(b));
        assert_eq!(selection.primary(), Some(a));
        assert!(!selection.toggle(a));
        assert!(selection.is_empty());
        assert_eq!(selection.primary(), None);
    }

    #[test]
    fn test_add_is_idempotent() {
        let a = Uuid::new_v4();
        let mut selection = SelectionState::new();
        selection.add(a);
        selection.add(a);
        assert_eq!(selection.len(), 1);
        assert!(!selection.remove(Uuid::new_v4()));
    }

    #[test]
    fn test_hover() {
        let a = Uuid::new_v4();
        let mut selection = SelectionState::new();
        assert!(selection.set_hovered(Some(a)));
        assert!(!selection.set_hovered(Some(a)));
        assert_eq!(selection.hovered(), Some(a));
        assert!(selection.set_hovered(None));
        assert!(!selection.is_selected(a));
    }
}
