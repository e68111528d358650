//! Selection buffer for the link toggle gesture.
//!
//! A modifier-held click on a shape is a *qualifying* click. Two qualifying
//! clicks on different shapes produce a pair to connect or disconnect; any other
//! click clears the buffer.

use crate::shape::ShapeId;

/// State of the link toggle gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkSelection {
    /// Nothing selected
    #[default]
    Idle,
    /// One shape is waiting for a partner
    OneSelected(ShapeId),
}

impl LinkSelection {
    /// Feeds one click into the gesture.
    ///
    /// # Arguments
    ///
    /// * `hit` - The shape under the pointer, if any
    /// * `modifier` - Whether the link modifier key was held
    ///
    /// # Returns
    ///
    /// The completed pair when the click finishes a gesture, `None` otherwise.
    pub fn click(&mut self, hit: Option<ShapeId>, modifier: bool) -> Option<(ShapeId, ShapeId)> {
        let Some(shape) = hit.filter(|_| modifier) else {
            *self = LinkSelection::Idle;
            return None;
        };

        match *self {
            LinkSelection::Idle => {
                *self = LinkSelection::OneSelected(shape);
                None
            }
            LinkSelection::OneSelected(first) => {
                *self = LinkSelection::Idle;
                if first == shape {
                    None
                } else {
                    Some((first, shape))
                }
            }
        }
    }

    /// The shape waiting in the buffer, if any.
    pub fn pending(&self) -> Option<ShapeId> {
        match self {
            LinkSelection::Idle => None,
            LinkSelection::OneSelected(id) => Some(*id),
        }
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        *self = LinkSelection::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn two_qualifying_clicks_complete_a_pair() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut sel = LinkSelection::default();
        assert_eq!(sel.click(Some(a), true), None);
        assert_eq!(sel, LinkSelection::OneSelected(a));
        assert_eq!(sel.click(Some(b), true), Some((a, b)));
        assert_eq!(sel, LinkSelection::Idle);
    }

    #[test]
    fn clicking_the_same_shape_twice_resets() {
        let a = Uuid::new_v4();
        let mut sel = LinkSelection::default();
        sel.click(Some(a), true);
        assert_eq!(sel.click(Some(a), true), None);
        assert_eq!(sel, LinkSelection::Idle);
    }

    #[test]
    fn unmodified_or_empty_clicks_clear_the_buffer() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut sel = LinkSelection::default();

        sel.click(Some(a), true);
        assert_eq!(sel.click(Some(b), false), None);
        assert_eq!(sel.pending(), None);

        sel.click(Some(a), true);
        assert_eq!(sel.click(None, true), None);
        assert_eq!(sel.pending(), None);
    }
}
