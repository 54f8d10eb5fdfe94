//! Outcomes of user input on a switch bar

/// What a click or key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabEvent {
    /// The selection was written with this index
    Selected(usize),
    /// The leading accessory of this segment was tapped
    LeadingTapped(usize),
}

impl TabEvent {
    /// Segment the event refers to
    pub fn index(self) -> usize {
        match self {
            TabEvent::Selected(index) | TabEvent::LeadingTapped(index) => index,
        }
    }

    /// Whether the event wrote the selection
    pub fn is_selection(self) -> bool {
        matches!(self, TabEvent::Selected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        assert_eq!(TabEvent::Selected(3).index(), 3);
        assert_eq!(TabEvent::LeadingTapped(1).index(), 1);
    }

    #[test]
    fn test_is_selection() {
        assert!(TabEvent::Selected(0).is_selection());
        assert!(!TabEvent::LeadingTapped(0).is_selection());
    }
}
