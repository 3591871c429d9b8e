//! Open/closed selection with deferred clearing
//!
//! Closing only lowers the open flag; the entity is kept until the owner
//! calls [`Selection::clear`] once the exit transition is over. Readers go
//! through [`Selection::current`], which is guarded on the open flag, so a
//! closing entity is never rendered again.

use crate::content::Skill;

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Open,
    /// Flag lowered, entity not cleared yet
    Closing,
}

#[derive(Debug, Clone)]
pub struct Selection<T> {
    entity: Option<T>,
    open: bool,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            entity: None,
            open: false,
        }
    }
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entity and raise the open flag. Re-opening while open
    /// (or closing) swaps the entity without a closed detour.
    pub fn open(&mut self, entity: T) {
        self.entity = Some(entity);
        self.open = true;
    }

    /// Lower the open flag. Returns false if it was already down.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Drop the entity of a closed selection. No effect while open.
    pub fn clear(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.entity.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        match (self.open, self.entity.is_some()) {
            (true, _) => Phase::Open,
            (false, true) => Phase::Closing,
            (false, false) => Phase::Closed,
        }
    }

    /// The selected entity, only while open
    pub fn current(&self) -> Option<&T> {
        self.entity.as_ref().filter(|_| self.is_open())
    }

    /// True once the entity reference has been dropped
    #[cfg(test)]
    pub fn is_cleared(&self) -> bool {
        self.entity.is_none()
    }
}

/// A skill together with the accent of the category it was picked from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSkill {
    pub skill: Skill,
    pub accent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_open_closing_closed() {
        let mut sel = Selection::new();
        assert_eq!(sel.phase(), Phase::Closed);

        sel.open("bwsc25");
        assert_eq!(sel.phase(), Phase::Open);
        assert_eq!(sel.current(), Some(&"bwsc25"));

        assert!(sel.close());
        assert_eq!(sel.phase(), Phase::Closing);
        assert_eq!(sel.current(), None);
        assert!(!sel.is_cleared());

        assert!(sel.clear());
        assert_eq!(sel.phase(), Phase::Closed);
        assert!(sel.is_cleared());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut sel: Selection<u8> = Selection::new();
        assert!(!sel.close());
        assert!(!sel.clear());
    }

    #[test]
    fn test_reopen_replaces_entity() {
        let mut sel = Selection::new();
        sel.open(1);
        sel.open(2);
        assert_eq!(sel.current(), Some(&2));

        sel.close();
        sel.open(3);
        assert_eq!(sel.phase(), Phase::Open);
        assert_eq!(sel.current(), Some(&3));
    }

    #[test]
    fn test_clear_ignored_while_open() {
        let mut sel = Selection::new();
        sel.open(1);
        assert!(!sel.clear());
        assert_eq!(sel.current(), Some(&1));
    }
}
