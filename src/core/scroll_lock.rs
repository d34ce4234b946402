//! Reference-counted body scroll lock.
//!
//! The mobile drawer and the auth modal both lock page scrolling, and one
//! click can close the first while opening the second. Counting holders keeps
//! the page locked until the last one lets go.

/// What the caller should do to the page after a lock change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockChange {
    Lock,
    Unlock,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLockCounter {
    holders: u32,
}

impl ScrollLockCounter {
    pub const fn new() -> Self {
        Self { holders: 0 }
    }

    pub fn acquire(&mut self) -> LockChange {
        self.holders += 1;
        if self.holders == 1 {
            LockChange::Lock
        } else {
            LockChange::Unchanged
        }
    }

    /// Releasing with no holder is a no-op
    pub fn release(&mut self) -> LockChange {
        match self.holders {
            0 => LockChange::Unchanged,
            1 => {
                self.holders = 0;
                LockChange::Unlock
            }
            _ => {
                self.holders -= 1;
                LockChange::Unchanged
            }
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_holder() {
        let mut lock = ScrollLockCounter::new();

        assert_eq!(lock.acquire(), LockChange::Lock);
        assert!(lock.is_locked());
        assert_eq!(lock.release(), LockChange::Unlock);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_nested_holders_unlock_on_last_release() {
        let mut lock = ScrollLockCounter::new();

        assert_eq!(lock.acquire(), LockChange::Lock);
        assert_eq!(lock.acquire(), LockChange::Unchanged);
        assert_eq!(lock.release(), LockChange::Unchanged);
        assert!(lock.is_locked());
        assert_eq!(lock.release(), LockChange::Unlock);
    }

    #[test]
    fn test_drawer_to_modal_handoff_stays_locked() {
        let mut lock = ScrollLockCounter::new();

        // drawer open
        lock.acquire();
        // modal opens before the drawer's release runs
        assert_eq!(lock.acquire(), LockChange::Unchanged);
        assert_eq!(lock.release(), LockChange::Unchanged);
        assert!(lock.is_locked());
    }

    #[test]
    fn test_over_release_is_noop() {
        let mut lock = ScrollLockCounter::new();

        assert_eq!(lock.release(), LockChange::Unchanged);
        assert!(!lock.is_locked());
        assert_eq!(lock.acquire(), LockChange::Lock);
    }
}
