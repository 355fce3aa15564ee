use std::sync::atomic::{AtomicUsize, Ordering};

/// Background-scroll suppression flag, held while any modal is open
#[derive(Debug)]
pub struct ScrollFlag {
    holders: AtomicUsize,
}

impl ScrollFlag {
    pub const fn new() -> Self {
        Self {
            holders: AtomicUsize::new(0),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }
}

impl Default for ScrollFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// The page body's scroll flag
pub static BODY_SCROLL: ScrollFlag = ScrollFlag::new();

/// Hold on a [`ScrollFlag`]; released on drop
#[derive(Debug)]
pub struct ScrollLock {
    flag: &'static ScrollFlag,
}

impl ScrollLock {
    pub fn acquire(flag: &'static ScrollFlag) -> Self {
        flag.holders.fetch_add(1, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.flag.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug)]
struct OpenModal<T> {
    record: T,
    _scroll: ScrollLock,
}

/// Detail overlay: closed, or open on exactly one record
#[derive(Debug)]
pub struct ModalState<T> {
    flag: &'static ScrollFlag,
    open: Option<OpenModal<T>>,
}

impl<T> ModalState<T> {
    pub fn new() -> Self {
        Self::with_flag(&BODY_SCROLL)
    }

    pub fn with_flag(flag: &'static ScrollFlag) -> Self {
        Self { flag, open: None }
    }

    /// Show `record`, replacing whatever was shown
    pub fn open(&mut self, record: T) {
        self.open = Some(OpenModal {
            record,
            _scroll: ScrollLock::acquire(self.flag),
        });
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// The record to render, present exactly while open
    pub fn selected(&self) -> Option<&T> {
        self.open.as_ref().map(|modal| &modal.record)
    }
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close() {
        static FLAG: ScrollFlag = ScrollFlag::new();
        let mut modal = ModalState::with_flag(&FLAG);
        assert!(modal.selected().is_none());

        modal.open("bracket");
        assert!(modal.is_open());
        assert_eq!(modal.selected(), Some(&"bracket"));
        assert!(FLAG.is_locked());

        modal.close();
        assert!(modal.selected().is_none());
        assert!(!FLAG.is_locked());
    }

    #[test]
    fn test_reopen_keeps_single_hold() {
        static FLAG: ScrollFlag = ScrollFlag::new();
        let mut modal = ModalState::with_flag(&FLAG);
        modal.open(1);
        modal.open(2);
        assert_eq!(modal.selected(), Some(&2));
        modal.close();
        assert!(!FLAG.is_locked());
    }

    #[test]
    fn test_drop_while_open_releases() {
        static FLAG: ScrollFlag = ScrollFlag::new();
        {
            let mut modal = ModalState::with_flag(&FLAG);
            modal.open("shaft");
            assert!(FLAG.is_locked());
        }
        assert!(!FLAG.is_locked());
    }

    #[test]
    fn test_two_modals_share_flag() {
        static FLAG: ScrollFlag = ScrollFlag::new();
        let mut first = ModalState::with_flag(&FLAG);
        let mut second = ModalState::with_flag(&FLAG);
        first.open('a');
        second.open('b');
        first.close();
        assert!(FLAG.is_locked());
        second.close();
        assert!(!FLAG.is_locked());
    }
}
