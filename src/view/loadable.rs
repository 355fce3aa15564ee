use serde::Serialize;

/// Page data as it moves from request to result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "camelCase")]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

/// Handle for one outstanding fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Drops results that arrive after a newer fetch started or the page went away
#[derive(Debug, Default)]
pub struct FetchGuard {
    latest: u64,
    torn_down: bool,
}

impl FetchGuard {
    /// Start a fetch; any earlier ticket becomes stale
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// The page is gone; nothing outstanding may be applied
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        !self.torn_down && ticket.0 == self.latest
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
