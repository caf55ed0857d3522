// In-memory holder for one feed: last good value, sync status and TTL.
// A fetch takes a ticket from `begin`; only the newest ticket may land.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone)]
pub struct FeedSlot<T> {
    value: T,
    status: FeedStatus,
    last_sync: Option<DateTime<Utc>>,
    ttl: Duration,
    generation: u64,
}

impl<T: Clone> FeedSlot<T> {
    /// Slot showing `fallback` until the first successful sync
    pub fn new(fallback: T, ttl: Duration) -> Self {
        Self {
            value: fallback,
            status: FeedStatus::Idle,
            last_sync: None,
            ttl,
            generation: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }

    /// A synced value younger than the TTL
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.last_sync {
            Some(at) => now - at < self.ttl,
            None => false,
        }
    }

    /// Start a fetch; any fetch still in flight is superseded
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = FeedStatus::Loading;
        FetchTicket(self.generation)
    }

    /// Land a fetch result. Returns false if the ticket was superseded.
    /// Errors keep the previous value on screen.
    pub fn finish<E>(&mut self, ticket: FetchTicket, result: Result<T, E>, now: DateTime<Utc>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(value) => {
                self.value = value;
                self.status = FeedStatus::Ready;
                self.last_sync = Some(now);
            }
            Err(_) => {
                self.status = FeedStatus::Error;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 10, 14, minute, 0).unwrap()
    }

    #[test]
    fn test_fallback_until_first_sync() {
        let slot = FeedSlot::new(vec!["fallback"], Duration::minutes(12));
        assert_eq!(slot.value(), &vec!["fallback"]);
        assert_eq!(slot.status(), FeedStatus::Idle);
        assert!(!slot.is_fresh(at(0)));
    }

    #[test]
    fn test_ttl_expiry() {
        let mut slot = FeedSlot::new(0u32, Duration::minutes(12));
        let ticket = slot.begin();
        assert!(slot.finish::<()>(ticket, Ok(7), at(0)));
        assert_eq!(slot.status(), FeedStatus::Ready);
        assert!(slot.is_fresh(at(11)));
        assert!(!slot.is_fresh(at(12)));
    }

    #[test]
    fn test_newer_fetch_supersedes_older() {
        let mut slot = FeedSlot::new(0u32, Duration::minutes(45));
        let old = slot.begin();
        let new = slot.begin();
        assert!(slot.finish::<()>(new, Ok(2), at(1)));
        assert!(!slot.finish::<()>(old, Ok(1), at(2)));
        assert_eq!(*slot.value(), 2);
        assert_eq!(slot.last_sync(), Some(at(1)));
    }

    #[test]
    fn test_error_keeps_previous_value() {
        let mut slot = FeedSlot::new(0u32, Duration::minutes(45));
        let ticket = slot.begin();
        slot.finish::<()>(ticket, Ok(5), at(0));
        let ticket = slot.begin();
        assert!(slot.finish(ticket, Err("offline"), at(1)));
        assert_eq!(slot.status(), FeedStatus::Error);
        assert_eq!(*slot.value(), 5);
    }
}
