use std::collections::VecDeque;

/// One write to the like counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeEvent {
    /// The liked flag was switched on.
    Liked,
    /// The liked flag was switched off.
    Unliked,
    /// The count was entered directly.
    Set(i64),
}

/// Recent events kept for inspection; older ones are folded away.
pub const HISTORY_LIMIT: usize = 16;

/// Ledger that the like count and liked flag are derived from.
///
/// Every writer records an event here instead of touching the count, so the
/// count has exactly one source. Liking applies `-1` and unliking applies
/// `+1`. Each event is folded into `count` and `liked` as it arrives; only
/// the events since the last [`LikeEvent::Set`] are kept, capped at
/// [`HISTORY_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LikeLedger {
    count: i64,
    liked: bool,
    history: VecDeque<LikeEvent>,
}

impl LikeLedger {
    /// Creates an empty ledger (count `0`, not liked).
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds an event into the count and flag.
    pub fn record(&mut self, event: LikeEvent) {
        match event {
            LikeEvent::Liked => {
                self.count = self.count.saturating_sub(1);
                self.liked = true;
            }
            LikeEvent::Unliked => {
                self.count = self.count.saturating_add(1);
                self.liked = false;
            }
            LikeEvent::Set(n) => {
                self.count = n;
                self.history.clear();
            }
        }
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(event);
    }

    /// Flips the liked flag, recording the matching event. Returns the new flag.
    pub fn toggle(&mut self) -> bool {
        self.record(if self.liked {
            LikeEvent::Unliked
        } else {
            LikeEvent::Liked
        });
        self.liked
    }

    /// Returns the current count.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Returns `true` if the last like/unlike event was a like.
    pub fn liked(&self) -> bool {
        self.liked
    }

    /// Returns the retained events, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &LikeEvent> {
        self.history.iter()
    }
}

/// Parses a user-entered like count.
///
/// Reads an optional sign followed by leading decimal digits, ignoring
/// surrounding whitespace and anything after the digits. Input without a
/// leading number (or one that overflows `i64`) yields `0`.
pub fn parse_like_count(input: &str) -> i64 {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    signed.parse().unwrap_or(0)
}
