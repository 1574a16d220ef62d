use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use x12_hl::{HlId, HlResult, HlTracker, LevelCode};
use x12_types::Segment;

/// Running totals available to deferred segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of every amount recorded with [`Body::push_line`] or
    /// [`Body::add_amount`], in cents.
    pub amount_cents: i64,
    /// Number of segments pushed with [`Body::push_line`].
    pub lines: usize,
    /// Number of HL levels opened through the body.
    pub hl_levels: usize,
    /// Number of body segments, deferred ones included.
    pub segments: usize,
}

impl Totals {
    /// Amount as a decimal string with two places (`1234` -> `12.34`).
    pub fn amount_decimal(&self) -> String {
        format_cents(self.amount_cents)
    }
}

/// Render integer cents as a two-place decimal string.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

type Deferred = Box<dyn FnOnce(&Totals) -> Segment + Send>;

enum Entry {
    Ready(Segment),
    Deferred(Deferred),
    Level(HlId),
}

/// An ordered transaction-set body under construction.
///
/// Segments whose content depends on values only known later (a payment total
/// that precedes the claims it sums, an `HL04` child flag) are pushed as
/// deferred entries and resolved by [`finish`](Body::finish), so the body never
/// needs a placeholder that is patched in place.
#[derive(Default)]
pub struct Body {
    entries: Vec<Entry>,
    amount_cents: i64,
    lines: usize,
    hl: HlTracker,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a segment as-is.
    pub fn push(&mut self, segment: Segment) {
        self.entries.push(Entry::Ready(segment));
    }

    /// Push a line-item segment contributing `amount_cents` to the totals.
    pub fn push_line(&mut self, segment: Segment, amount_cents: i64) {
        self.lines += 1;
        self.amount_cents += amount_cents;
        self.entries.push(Entry::Ready(segment));
    }

    /// Add to the running amount without pushing a segment.
    pub fn add_amount(&mut self, amount_cents: i64) {
        self.amount_cents += amount_cents;
    }

    /// Push a segment computed from the final totals.
    pub fn defer<F>(&mut self, build: F)
    where
        F: FnOnce(&Totals) -> Segment + Send + 'static,
    {
        self.entries.push(Entry::Deferred(Box::new(build)));
    }

    /// Open an HL level and push its `HL` segment at the current position.
    pub fn open_level(&mut self, parent: Option<HlId>, level: LevelCode) -> HlResult<HlId> {
        let id = self.hl.open_level(parent, level)?;
        self.entries.push(Entry::Level(id));
        Ok(id)
    }

    /// Levels opened so far.
    pub fn hierarchy(&self) -> &HlTracker {
        &self.hl
    }

    /// Number of entries, which equals the number of segments
    /// [`finish`](Body::finish) will return.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Totals as they stand now.
    pub fn totals(&self) -> Totals {
        Totals {
            amount_cents: self.amount_cents,
            lines: self.lines,
            hl_levels: self.hl.len(),
            segments: self.entries.len(),
        }
    }

    /// Resolve deferred entries against the final totals and return the flat
    /// segment list.
    pub fn finish(self) -> HlResult<Vec<Segment>> {
        let totals = self.totals();
        debug!(
            segments = totals.segments,
            lines = totals.lines,
            hl_levels = totals.hl_levels,
            amount_cents = totals.amount_cents,
            "resolving body"
        );
        let hl = self.hl;
        self.entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Ready(segment) => Ok(segment),
                Entry::Deferred(build) => Ok(build(&totals)),
                Entry::Level(id) => hl.record(id).map(|r| r.to_segment()),
            })
            .collect()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("entries", &self.entries.len())
            .field("amount_cents", &self.amount_cents)
            .field("lines", &self.lines)
            .field("hl_levels", &self.hl.len())
            .finish()
    }
}
