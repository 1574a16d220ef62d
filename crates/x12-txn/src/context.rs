use chrono::{Duration, NaiveDateTime};
use rand::seq::{index, SliceRandom};
use rand::{Rng, RngCore};

use x12_types::Delimiters;

use crate::error::{TxnError, TxnResult};
use crate::pool::DataPool;

const DIGITS: &[u8] = b"0123456789";
const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Everything a generator may draw on for one document.
///
/// The random source, the clock and the data pool are all explicit, so two
/// runs with the same seed, instant and pool produce the same body.
pub struct GenContext<'a> {
    pub rng: &'a mut dyn RngCore,
    pub now: NaiveDateTime,
    pub pool: &'a DataPool,
    pub delimiters: Delimiters,
}

impl<'a> GenContext<'a> {
    pub fn new(
        rng: &'a mut dyn RngCore,
        now: NaiveDateTime,
        pool: &'a DataPool,
        delimiters: Delimiters,
    ) -> Self {
        Self {
            rng,
            now,
            pool,
            delimiters,
        }
    }

    /// Uniform integer in `low..=high`.
    pub fn between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    /// `count` from the hint, or a uniform draw in `low..=high` when absent.
    pub fn count_or(&mut self, hint: Option<usize>, low: u32, high: u32) -> usize {
        match hint {
            Some(n) => n,
            None => self.between(low, high) as usize,
        }
    }

    /// A string of `len` random decimal digits.
    pub fn digits(&mut self, len: usize) -> String {
        self.from_alphabet(DIGITS, len)
    }

    /// A string of `len` random uppercase letters and digits.
    pub fn alnum(&mut self, len: usize) -> String {
        self.from_alphabet(UPPER_ALNUM, len)
    }

    fn from_alphabet(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| char::from(alphabet[self.rng.gen_range(0..alphabet.len())]))
            .collect()
    }

    /// Pick one element of a non-empty pool.
    pub fn pick<'p, T>(&mut self, name: &'static str, items: &'p [T]) -> TxnResult<&'p T> {
        items.choose(&mut *self.rng).ok_or(TxnError::EmptyPool(name))
    }

    /// Pick an element different from `other`, falling back to any element
    /// when the pool has no alternative.
    pub fn pick_other<'p, T: PartialEq>(
        &mut self,
        name: &'static str,
        items: &'p [T],
        other: &T,
    ) -> TxnResult<&'p T> {
        let candidates: Vec<&T> = items.iter().filter(|i| *i != other).collect();
        match candidates.choose(&mut *self.rng) {
            Some(item) => Ok(*item),
            None => self.pick(name, items),
        }
    }

    /// Pick `count` elements: distinct while the pool lasts, then repeating.
    pub fn pick_many<'p, T>(
        &mut self,
        name: &'static str,
        items: &'p [T],
        count: usize,
    ) -> TxnResult<Vec<&'p T>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if items.is_empty() {
            return Err(TxnError::EmptyPool(name));
        }
        let distinct = count.min(items.len());
        let mut picked: Vec<&T> = index::sample(&mut *self.rng, items.len(), distinct)
            .into_iter()
            .map(|i| &items[i])
            .collect();
        while picked.len() < count {
            picked.push(self.pick(name, items)?);
        }
        Ok(picked)
    }

    /// `now` shifted by a whole number of days (negative for the past).
    pub fn days_from_now(&self, days: i64) -> NaiveDateTime {
        self.now + Duration::days(days)
    }
}

/// Interchange party identifier derived from a display name: spaces removed,
/// truncated to 15 characters.
pub fn party_id(name: &str) -> String {
    name.chars().filter(|c| *c != ' ').take(15).collect()
}
