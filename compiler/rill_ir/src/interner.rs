//! String interner for identifier storage.
//!
//! O(1) interning and lookup behind a single lock. Interned strings are
//! leaked, so resolved `&'static str` references stay valid for the
//! process lifetime regardless of lock state.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

struct InternState {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name`.
    strings: Vec<&'static str>,
}

/// String interner handing out compact [`Name`] handles.
pub struct StringInterner {
    inner: RwLock<InternState>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned as
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", 0);
        StringInterner {
            inner: RwLock::new(InternState {
                map,
                strings: vec![""],
            }),
        }
    }

    /// Intern a string, returning its handle.
    ///
    /// Interning the same content twice returns the same `Name`.
    pub fn intern(&self, s: &str) -> Name {
        {
            let state = self.inner.read();
            if let Some(&idx) = state.map.get(s) {
                return Name::from_raw(idx);
            }
        }
        let mut state = self.inner.write();
        // Re-check under the write lock: another caller may have won the race.
        if let Some(&idx) = state.map.get(s) {
            return Name::from_raw(idx);
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let idx = u32::try_from(state.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded u32::MAX strings"));
        state.strings.push(leaked);
        state.map.insert(leaked, idx);
        Name::from_raw(idx)
    }

    /// Resolve a handle back to its string.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn resolve(&self, name: Name) -> &'static str {
        self.inner.read().strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
