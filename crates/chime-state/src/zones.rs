//! Zone table and selector

use chime_core::{ChimeError, ChimeResult, TimeZone, ZoneConfig};

/// Static registry of configured time zones
///
/// Immutable after construction; lookups by index are guarded even
/// though the selector invariant should make the guard unreachable.
#[derive(Debug)]
pub struct ZoneTable {
    zones: Vec<TimeZone>,
}

impl ZoneTable {
    /// Build the table from a validated configuration
    pub fn from_config(config: &ZoneConfig) -> ChimeResult<Self> {
        config.validate()?;
        Ok(ZoneTable {
            zones: config.zones.clone(),
        })
    }

    /// Number of configured zones, always at least one
    #[inline]
    pub fn count(&self) -> usize {
        self.zones.len()
    }

    /// Zone at the given index
    pub fn by_index(&self, index: usize) -> ChimeResult<&TimeZone> {
        self.zones.get(index).ok_or(ChimeError::IndexOutOfRange {
            index,
            count: self.zones.len(),
        })
    }

    /// Linear scan for an exact, case-sensitive name match
    ///
    /// Absence is not an error here; callers decide whether an unknown
    /// name is ignorable.
    pub fn index_by_name(&self, name: &str) -> Option<usize> {
        self.zones.iter().position(|z| z.name == name)
    }
}

/// Tracks the currently displayed and matched zone
///
/// INVARIANT: `0 <= index < table.count()` at all times.
#[derive(Debug)]
pub struct ZoneSelector {
    index: usize,
}

impl ZoneSelector {
    /// Start at the configured initial index
    pub fn new(table: &ZoneTable, initial_index: usize) -> ChimeResult<Self> {
        if initial_index >= table.count() {
            return Err(ChimeError::IndexOutOfRange {
                index: initial_index,
                count: table.count(),
            });
        }
        Ok(ZoneSelector {
            index: initial_index,
        })
    }

    /// Advance to the next zone, wrapping around
    ///
    /// Returns the newly selected zone so the caller can emit the
    /// publish intent for it.
    pub fn advance<'t>(&mut self, table: &'t ZoneTable) -> &'t TimeZone {
        self.index = (self.index + 1) % table.count();
        // Unreachable by the invariant; fall back to the first zone
        // rather than propagate from an infallible operation.
        table.by_index(self.index).unwrap_or_else(|_| {
            tracing::warn!(index = self.index, "selector index escaped bounds");
            &table.zones[0]
        })
    }

    /// Select the zone with the given name, if it exists
    ///
    /// Unknown names are silently ignored: a stale zone-change message
    /// must not disturb the current selection.
    pub fn set_by_name(&mut self, table: &ZoneTable, name: &str) {
        match table.index_by_name(name) {
            Some(index) => self.index = index,
            None => {
                tracing::debug!(zone = name, "ignoring zone change to unknown zone");
            }
        }
    }

    /// Currently selected index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently selected zone
    pub fn current<'t>(&self, table: &'t ZoneTable) -> &'t TimeZone {
        table.by_index(self.index).unwrap_or(&table.zones[0])
    }
}
