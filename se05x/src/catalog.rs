// se05x/src/catalog.rs
//! OEF identifier to product name mapping, from NXP AN13013.

use derive_more::Display;

/// Result of a catalog lookup. Unlisted identifiers are a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DeviceName {
    /// Listed in the catalog
    #[display(fmt = "{}", _0)]
    Known(&'static str),
    /// Not listed; carries the identifier that was looked up
    #[display(fmt = "unknown")]
    Unknown(u16),
}

impl DeviceName {
    /// Whether the identifier was found.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Sorted by identifier so lookups can binary search.
const SE05X_TYPES: &[(u16, &str)] = &[
    (0xA1F4, "SE050_C2 (OM-SE050ARD)"),
    (0xA200, "SE050_C1 (03_XX)"),
    (0xA201, "SE050_C2 (03_XX)"),
    (0xA202, "SE050_B1 (03_XX)"),
    (0xA203, "SE050_B2 (03_XX)"),
    (0xA204, "SE050_A1 (03_XX)"),
    (0xA205, "SE050_A2 (03_XX)"),
    (0xA564, "SE051_C2 (06_00)"),
    (0xA565, "SE051_A2 (06_00)"),
    (0xA739, "SE051_W2 (07_02)"),
    (0xA77E, "SE050_F2 (03_XX, 2021)"),
    (0xA8FA, "SE051_C2 (07_02)"),
    (0xA920, "SE051_A2 (07_02)"),
    (0xA921, "SE050_E2 (07_02, OM-SE050ARD-E)"),
    (0xA92A, "SE050_F2 (03_XX, 2022 / OM-SE050ARD-F)"),
];

static GLOBAL: DeviceCatalog = DeviceCatalog {
    entries: SE05X_TYPES,
};

/// Read-only table of known SE05x variants.
#[derive(Debug, Clone, Copy)]
pub struct DeviceCatalog {
    entries: &'static [(u16, &'static str)],
}

impl DeviceCatalog {
    /// Wrap a custom table. `entries` must be sorted by identifier.
    pub const fn new(entries: &'static [(u16, &'static str)]) -> Self {
        Self { entries }
    }

    /// The process-wide catalog.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Resolve an OEF identifier. Never fails.
    pub fn lookup(&self, id: u16) -> DeviceName {
        match self.entries.binary_search_by_key(&id, |&(k, _)| k) {
            Ok(i) => DeviceName::Known(self.entries[i].1),
            Err(_) => DeviceName::Unknown(id),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}
