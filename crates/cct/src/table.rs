//! Lookup table of isotherms used by the table driven estimators.
//!
//! The table is generated by walking the exact Planckian locus from 1000K to
//! 100000K with a temperature dependent multiplicative step, recording the
//! locus point and isotherm normal at every sample. Entries are stored in
//! ascending mired order, preceded by a synthetic entry for infinite
//! temperature (mired 0). Once built, a table is never mutated.

use std::ops::Index;
use std::sync::LazyLock;
use std::time::Instant;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::blackbody;
use crate::error::{CctError, CctResult};
use crate::isotherm::Isotherm;
use crate::locus::Planckian;
use crate::xy::UV;

/// Coolest temperature sampled by the generator
pub const TABLE_MIN_KELVIN: f64 = 1000.0;

/// Hottest temperature sampled by the generator
pub const TABLE_MAX_KELVIN: f64 = 100_000.0;

/// Isotherm slope (dv/du) in the limit of infinite temperature, where the
/// locus approaches a fixed direction
pub const INFINITE_ISOTHERM_SLOPE: f64 = -0.243_41;

/// Points this far outside the coolest isotherm are still considered on it
const BRACKET_TOLERANCE: f64 = 1e-12;

/// The anchor plus the three samples of a parabolic fit
const MIN_ENTRIES: usize = 4;

/// Multiplicative temperature step of the generator at `kelvin`
#[must_use]
pub fn step_ratio(kelvin: f64) -> f64 {
    if kelvin < 2000.0 {
        1.001
    } else if kelvin < 5000.0 {
        1.002
    } else if kelvin < 20_000.0 {
        1.004
    } else {
        1.005
    }
}

/// One isotherm sample: `(mired, u, v, normal_u, normal_v)`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 5]", into = "[f64; 5]")]
pub struct IsothermEntry {
    pub mired: f64,
    pub uv: UV,
    pub normal: UV,
}

impl IsothermEntry {
    #[must_use]
    pub const fn new(mired: f64, uv: UV, normal: UV) -> Self {
        Self { mired, uv, normal }
    }

    #[must_use]
    pub fn sample(kelvin: f64) -> Self {
        let iso = Isotherm::at(&Planckian, kelvin);
        Self::new(crate::mired(kelvin), iso.point, iso.normal)
    }

    /// The synthetic entry for infinite temperature
    #[must_use]
    pub fn anchor() -> Self {
        let normal = UV::new(-1.0, -INFINITE_ISOTHERM_SLOPE).normalized();
        Self::new(0.0, blackbody::limit_uv(), normal)
    }

    #[must_use]
    pub fn kelvin(&self) -> f64 {
        crate::mired(self.mired)
    }

    #[must_use]
    pub const fn isotherm(&self) -> Isotherm {
        Isotherm::new(self.uv, self.normal)
    }

    /// Signed distance of `uv` from this isotherm, positive on the hotter side
    #[must_use]
    pub fn along(&self, uv: UV) -> f64 {
        self.isotherm().along(uv)
    }

    /// Signed distance of `uv` from the locus, measured along this isotherm
    #[must_use]
    pub fn duv(&self, uv: UV) -> f64 {
        self.isotherm().duv(uv)
    }
}

impl From<[f64; 5]> for IsothermEntry {
    fn from([mired, u, v, nu, nv]: [f64; 5]) -> Self {
        Self::new(mired, UV::new(u, v), UV::new(nu, nv))
    }
}

impl From<IsothermEntry> for [f64; 5] {
    fn from(e: IsothermEntry) -> Self {
        [e.mired, e.uv.u, e.uv.v, e.normal.u, e.normal.v]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IsothermTable {
    entries: Vec<IsothermEntry>,
}

impl IsothermTable {
    #[must_use]
    pub fn generate() -> Self {
        let start = Instant::now();

        let mut entries = vec![];
        let mut kelvin = TABLE_MIN_KELVIN;
        loop {
            entries.push(IsothermEntry::sample(kelvin));
            if kelvin >= TABLE_MAX_KELVIN {
                break;
            }
            kelvin = (kelvin * step_ratio(kelvin)).min(TABLE_MAX_KELVIN);
        }

        entries.sort_by(|a, b| a.mired.total_cmp(&b.mired));
        entries.insert(0, IsothermEntry::anchor());

        log::debug!(
            "Generated isotherm table with {} entries in {:?}",
            entries.len(),
            start.elapsed()
        );

        Self { entries }
    }

    /// Build a table from stored entries, checking the layout every
    /// estimator relies on.
    pub fn from_entries(entries: Vec<IsothermEntry>) -> CctResult<Self> {
        if entries.len() < MIN_ENTRIES {
            return Err(CctError::TableTooShort(MIN_ENTRIES));
        }

        if entries[0].mired != 0.0 {
            return Err(CctError::TableMissingAnchor);
        }

        if let Some(index) = entries
            .iter()
            .tuple_windows()
            .position(|(a, b)| a.mired.partial_cmp(&b.mired) != Some(std::cmp::Ordering::Less))
        {
            return Err(CctError::TableNotSorted(index + 1));
        }

        if let Some(index) = entries
            .iter()
            .position(|e| (e.normal.length() - 1.0).abs() > 1e-9)
        {
            return Err(CctError::TableInvalidNormal(index));
        }

        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> CctResult<Self> {
        Self::from_entries(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> CctResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn entries(&self) -> &[IsothermEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the pair of adjacent isotherms enclosing `uv`.
    ///
    /// Returns the index `j` such that `uv` lies between entries `j - 1`
    /// (hotter) and `j` (cooler), or `None` if `uv` is cooler than the last
    /// entry or hotter than the anchor.
    #[must_use]
    pub fn bracket(&self, uv: UV) -> Option<usize> {
        let count = self.entries.len();
        match self.entries.partition_point(|e| e.along(uv) < 0.0) {
            0 => None,
            j if j == count => {
                let last = self.entries.last()?;
                (last.along(uv) > -BRACKET_TOLERANCE).then_some(count - 1)
            }
            j => Some(j),
        }
    }
}

impl Index<usize> for IsothermTable {
    type Output = IsothermEntry;

    fn index(&self, index: usize) -> &IsothermEntry {
        &self.entries[index]
    }
}

/// The process wide isotherm table, generated on first use
pub fn isotherm_table() -> &'static IsothermTable {
    static TABLE: LazyLock<IsothermTable> = LazyLock::new(IsothermTable::generate);

    &TABLE
}

#[cfg(test)]
mod tests {
    use crate::blackbody;
    use crate::error::CctError;
    use crate::table::{
        IsothermEntry, IsothermTable, TABLE_MAX_KELVIN, TABLE_MIN_KELVIN, isotherm_table,
    };
    use crate::xy::UV;
    use crate::{compare, compare_float};

    #[test]
    fn layout() {
        let table = isotherm_table();
        assert!((1500..2500).contains(&table.len()));

        assert_eq!(table[0], IsothermEntry::anchor());
        compare!(table[1].kelvin(), TABLE_MAX_KELVIN);
        compare!(table[table.len() - 1].kelvin(), TABLE_MIN_KELVIN);

        for pair in table.entries().windows(2) {
            assert!(pair[0].mired < pair[1].mired);
        }
        for e in table.entries() {
            compare!(e.normal.length(), 1.0);
            assert!(e.normal.v > 0.0);
        }
    }

    #[test]
    fn dense_where_curved() {
        // neighbouring samples are never more than ~1 mired apart
        let table = isotherm_table();
        let widest = table
            .entries()
            .windows(2)
            .skip(1)
            .map(|w| w[1].mired - w[0].mired)
            .fold(0.0, f64::max);
        assert!(widest < 1.01);
    }

    #[test]
    fn anchor_continues_locus() {
        let table = isotherm_table();
        let anchor = table[0];
        let hottest = table[1];
        // the isotherm slope at 100000K is close to the limiting one
        compare_float!(
            hottest.normal.v / hottest.normal.u,
            anchor.normal.v / anchor.normal.u,
            0.02
        );
    }

    #[test]
    fn json_round_trip_is_exact() {
        let table = isotherm_table();
        let json = table.to_json().unwrap();
        assert!(json.starts_with("[[0.0,"));
        let loaded = IsothermTable::from_json(&json).unwrap();
        assert_eq!(&loaded, table);
    }

    #[test]
    fn rejects_bad_tables() {
        let table = isotherm_table();

        let short = table.entries()[..3].to_vec();
        assert!(matches!(
            IsothermTable::from_entries(short),
            Err(CctError::TableTooShort(4))
        ));
        assert!(IsothermTable::from_entries(table.entries()[..4].to_vec()).is_ok());

        let headless = table.entries()[1..].to_vec();
        assert!(matches!(
            IsothermTable::from_entries(headless),
            Err(CctError::TableMissingAnchor)
        ));

        let mut swapped = table.entries().to_vec();
        swapped.swap(10, 11);
        assert!(matches!(
            IsothermTable::from_entries(swapped),
            Err(CctError::TableNotSorted(11))
        ));

        let mut skewed = table.entries().to_vec();
        skewed[5].normal = UV::new(1.0, 1.0);
        assert!(matches!(
            IsothermTable::from_entries(skewed),
            Err(CctError::TableInvalidNormal(5))
        ));

        assert!(IsothermTable::from_json("[[0.0, 1.0]]").is_err());
    }

    #[test]
    fn bracket_encloses() {
        let table = isotherm_table();
        for kelvin in [1000.5, 1500.0, 4000.0, 6504.0, 30_000.0, 99_000.0] {
            let uv = blackbody::locus_uv(kelvin);
            let j = table.bracket(uv).unwrap();
            assert!(table[j - 1].kelvin() >= kelvin);
            assert!(table[j].kelvin() <= kelvin);
        }
    }

    #[test]
    fn bracket_edges() {
        let table = isotherm_table();
        assert!(table.bracket(blackbody::locus_uv(TABLE_MIN_KELVIN)).is_some());
        assert!(table.bracket(blackbody::locus_uv(900.0)).is_none());

        let anchor = table[0];
        let beyond = anchor.uv + anchor.isotherm().tangent() * 0.01;
        assert!(table.bracket(beyond).is_none());
        assert!(table.bracket(UV::NAN).is_none());
    }
}
