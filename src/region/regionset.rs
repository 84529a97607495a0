use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Serialize, Serializer};
use serde::ser::SerializeSeq;

use super::region::Region;

/// Set of regions stored as a bitmask, one bit per `Region` except `All`.
///
/// A nationwide set carries every state bit, the Augsburg bit and the `Bund`
/// bit, so nationwide holidays show up in every state's list while a query
/// for `Bund` only matches holidays that are genuinely nationwide.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct RegionSet(u32);

impl RegionSet {
    pub const fn empty() -> RegionSet {
        RegionSet(0)
    }

    pub fn nationwide() -> RegionSet {
        let mut set = RegionSet::of(&Region::STATES);
        set.insert(Region::Augsburg);
        set.insert(Region::Bund);
        set
    }

    pub fn of(regions: &[Region]) -> RegionSet {
        let mut set = RegionSet::empty();
        for &region in regions {
            set.insert(region);
        }
        set
    }

    /// Inserting `All` is a no-op: it is a query wildcard, not a member.
    pub fn insert(&mut self, region: Region) {
        if let Some(bit) = region.bit() {
            self.0 |= 1u32 << bit;
        }
    }

    #[inline]
    pub fn contains(&self, region: Region) -> bool {
        match region.bit() {
            Some(bit) => (self.0 & (1u32 << bit)) != 0,
            None => false
        }
    }

    /// Query semantics: `All` matches any non-empty set, every other region
    /// must be a member.
    #[inline]
    pub fn matches(&self, region: Region) -> bool {
        match region {
            Region::All => !self.is_empty(),
            other => self.contains(other)
        }
    }

    pub fn is_nationwide(&self) -> bool {
        self.contains(Region::Bund)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Region> + '_ {
        Region::ALL.into_iter().filter(move |r| self.contains(*r))
    }

    pub fn to_vec(&self) -> Vec<Region> {
        self.iter().collect()
    }
}

impl BitOr for RegionSet {
    type Output = RegionSet;

    fn bitor(self, rhs: RegionSet) -> RegionSet {
        RegionSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegionSet {
    fn bitor_assign(&mut self, rhs: RegionSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nationwide() {
            return write!(f, "{}", Region::Bund);
        }
        let codes: Vec<&str> = self.iter().map(|r| r.code()).collect();
        write!(f, "{}", codes.join(","))
    }
}

impl Serialize for RegionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for region in self.iter() {
            seq.serialize_element(&region)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nationwide_covers_every_state_and_bund() {
        let set = RegionSet::nationwide();
        for state in Region::STATES {
            assert!(set.contains(state));
        }
        assert!(set.contains(Region::Bund));
        assert!(set.contains(Region::Augsburg));
        assert!(set.is_nationwide());
        assert_eq!(set.len(), 18);
    }

    #[test]
    fn regional_set_does_not_match_bund() {
        let set = RegionSet::of(&[Region::BW, Region::BY]);
        assert!(set.matches(Region::BW));
        assert!(!set.matches(Region::NI));
        assert!(!set.matches(Region::Bund));
        assert!(set.matches(Region::All));
    }

    #[test]
    fn all_is_never_a_member() {
        let mut set = RegionSet::empty();
        set.insert(Region::All);
        assert!(set.is_empty());
        assert!(!set.matches(Region::All));
    }

    #[test]
    fn union_and_display() {
        let set = RegionSet::of(&[Region::BE]) | RegionSet::of(&[Region::MV]);
        assert_eq!(set.to_vec(), vec![Region::BE, Region::MV]);
        assert_eq!(set.to_string(), "BE,MV");
        assert_eq!(RegionSet::nationwide().to_string(), "BUND");
    }
}
