//! Chain ids collected according to the degrees of their end vertices.
//!
//! Each chain falls into exactly one bucket named after the degrees of the
//! vertices at its two ends: `11` both ends free, `22` a disconnected cycle,
//! `13`/`14` one free end against a junction, `33`/`34`/`44` junctions on
//! both sides. The per-component table keeps `11` and `22` as scalars, since
//! a chain with two free ends (or a disconnected cycle) is necessarily the
//! whole component.

#[cfg(feature = "serde_support")]
use serde::{Serialize, Deserialize};

use crate::chain::Chain;
use crate::ends::{End, EndSlot};
use crate::ChId;

fn classify(m: &Chain) -> Bucket {
    let na = m.ngs_at(End::A).num();
    let nb = m.ngs_at(End::B).num();

    if m.has_one_free_end() {
        let e = m.the_only_free_end();
        let n_opp = m.ngs_at(e.opp()).num();
        return match n_opp {
            2 => Bucket::Cn13(EndSlot::new(m.idw, e)),
            3 => Bucket::Cn14(EndSlot::new(m.idw, e)),
            _ => panic!("failed end-degree classification for chain {}", m.idw),
        };
    }
    if na == 0 && nb == 0 {
        return Bucket::Cn11;
    }
    if m.is_disconnected_cycle() {
        return Bucket::Cn22;
    }
    match (na, nb) {
        (2, 2) => Bucket::Cn33,
        (2, 3) => Bucket::Cn34(EndSlot::new(m.idw, End::A)),
        (3, 2) => Bucket::Cn34(EndSlot::new(m.idw, End::B)),
        (3, 3) => Bucket::Cn44,
        _ => panic!("failed end-degree classification for chain {}", m.idw),
    }
}

enum Bucket {
    Cn11,
    Cn22,
    Cn33,
    Cn44,
    Cn13(EndSlot),
    Cn14(EndSlot),
    Cn34(EndSlot),
}

/// Graph-wide classification: every bucket is a vector.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct ChainIndexes {
    /// Disconnected linear chains.
    pub cn11: Vec<ChId>,
    /// Disconnected cycle chains.
    pub cn22: Vec<ChId>,
    /// Chains spanned between two vertices of degree 3.
    pub cn33: Vec<ChId>,
    /// Chains spanned between two vertices of degree 4.
    pub cn44: Vec<ChId>,
    /// Free ends of chains whose other end is at a degree-3 junction.
    pub cn13: Vec<EndSlot>,
    /// Free ends of chains whose other end is at a degree-4 junction.
    pub cn14: Vec<EndSlot>,
    /// Degree-3 side ends of chains spanned between degree-3 and 4 junctions.
    pub cn34: Vec<EndSlot>,
}

impl ChainIndexes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cn11.clear();
        self.cn22.clear();
        self.cn33.clear();
        self.cn44.clear();
        self.cn13.clear();
        self.cn14.clear();
        self.cn34.clear();
    }

    pub fn include(&mut self, m: &Chain) {
        match classify(m) {
            Bucket::Cn11 => self.cn11.push(m.idw),
            Bucket::Cn22 => self.cn22.push(m.idw),
            Bucket::Cn33 => self.cn33.push(m.idw),
            Bucket::Cn44 => self.cn44.push(m.idw),
            Bucket::Cn13(s) => self.cn13.push(s),
            Bucket::Cn14(s) => self.cn14.push(s),
            Bucket::Cn34(s) => self.cn34.push(s),
        }
    }

    pub fn remove(&mut self, m: &Chain) {
        match classify(m) {
            Bucket::Cn11 => self.cn11.retain(|&w| w != m.idw),
            Bucket::Cn22 => self.cn22.retain(|&w| w != m.idw),
            Bucket::Cn33 => self.cn33.retain(|&w| w != m.idw),
            Bucket::Cn44 => self.cn44.retain(|&w| w != m.idw),
            Bucket::Cn13(s) => self.cn13.retain(|&u| u != s),
            Bucket::Cn14(s) => self.cn14.retain(|&u| u != s),
            Bucket::Cn34(s) => self.cn34.retain(|&u| u != s),
        }
    }

    /// Rebuilds the table from all chains.
    pub fn populate(&mut self, cn: &[Chain]) {
        self.clear();
        for m in cn {
            self.include(m);
        }
    }
}

/// Per-component classification: the `11` and `22` buckets are scalars.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct CmptChainIndexes {
    /// The disconnected linear chain, if it is this component.
    pub cn11: Option<ChId>,
    /// The disconnected cycle chain, if it is this component.
    pub cn22: Option<ChId>,
    /// Chains spanned between two vertices of degree 3.
    pub cn33: Vec<ChId>,
    /// Chains spanned between two vertices of degree 4.
    pub cn44: Vec<ChId>,
    /// Free ends of chains whose other end is at a degree-3 junction.
    pub cn13: Vec<EndSlot>,
    /// Free ends of chains whose other end is at a degree-4 junction.
    pub cn14: Vec<EndSlot>,
    /// Degree-3 side ends of chains spanned between degree-3 and 4 junctions.
    pub cn34: Vec<EndSlot>,
}

impl CmptChainIndexes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cn11 = None;
        self.cn22 = None;
        self.cn33.clear();
        self.cn44.clear();
        self.cn13.clear();
        self.cn14.clear();
        self.cn34.clear();
    }

    pub fn include(&mut self, m: &Chain) {
        match classify(m) {
            // a chain with both ends free is necessarily the whole component
            Bucket::Cn11 => self.cn11 = Some(m.idw),
            Bucket::Cn22 => self.cn22 = Some(m.idw),
            Bucket::Cn33 => self.cn33.push(m.idw),
            Bucket::Cn44 => self.cn44.push(m.idw),
            Bucket::Cn13(s) => self.cn13.push(s),
            Bucket::Cn14(s) => self.cn14.push(s),
            Bucket::Cn34(s) => self.cn34.push(s),
        }
    }

    pub fn remove(&mut self, m: &Chain) {
        match classify(m) {
            Bucket::Cn11 => self.cn11 = None,
            Bucket::Cn22 => self.cn22 = None,
            Bucket::Cn33 => self.cn33.retain(|&w| w != m.idw),
            Bucket::Cn44 => self.cn44.retain(|&w| w != m.idw),
            Bucket::Cn13(s) => self.cn13.retain(|&u| u != s),
            Bucket::Cn14(s) => self.cn14.retain(|&u| u != s),
            Bucket::Cn34(s) => self.cn34.retain(|&u| u != s),
        }
    }

    /// Rebuilds the table from the chains listed in `ww`.
    pub fn populate(&mut self, cn: &[Chain], ww: &[ChId]) {
        self.clear();
        for &j in ww {
            self.include(&cn[j]);
        }
    }

    /// Merges in the buckets of `other`, consuming it.
    pub fn append(&mut self, other: CmptChainIndexes) {
        assert!(self.cn11.is_none() || other.cn11.is_none(),
                "incompatible cn11 buckets on component merge");
        assert!(self.cn22.is_none() || other.cn22.is_none(),
                "incompatible cn22 buckets on component merge");
        if other.cn11.is_some() {
            self.cn11 = other.cn11;
        }
        if other.cn22.is_some() {
            self.cn22 = other.cn22;
        }
        self.cn33.extend(other.cn33);
        self.cn44.extend(other.cn44);
        self.cn13.extend(other.cn13);
        self.cn14.extend(other.cn14);
        self.cn34.extend(other.cn34);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ends::End;

    #[test]
    fn free_chain_is_cn11() {
        let m = Chain::with_length(3, 0, 0);
        let mut chis = ChainIndexes::new();
        chis.include(&m);
        assert_eq!(chis.cn11, vec![0]);

        chis.remove(&m);
        assert!(chis.cn11.is_empty());
    }

    #[test]
    fn cycle_is_cn22() {
        let mut m = Chain::with_length(3, 5, 0);
        m.ngs_at_mut(End::A).insert(EndSlot::new(5, End::B));
        m.ngs_at_mut(End::B).insert(EndSlot::new(5, End::A));

        let mut chis = CmptChainIndexes::new();
        chis.include(&m);
        assert_eq!(chis.cn22, Some(5));
        assert_eq!(chis.cn11, None);
    }

    #[test]
    fn one_free_end() {
        let mut m = Chain::with_length(3, 2, 0);
        m.ngs_at_mut(End::B).insert(EndSlot::new(0, End::A));
        m.ngs_at_mut(End::B).insert(EndSlot::new(1, End::A));

        let mut chis = ChainIndexes::new();
        chis.include(&m);
        assert_eq!(chis.cn13, vec![EndSlot::new(2, End::A)]);
    }
}
