// Copyright 2024-2025 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! Information about a vote. That is, an ordered list of preferences written on a ballot paper.

use crate::ballot_metadata::{CandidateIndex, ElectionMetadata};
use serde::{Deserialize,Serialize};
use std::collections::HashSet;
use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

/// A number representing a count of pieces of paper.
/// In instant runoff a vote is always a whole piece of paper, so tallies are counts of paper too.
#[derive(Copy,Clone,Eq, PartialEq,Serialize,Deserialize,Ord, PartialOrd,Hash,Default)]
pub struct BallotPaperCount(pub usize);

impl AddAssign for BallotPaperCount {
    fn add_assign(&mut self, rhs: Self) { self.0+=rhs.0; }
}
impl Sum for BallotPaperCount {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self { BallotPaperCount(iter.map(|c|c.0).sum()) }
}
// type alias really, don't want long display
impl fmt::Display for BallotPaperCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for BallotPaperCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{} papers", self.0) }
}

/// How many still-standing preferences into a ballot the count looks when resolving the
/// ballot's current vote. 0 means the first such preference, which is ordinary instant runoff.
#[derive(Copy,Clone,Eq,PartialEq,Ord,PartialOrd,Hash,Serialize,Deserialize,Default)]
pub struct LookaheadDepth(pub usize);
// type alias really, don't want long display
impl fmt::Display for LookaheadDepth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for LookaheadDepth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "depth {}", self.0) }
}

/// Interpret a list of candidate names as a preference list.
/// * Names not in the contest are dropped; they can never receive a vote.
/// * Repeated names are dropped after their first occurrence, preserving the order of the rest.
///   E.g. Alice,Alice,Charlie is the same vote as Alice,Charlie.
pub fn interpret_preferences(metadata:&ElectionMetadata,names:&[&str]) -> Vec<CandidateIndex> {
    let mut seen : HashSet<CandidateIndex> = HashSet::default();
    let mut prefs = vec![];
    for name in names {
        if let Some(candidate) = metadata.candidate_of_name(name) {
            if seen.insert(candidate) { prefs.push(candidate); }
        }
    }
    prefs
}

/// A distinct way of voting, together with the number of people who voted that way.
/// Equivalent ballots are merged into one group so that each distinct preference list
/// is only processed once per count.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq)]
pub struct BallotGroup {
    /// Candidate ids, in preference order. Entries for candidates who stop being
    /// continuing are deleted for good as scans go past them; the list only ever shrinks.
    pub candidates : Vec<CandidateIndex>,
    /// Number of people who voted in this way.
    pub n : BallotPaperCount,
    /// The most recently resolved preference, used as the vote until it leaves the contest.
    /// None means the ballot is exhausted. Scan state rather than part of the vote, so not serialized.
    #[serde(skip)]
    pub current : Option<CandidateIndex>,
}

impl BallotGroup {
    pub fn new(candidates:Vec<CandidateIndex>,n:BallotPaperCount) -> Self {
        BallotGroup{ candidates, n, current: None }
    }

    /// Resolve the ballot's current vote : the `depth`-th (0 indexed) preference for a
    /// continuing candidate, or None if there are not that many left.
    ///
    /// A single forward pass builds a new list of the entries worth keeping; entries for
    /// candidates no longer continuing are dropped on the way past and never looked at by
    /// any later scan. The scan stops at the resolved preference and keeps the unscanned
    /// tail untouched; the new list replaces the old one in one go at the end.
    pub fn resolve(&mut self,continuing:&HashSet<CandidateIndex>,depth:LookaheadDepth) -> Option<CandidateIndex> {
        let mut retained : Vec<CandidateIndex> = Vec::with_capacity(self.candidates.len());
        let mut found : Option<CandidateIndex> = None;
        for pos in 0..self.candidates.len() {
            let candidate = self.candidates[pos];
            if continuing.contains(&candidate) {
                retained.push(candidate);
                if retained.len()==depth.0+1 {
                    found=Some(candidate);
                    retained.extend_from_slice(&self.candidates[pos+1..]);
                    break;
                }
            }
        }
        self.candidates=retained;
        self.current=found;
        found
    }
}
