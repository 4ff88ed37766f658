// Copyright 2024 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! The tally board : who is still a continuing candidate, and how many votes each has.

use crate::ballot_metadata::{CandidateIndex, ElectionError};
use crate::ballot_paper::BallotPaperCount;
use std::collections::HashSet;

/// Vote counts for each candidate, plus the record of who is still continuing.
/// Candidates who leave the contest keep their tally slot but leave the continuing set;
/// the continuing set and the eliminated candidates are disjoint and together always
/// make up the original candidate list.
pub struct CandidateTallies {
    tallys : Vec<BallotPaperCount>,
    continuing : HashSet<CandidateIndex>,
}

impl Default for CandidateTallies {
    fn default() -> Self { CandidateTallies{ tallys: vec![], continuing: HashSet::default() } }
}

impl CandidateTallies {
    /// Add a candidate with no votes. The candidate must be the next unused index.
    pub fn register(&mut self,candidate:CandidateIndex) -> Result<(),ElectionError> {
        if candidate.0!=self.tallys.len() { return Err(ElectionError::DuplicateCandidate(candidate.to_string())); }
        self.tallys.push(BallotPaperCount(0));
        self.continuing.insert(candidate);
        Ok(())
    }

    /// Add `weight` votes to a continuing candidate's tally.
    pub fn increment(&mut self,candidate:CandidateIndex,weight:BallotPaperCount) -> Result<(),ElectionError> {
        if !self.continuing.contains(&candidate) { return Err(ElectionError::UnknownCandidate(candidate)); }
        self.tallys[candidate.0]+=weight;
        Ok(())
    }

    /// Zero every tally, ready for a fresh counting pass.
    pub fn reset_all(&mut self) {
        for tally in &mut self.tallys { *tally=BallotPaperCount(0); }
    }

    pub fn tally(&self,candidate:CandidateIndex) -> BallotPaperCount { self.tallys[candidate.0] }
    pub fn num_candidates(&self) -> usize { self.tallys.len() }
    pub fn num_continuing(&self) -> usize { self.continuing.len() }
    pub fn is_continuing(&self,candidate:CandidateIndex) -> bool { self.continuing.contains(&candidate) }
    pub fn continuing(&self) -> &HashSet<CandidateIndex> { &self.continuing }

    /// Continuing candidates in ballot paper order. Index order doubles as insertion
    /// order, which is what makes tied results come out deterministically.
    pub fn continuing_in_ballot_order(&self) -> Vec<CandidateIndex> {
        (0..self.tallys.len()).map(CandidateIndex).filter(|c|self.continuing.contains(c)).collect()
    }

    /// Every continuing candidate whose tally equals the minimum tally over the
    /// continuing candidates. A tie for the minimum is returned whole rather than
    /// broken arbitrarily.
    pub fn minimum_holders(&self) -> Vec<CandidateIndex> {
        let candidates = self.continuing_in_ballot_order();
        match candidates.iter().map(|&c|self.tally(c)).min() {
            None => vec![],
            Some(min_tally) => candidates.into_iter().filter(|&c|self.tally(c)==min_tally).collect(),
        }
    }

    /// The continuing candidate whose tally strictly exceeds half of `total_votes`,
    /// should one exist. The tallies partition the counted votes between disjoint
    /// candidates, so there can never be two, even when `total_votes` has been scaled up.
    pub fn majority_holder(&self,total_votes:usize) -> Option<CandidateIndex> {
        self.continuing_in_ballot_order().into_iter().find(|&c|2*self.tally(c).0>total_votes)
    }

    /// Remove a candidate from the continuing set. Does nothing if already removed.
    pub fn remove(&mut self,candidate:CandidateIndex) {
        self.continuing.remove(&candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ballot_metadata::ElectionError;

    fn board(tallies:&[usize]) -> CandidateTallies {
        let mut board = CandidateTallies::default();
        for (i,&tally) in tallies.iter().enumerate() {
            board.register(CandidateIndex(i)).unwrap();
            board.increment(CandidateIndex(i),BallotPaperCount(tally)).unwrap();
        }
        board
    }

    #[test]
    fn test_register_duplicate() {
        let mut board = board(&[0]);
        assert!(matches!(board.register(CandidateIndex(0)),Err(ElectionError::DuplicateCandidate(_))));
    }

    #[test]
    fn test_increment_unknown() {
        let mut board = board(&[1,2]);
        board.remove(CandidateIndex(0));
        assert!(matches!(board.increment(CandidateIndex(0),BallotPaperCount(1)),Err(ElectionError::UnknownCandidate(_))));
        assert!(matches!(board.increment(CandidateIndex(5),BallotPaperCount(1)),Err(ElectionError::UnknownCandidate(_))));
    }

    #[test]
    fn test_minimum_holders() {
        let mut board = board(&[3,1,2,1]);
        assert_eq!(vec![CandidateIndex(1),CandidateIndex(3)],board.minimum_holders());
        board.remove(CandidateIndex(1));
        board.remove(CandidateIndex(3));
        assert_eq!(vec![CandidateIndex(2)],board.minimum_holders());
    }

    #[test]
    fn test_minimum_holders_full_tie() {
        let board = board(&[2,2,2]);
        assert_eq!(3,board.minimum_holders().len());
    }

    #[test]
    fn test_majority_is_strict() {
        let board = board(&[3,3]);
        assert_eq!(None,board.majority_holder(6)); // exactly half is not a majority
        assert_eq!(Some(CandidateIndex(0)),board.majority_holder(5));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut board = board(&[1,2]);
        board.remove(CandidateIndex(0));
        board.remove(CandidateIndex(0));
        assert_eq!(1,board.num_continuing());
        assert_eq!(2,board.num_candidates()); // the slot is remembered
    }

    #[test]
    fn test_reset_all() {
        let mut board = board(&[3,1]);
        board.reset_all();
        assert_eq!(BallotPaperCount(0),board.tally(CandidateIndex(0)));
        assert_eq!(BallotPaperCount(0),board.tally(CandidateIndex(1)));
    }
}
