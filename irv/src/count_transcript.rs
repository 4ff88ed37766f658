// Copyright 2024 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! Store the history of the count, round by round.

use crate::ballot_metadata::{CandidateIndex, ElectionMetadata};
use crate::ballot_paper::{BallotPaperCount, LookaheadDepth};
use serde::{Serialize,Deserialize};

/// The index of a count (round). 0 means the first.
#[derive(Copy,Clone,Debug,Ord, PartialOrd, Eq, PartialEq,Hash,Serialize,Deserialize)]
pub struct CountIndex(pub usize);

/// A value that is primarily per candidate, but may also be exhausted : held by ballots
/// with no surviving preference, which cannot go to any candidate.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq)]
pub struct PerCandidate<X> {
    /// the value for a given candidate.
    pub candidate : Vec<X>,
    pub exhausted : X,
}

/// Why a count happened.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq)]
pub enum ReasonForCount {
    FirstPreferenceCount,
    /// the listed candidates left the contest at the end of the previous count and their ballots moved on.
    Elimination(Vec<CandidateIndex>),
    /// every continuing candidate was tied for the minimum on the previous count, so every
    /// ballot is re-read one preference deeper instead of the whole field being eliminated.
    DeeperLookahead,
}

/// Record of the status of a single count.
#[derive(Clone,Debug,Serialize,Deserialize)]
pub struct SingleCount {
    pub reason : ReasonForCount,
    /// the lookahead depth ballots were resolved at for this count.
    pub depth : LookaheadDepth,
    /// the number of votes a winner's tally must strictly exceed half of : the number of
    /// formal ballots, doubled once for each level of lookahead used so far in the count.
    pub total_votes : usize,
    /// tallies at the end of the count.
    pub tallies : PerCandidate<BallotPaperCount>,
    /// candidates eliminated as a result of this count.
    pub eliminated : Vec<CandidateIndex>,
}

/// The result of running the election. A tie and an election no one wins are ordinary
/// results, not errors.
#[derive(Clone,Debug,Serialize,Deserialize,PartialEq)]
pub enum Outcome {
    Winner(CandidateIndex),
    /// all listed candidates finished inseparably tied, in ballot paper order.
    Tied(Vec<CandidateIndex>),
    NoWinner,
}

impl Outcome {
    /// The traditional text rendering : the winner's name, a comma separated list of the
    /// tied candidates' names, or the literal string `No winner`.
    pub fn describe(&self,metadata:&ElectionMetadata) -> String {
        match self {
            Outcome::Winner(c) => metadata.candidate(*c).name.clone(),
            Outcome::Tied(candidates) => candidates.iter().map(|&c|metadata.candidate(c).name.as_str()).collect::<Vec<_>>().join(", "),
            Outcome::NoWinner => "No winner".to_string(),
        }
    }
}

#[derive(Clone,Debug,Serialize,Deserialize)]
pub struct Transcript {
    pub counts : Vec<SingleCount>,
    pub outcome : Outcome,
}

impl Transcript {
    pub fn count(&self,index:CountIndex) -> &SingleCount { &self.counts[index.0] }
    pub fn num_counts(&self) -> usize { self.counts.len() }
}

#[derive(Clone,Debug,Serialize,Deserialize)]
pub struct TranscriptWithMetadata {
    pub metadata : ElectionMetadata,
    pub transcript : Transcript,
}
