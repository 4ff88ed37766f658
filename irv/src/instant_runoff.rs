// Copyright 2024-2025 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! This is the instant runoff algorithm : repeatedly eliminate whoever has the fewest
//! votes and move their ballots on to the next preference, until someone has a strict
//! majority. A tie for the minimum covering *every* continuing candidate is not resolved
//! by eliminating the whole field; instead every ballot is re-read one preference deeper,
//! until either the tie breaks or no ballot has preferences deep enough to tell anyone apart.

use crate::ballot_metadata::{CandidateIndex, ElectionError, ElectionMetadata};
use crate::ballot_paper::{interpret_preferences, BallotGroup, BallotPaperCount, LookaheadDepth};
use crate::count_transcript::{Outcome, PerCandidate, ReasonForCount, SingleCount, Transcript};
use crate::election_data::ElectionData;
use crate::tallies::CandidateTallies;
use std::collections::HashMap;

/// An election being assembled : candidates fixed up front, ballots arriving one at a time.
pub struct Election {
    metadata : ElectionMetadata,
    ballots : Vec<BallotGroup>,
    /// index into `ballots` of each distinct interpreted preference list seen so far.
    lookup : HashMap<Vec<CandidateIndex>,usize>,
    tallys : CandidateTallies,
    informal : usize,
}

impl Election {
    /// Set up an election with the given candidate names, in ballot paper order.
    pub fn new(candidate_names:&[&str]) -> Result<Self,ElectionError> {
        Self::from_metadata(ElectionMetadata::from_names(candidate_names)?)
    }

    pub fn from_metadata(metadata:ElectionMetadata) -> Result<Self,ElectionError> {
        let mut tallys = CandidateTallies::default();
        for i in 0..metadata.num_candidates() { tallys.register(CandidateIndex(i))?; }
        Ok(Election{ metadata, ballots: vec![], lookup: HashMap::default(), tallys, informal: 0 })
    }

    pub fn metadata(&self) -> &ElectionMetadata { &self.metadata }

    /// The number of votes the given candidate currently holds. Before the count is run,
    /// this is the number of ballots whose top usable preference is that candidate.
    pub fn tally(&self,candidate:CandidateIndex) -> BallotPaperCount { self.tallys.tally(candidate) }

    /// Total formal ballots registered so far.
    pub fn num_votes(&self) -> BallotPaperCount { self.ballots.iter().map(|b|b.n).sum() }

    /// Register one voter's ballot. An empty ballot is informal and takes no further part.
    /// Preferences are deduplicated keeping the first occurrence, names not in the contest
    /// are dropped, and the ballot immediately casts a vote for its top usable preference.
    pub fn add_ballot(&mut self,preferences:&[&str]) -> Result<(),ElectionError> {
        if preferences.is_empty() { self.informal+=1; return Ok(()); }
        let interpreted = interpret_preferences(&self.metadata,preferences);
        let index = match self.lookup.get(&interpreted) {
            Some(&index) => { self.ballots[index].n+=BallotPaperCount(1); index }
            None => {
                let mut group = BallotGroup::new(interpreted.clone(),BallotPaperCount(1));
                group.resolve(self.tallys.continuing(),LookaheadDepth(0));
                self.lookup.insert(interpreted,self.ballots.len());
                self.ballots.push(group);
                self.ballots.len()-1
            }
        };
        if let Some(choice) = self.ballots[index].current {
            self.tallys.increment(choice,BallotPaperCount(1))?;
        }
        Ok(())
    }

    /// Extract the votes in their serializable form.
    pub fn to_election_data(&self) -> ElectionData {
        ElectionData{
            metadata: self.metadata.clone(),
            ballots: self.ballots.iter().map(|b|BallotGroup::new(b.candidates.clone(),b.n)).collect(),
            informal: self.informal,
        }
    }

    /// Run the count to completion, returning the full round by round transcript.
    pub fn distribute(self,print_progress:bool) -> Result<Transcript,ElectionError> {
        let Election{ metadata, ballots, tallys, .. } = self;
        let mut work = InstantRunoffCounter::new(&metadata,ballots,tallys,print_progress);
        work.go()?;
        Ok(work.transcript)
    }

    /// Run the count to completion, returning just the result.
    pub fn run(self) -> Result<Outcome,ElectionError> {
        Ok(self.distribute(false)?.outcome)
    }
}

/// Run the count on an election in its serializable form.
pub fn distribute_instant_runoff(data:&ElectionData,print_progress:bool) -> Result<Transcript,ElectionError> {
    let mut tallys = CandidateTallies::default();
    for i in 0..data.metadata.num_candidates() { tallys.register(CandidateIndex(i))?; }
    let mut work = InstantRunoffCounter::new(&data.metadata,data.ballots.clone(),tallys,print_progress);
    work.go()?;
    Ok(work.transcript)
}

/// The main workhorse that runs the rounds of counting.
struct InstantRunoffCounter<'a> {
    metadata : &'a ElectionMetadata,
    ballots : Vec<BallotGroup>,
    tallys : CandidateTallies,
    /// candidates no longer continuing, in order of elimination.
    eliminated : Vec<CandidateIndex>,
    /// the lookahead depth ballots are currently resolved at.
    depth : LookaheadDepth,
    /// the deepest lookahead used so far; it fixes the majority denominator scaling.
    deepest : LookaheadDepth,
    num_ballots : BallotPaperCount,
    print_progress : bool,
    transcript : Transcript,
}

impl <'a> InstantRunoffCounter<'a> {
    fn new(metadata:&'a ElectionMetadata,mut ballots:Vec<BallotGroup>,tallys:CandidateTallies,print_progress:bool) -> Self {
        for ballot in &mut ballots { ballot.resolve(tallys.continuing(),LookaheadDepth(0)); }
        let num_ballots = ballots.iter().map(|b|b.n).sum();
        InstantRunoffCounter{
            metadata,
            ballots,
            tallys,
            eliminated: vec![],
            depth: LookaheadDepth(0),
            deepest: LookaheadDepth(0),
            num_ballots,
            print_progress,
            transcript: Transcript{ counts: vec![], outcome: Outcome::NoWinner },
        }
    }

    /// The number of votes a winner's tally must strictly exceed half of.
    /// Every formal ballot stays in the denominator for the whole count, and each level
    /// of lookahead ever used doubles it.
    fn total_votes(&self) -> usize { self.num_ballots.0<<self.deepest.0 }

    /// One counting pass. Tallies are zeroed and rebuilt; a ballot is only re-read if its
    /// cached vote has just left the contest, except that lookahead re-reads every ballot.
    /// Returns the weight of exhausted ballots.
    fn count_votes(&mut self) -> Result<BallotPaperCount,ElectionError> {
        self.tallys.reset_all();
        let mut exhausted = BallotPaperCount(0);
        for ballot in &mut self.ballots {
            if self.depth.0>0 || ballot.current.is_some_and(|c|!self.tallys.is_continuing(c)) {
                ballot.resolve(self.tallys.continuing(),self.depth);
            }
            match ballot.current {
                Some(choice) => self.tallys.increment(choice,ballot.n)?,
                None => exhausted+=ballot.n,
            }
        }
        Ok(exhausted)
    }

    fn tallies_snapshot(&self,exhausted:BallotPaperCount) -> PerCandidate<BallotPaperCount> {
        PerCandidate{
            candidate: (0..self.tallys.num_candidates()).map(|i|self.tallys.tally(CandidateIndex(i))).collect(),
            exhausted,
        }
    }

    fn end_of_count_step(&mut self,reason:ReasonForCount,total_votes:usize,exhausted:BallotPaperCount,eliminated:Vec<CandidateIndex>) {
        self.transcript.counts.push(SingleCount{
            reason,
            depth: self.depth,
            total_votes,
            tallies: self.tallies_snapshot(exhausted),
            eliminated,
        });
    }

    fn print_candidates_names(&self) {
        println!("{}",self.metadata.candidates.iter().map(|c|c.name.clone()).collect::<Vec<String>>().join("\t")+"\tExhausted");
    }
    fn print_tallys(&self,exhausted:BallotPaperCount) {
        println!("{}",(0..self.tallys.num_candidates()).map(|i|self.tallys.tally(CandidateIndex(i)).to_string()).collect::<Vec<String>>().join("\t")+"\t"+&exhausted.0.to_string());
    }

    fn go(&mut self) -> Result<(),ElectionError> {
        if self.print_progress { self.print_candidates_names(); }
        if self.num_ballots.0==0 {
            self.transcript.outcome=Outcome::NoWinner;
            return Ok(());
        }
        let mut reason = ReasonForCount::FirstPreferenceCount;
        loop {
            // everyone is either still continuing or recorded as eliminated, never both
            debug_assert_eq!(self.eliminated.len()+self.tallys.num_continuing(),self.tallys.num_candidates());
            if self.tallys.num_continuing()==0 {
                self.transcript.outcome=Outcome::NoWinner;
                return Ok(());
            }
            let exhausted = self.count_votes()?;
            if self.print_progress { self.print_tallys(exhausted); }
            let total_votes = self.total_votes();
            if let Some(winner) = self.tallys.majority_holder(total_votes) {
                self.end_of_count_step(reason,total_votes,exhausted,vec![]);
                if self.print_progress { println!("Elected {}",self.metadata.candidate(winner).name); }
                self.transcript.outcome=Outcome::Winner(winner);
                return Ok(());
            }
            let minimum = self.tallys.minimum_holders();
            if minimum.len()<self.tallys.num_continuing() {
                self.end_of_count_step(reason,total_votes,exhausted,minimum.clone());
                for &candidate in &minimum {
                    if self.print_progress { println!("Excluding {}",self.metadata.candidate(candidate).name); }
                    self.tallys.remove(candidate);
                    self.eliminated.push(candidate);
                }
                self.depth=LookaheadDepth(0);
                reason=ReasonForCount::Elimination(minimum);
            } else if self.depth.0+1<self.tallys.num_continuing() {
                // everyone left is tied for the minimum, so look one preference deeper
                // rather than eliminate the whole field.
                self.end_of_count_step(reason,total_votes,exhausted,vec![]);
                self.depth=LookaheadDepth(self.depth.0+1);
                if self.deepest<self.depth { self.deepest=self.depth; }
                if self.print_progress { println!("All tied, looking deeper : {:?}",self.depth); }
                reason=ReasonForCount::DeeperLookahead;
            } else {
                // ballots have no preferences deep enough to tell the remaining candidates apart.
                self.end_of_count_step(reason,total_votes,exhausted,vec![]);
                let remaining = self.tallys.continuing_in_ballot_order();
                self.transcript.outcome = if remaining.len()==1 { Outcome::Winner(remaining[0]) } else { Outcome::Tied(remaining) };
                return Ok(());
            }
        }
    }
}
