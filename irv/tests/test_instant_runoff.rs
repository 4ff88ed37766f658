// Copyright 2024-2025 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! Run small elections and check the results against hand computed counts.

use irv::ballot_metadata::{CandidateIndex, ElectionError};
use irv::ballot_paper::LookaheadDepth;
use irv::count_transcript::{CountIndex, Outcome, ReasonForCount, Transcript};
use irv::instant_runoff::Election;

const ALICE : CandidateIndex = CandidateIndex(0);
const BOB : CandidateIndex = CandidateIndex(1);
const CHARLIE : CandidateIndex = CandidateIndex(2);

fn election(ballots:&[&[&str]]) -> Election {
    let mut election = Election::new(&["Alice","Bob","Charlie"]).unwrap();
    for ballot in ballots { election.add_ballot(ballot).unwrap(); }
    election
}

/// Every count's tallies plus its exhausted pile should add back up to the number of ballots.
fn check_conservation(transcript:&Transcript,num_ballots:usize) {
    for count in &transcript.counts {
        let counted : usize = count.tallies.candidate.iter().map(|t|t.0).sum();
        assert_eq!(num_ballots,counted+count.tallies.exhausted.0);
    }
}

#[test]
fn test_first_count_majority() {
    let election = election(&[
        &["Alice","Bob","Charlie"],
        &["Alice","Charlie","Bob"],
        &["Charlie","Bob","Alice"],
        &["Bob","Charlie","Alice"],
        &["Alice","Charlie","Bob"],
    ]);
    let transcript = election.distribute(false).unwrap();
    assert_eq!(Outcome::Winner(ALICE),transcript.outcome);
    assert_eq!(1,transcript.num_counts()); // 3 of 5 first preferences is already a majority
    check_conservation(&transcript,5);
}

#[test]
fn test_win_after_elimination() {
    let election = election(&[
        &["Alice","Bob","Charlie"],
        &["Bob","Alice","Charlie"],
        &["Charlie","Bob","Alice"],
        &["Charlie","Alice","Bob"],
        &["Bob","Charlie","Alice"],
    ]);
    let transcript = election.distribute(false).unwrap();
    // Alice goes out on 1 vote; her ballot moves to Bob, who then has 3 of 5.
    assert_eq!(Outcome::Winner(BOB),transcript.outcome);
    assert_eq!(2,transcript.num_counts());
    assert_eq!(vec![ALICE],transcript.count(CountIndex(0)).eliminated);
    assert_eq!(ReasonForCount::Elimination(vec![ALICE]),transcript.count(CountIndex(1)).reason);
    check_conservation(&transcript,5);
}

#[test]
fn test_eliminate_least_voted() {
    let election = election(&[
        &["Charlie","Alice","Bob"],
        &["Charlie","Bob","Alice"],
        &["Alice","Charlie","Bob"],
        &["Bob","Alice","Charlie"],
        &["Bob","Charlie","Alice"],
    ]);
    // Alice out first on 1 vote, her ballot's next preference is Charlie : 3 of 5.
    assert_eq!(Outcome::Winner(CHARLIE),election.run().unwrap());
}

#[test]
fn test_symmetric_tie_exhausts_lookahead() {
    let election = election(&[
        &["Alice","Bob","Charlie"],
        &["Bob","Charlie","Alice"],
        &["Charlie","Alice","Bob"],
    ]);
    let transcript = election.distribute(false).unwrap();
    // A perfect 3 way cycle : every depth of lookahead leaves everyone on 1 vote each.
    assert_eq!(Outcome::Tied(vec![ALICE,BOB,CHARLIE]),transcript.outcome);
    assert_eq!(3,transcript.num_counts()); // depths 0, 1 and 2, then nothing deeper to try
    assert_eq!(LookaheadDepth(0),transcript.count(CountIndex(0)).depth);
    assert_eq!(ReasonForCount::DeeperLookahead,transcript.count(CountIndex(1)).reason);
    assert_eq!(LookaheadDepth(1),transcript.count(CountIndex(1)).depth);
    assert_eq!(LookaheadDepth(2),transcript.count(CountIndex(2)).depth);
    // the majority bar doubles with each level of lookahead used
    assert_eq!(3,transcript.count(CountIndex(0)).total_votes);
    assert_eq!(6,transcript.count(CountIndex(1)).total_votes);
    assert_eq!(12,transcript.count(CountIndex(2)).total_votes);
    check_conservation(&transcript,3);
}

#[test]
fn test_only_empty_ballots() {
    let mut election = Election::new(&["Alice","Bob","Charlie"]).unwrap();
    election.add_ballot(&[]).unwrap();
    election.add_ballot(&[]).unwrap();
    assert_eq!(2,election.to_election_data().informal);
    assert_eq!(Outcome::NoWinner,election.run().unwrap());
}

#[test]
fn test_no_ballots_at_all() {
    let election = Election::new(&["Alice","Bob"]).unwrap();
    let transcript = election.distribute(false).unwrap();
    assert_eq!(Outcome::NoWinner,transcript.outcome);
    assert_eq!(0,transcript.num_counts()); // never even a first preference count
}

#[test]
fn test_repeated_preference_deduplicated() {
    let mut election = Election::new(&["Alice","Bob","Charlie"]).unwrap();
    election.add_ballot(&["Alice","Alice","Charlie"]).unwrap();
    let data = election.to_election_data();
    assert_eq!(vec![ALICE,CHARLIE],data.ballots[0].candidates);
    assert_eq!(1,election.tally(ALICE).0); // the first vote went to Alice exactly once
}

#[test]
fn test_identical_ballots_grouped() {
    let election = election(&[
        &["Alice","Charlie","Bob"],
        &["Alice","Charlie","Bob"],
        &["Bob","Alice","Charlie"],
    ]);
    let data = election.to_election_data();
    assert_eq!(2,data.ballots.len());
    assert_eq!(3,data.num_votes().0);
    assert_eq!(2,data.ballots.iter().map(|b|b.n.0).max().unwrap());
}

#[test]
fn test_single_candidate_wins_regardless_of_ballot_content() {
    let mut election = Election::new(&["Alice"]).unwrap();
    election.add_ballot(&["Mallory"]).unwrap(); // not a contest candidate, so no usable preference
    assert_eq!(Outcome::Winner(ALICE),election.run().unwrap());
}

#[test]
fn test_all_invalid_ballot_is_harmless() {
    let mut election = election(&[
        &["Alice","Bob","Charlie"],
        &["Alice","Charlie","Bob"],
        &["Bob","Charlie","Alice"],
    ]);
    election.add_ballot(&["Mallory","Eve"]).unwrap();
    let transcript = election.distribute(false).unwrap();
    // the ballot contributes no weight to anyone but still sits in the exhausted pile
    assert_eq!(1,transcript.count(CountIndex(0)).tallies.exhausted.0);
    check_conservation(&transcript,4);
    // 4 ballots : Alice's 2 of 4 is no longer a majority, Charlie goes out, then Bob falls to Alice
    assert_eq!(Outcome::Winner(ALICE),transcript.outcome);
}

#[test]
fn test_short_ballots_tie_after_deepening() {
    let election = election(&[
        &["Alice","Bob"],
        &["Bob","Alice"],
        &["Charlie"],
    ]);
    let transcript = election.distribute(false).unwrap();
    // All tied on the first count. One level deeper Charlie's ballot is exhausted and he
    // drops to zero, so he goes out; Alice and Bob stay inseparable at a vote each against
    // a majority bar that lookahead already doubled to more than 3.
    assert_eq!(Outcome::Tied(vec![ALICE,BOB]),transcript.outcome);
    assert_eq!(vec![CHARLIE],transcript.count(CountIndex(1)).eliminated);
    check_conservation(&transcript,3);
}

#[test]
fn test_duplicate_candidate_rejected() {
    assert!(matches!(Election::new(&["Alice","Bob","Alice"]),Err(ElectionError::DuplicateCandidate(_))));
}

#[test]
fn test_no_candidates() {
    let mut election = Election::new(&[]).unwrap();
    election.add_ballot(&["Alice"]).unwrap();
    assert_eq!(Outcome::NoWinner,election.run().unwrap());
}

#[test]
fn test_describe_outcomes() {
    let metadata = irv::ballot_metadata::ElectionMetadata::from_names(&["Alice","Bob","Charlie"]).unwrap();
    assert_eq!("Bob",Outcome::Winner(BOB).describe(&metadata));
    assert_eq!("Alice, Bob, Charlie",Outcome::Tied(vec![ALICE,BOB,CHARLIE]).describe(&metadata));
    assert_eq!("No winner",Outcome::NoWinner.describe(&metadata));
}

#[test]
fn test_election_data_round_trip() {
    let election = election(&[
        &["Alice","Bob","Charlie"],
        &["Bob","Charlie","Alice"],
        &["Bob","Charlie","Alice"],
    ]);
    let data = election.to_election_data();
    let serialized = serde_json::to_string(&data).unwrap();
    let recovered : irv::election_data::ElectionData = serde_json::from_str(&serialized).unwrap();
    assert_eq!(data.ballots,recovered.ballots);
    assert_eq!(data.informal,recovered.informal);
    // a recovered file counts to the same result
    assert_eq!(data.distribute(false).unwrap().outcome,recovered.distribute(false).unwrap().outcome);
}

#[test]
fn test_transcript_serializes() {
    let election = election(&[
        &["Alice","Bob","Charlie"],
        &["Bob","Alice","Charlie"],
        &["Charlie","Bob","Alice"],
        &["Charlie","Alice","Bob"],
        &["Bob","Charlie","Alice"],
    ]);
    let metadata = election.metadata().clone();
    let transcript = election.distribute(false).unwrap();
    let with_metadata = irv::count_transcript::TranscriptWithMetadata{ metadata, transcript };
    let serialized = serde_json::to_string(&with_metadata).unwrap();
    let recovered : irv::count_transcript::TranscriptWithMetadata = serde_json::from_str(&serialized).unwrap();
    assert_eq!(with_metadata.transcript.outcome,recovered.transcript.outcome);
    assert_eq!(with_metadata.transcript.num_counts(),recovered.transcript.num_counts());
}
