//! Information about the contest, such as candidates.

use serde::{Serialize,Deserialize};
use std::fmt;
use thiserror::Error;

/// a candidate, referred to by position on the ballot paper, 0 being first
#[derive(Clone, Copy, PartialEq, Eq, Hash,Serialize,Deserialize)]
pub struct CandidateIndex(pub usize);
// type alias really, don't want long display
impl fmt::Display for CandidateIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for CandidateIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// information about a candidate in the contest.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct Candidate {
    pub name : String,
}

/// Information about the election
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct ElectionMetadata {
    /// the candidates in the contest, in ballot paper order.
    pub candidates : Vec<Candidate>,
}

impl ElectionMetadata {
    /// Make metadata from a list of candidate names, in ballot paper order.
    pub fn from_names(names:&[&str]) -> Result<Self,ElectionError> {
        let mut candidates : Vec<Candidate> = vec![];
        for name in names {
            if candidates.iter().any(|c|c.name==*name) { return Err(ElectionError::DuplicateCandidate(name.to_string())); }
            candidates.push(Candidate{name:name.to_string()});
        }
        Ok(ElectionMetadata{candidates})
    }
    pub fn candidate(&self,index:CandidateIndex) -> &Candidate { &self.candidates[index.0] }
    pub fn num_candidates(&self) -> usize { self.candidates.len() }
    /// Find the candidate with the given name, should there be one.
    pub fn candidate_of_name(&self,name:&str) -> Option<CandidateIndex> {
        self.candidates.iter().position(|c|c.name==name).map(CandidateIndex)
    }
}

/// A violation of the contract for setting up or counting an election. These abort the
/// count; a tie or an election with no winner is an ordinary [`crate::count_transcript::Outcome`], not an error.
#[derive(Error,Debug)]
pub enum ElectionError {
    /// the same candidate name was given more than once at election setup.
    #[error("candidate {0} is listed more than once")]
    DuplicateCandidate(String),
    /// the counting logic tried to give votes to someone not a continuing candidate.
    /// Should be unreachable; it means the count itself has a bug.
    #[error("vote counted for candidate {0} who is not a continuing candidate")]
    UnknownCandidate(CandidateIndex),
}
