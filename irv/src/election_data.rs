// Copyright 2024 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! Formal votes for an election, in the serializable form used by .irv files.

use crate::ballot_metadata::{ElectionError, ElectionMetadata};
use crate::ballot_paper::{BallotGroup, BallotPaperCount};
use crate::count_transcript::Transcript;
use crate::instant_runoff::distribute_instant_runoff;
use serde::{Serialize,Deserialize};

/// Formal votes for the election.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct ElectionData {
    pub metadata : ElectionMetadata,
    /// the distinct ways people voted, with multiplicity.
    pub ballots : Vec<BallotGroup>,
    /// number of informal votes : ballots with nothing usable on them.
    pub informal : usize,
}

impl ElectionData {
    /// Number of formal votes.
    pub fn num_votes(&self) -> BallotPaperCount {
        self.ballots.iter().map(|b|b.n).sum()
    }

    /// Run the count. Convenience method.
    pub fn distribute(&self,print_progress:bool) -> Result<Transcript,ElectionError> {
        distribute_instant_runoff(self,print_progress)
    }
}
