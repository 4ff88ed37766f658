// Copyright 2024 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! Utilities to read elections from files.

use crate::election_data::ElectionData;
use crate::instant_runoff::Election;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a .irv JSON file.
pub fn read_election_data(path:&Path) -> anyhow::Result<ElectionData> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

/// Read raw ballots from a CSV file : one ballot per record, candidate names in
/// preference order, blank cells ignored. There is no header row.
pub fn read_raw_ballots(path:&Path) -> anyhow::Result<Vec<Vec<String>>> {
    parse_raw_ballots(File::open(path)?)
}

/// Like [read_raw_ballots], from anything readable.
pub fn parse_raw_ballots(source:impl Read) -> anyhow::Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(source);
    let mut ballots = vec![];
    for record in reader.records() {
        let record = record?;
        ballots.push(record.iter().map(|s|s.trim()).filter(|s|!s.is_empty()).map(|s|s.to_string()).collect());
    }
    Ok(ballots)
}

/// Assemble an election from a candidate list and raw ballots.
pub fn election_from_raw_ballots(candidate_names:&[&str],raw_ballots:&[Vec<String>]) -> anyhow::Result<Election> {
    let mut election = Election::new(candidate_names)?;
    for ballot in raw_ballots {
        election.add_ballot(&ballot.iter().map(|s|s.as_str()).collect::<Vec<_>>())?;
    }
    Ok(election)
}
