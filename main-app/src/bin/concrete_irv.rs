// Copyright 2024-2025 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


use clap::Parser;
use std::path::PathBuf;
use std::fs::File;
use irv::election_data::ElectionData;
use irv::count_transcript::TranscriptWithMetadata;
use irv::parse_util::{election_from_raw_ballots, read_raw_ballots};
use anyhow::anyhow;

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="ConcreteIRV")]
/// Count instant runoff (single winner preferential) elections.
struct Opts {
    /// The name of the .irv file to get votes from, or a .csv file of raw ballots
    /// (one ballot per line, candidate names in preference order, no header).
    votes : PathBuf,

    /// The candidates in ballot paper order, comma separated. Required for .csv input,
    /// which does not carry its own candidate list; ignored for .irv input.
    #[clap(short, long, value_delimiter=',')]
    candidates : Option<Vec<String>>,

    /// An optional .transcript file to store the full round by round count in.
    /// If not specified, defaults to the votes file with its extension changed to .transcript.
    #[clap(short, long)]
    transcript : Option<PathBuf>,

    /// Whether the status of the count should be printed out to stdout.
    #[clap(long)]
    verbose : bool,
}

fn main() -> anyhow::Result<()> {
    let opt : Opts = Opts::parse();

    let data : ElectionData = if opt.votes.extension().is_some_and(|e|e=="csv") {
        let candidates = opt.candidates.as_ref().ok_or_else(||anyhow!("Raw .csv ballots need --candidates to say who is in the contest"))?;
        let candidates : Vec<&str> = candidates.iter().map(|s|s.as_str()).collect();
        let raw_ballots = read_raw_ballots(&opt.votes)?;
        election_from_raw_ballots(&candidates,&raw_ballots)?.to_election_data()
    } else {
        let file = File::open(&opt.votes)?;
        serde_json::from_reader(file)?
    };

    let transcript = data.distribute(opt.verbose)?;
    println!("{}",transcript.outcome.describe(&data.metadata));

    let transcript_file = match &opt.transcript {
        None => opt.votes.with_extension("transcript"),
        Some(tf) => tf.clone(),
    };
    if let Some(parent) = transcript_file.parent() { std::fs::create_dir_all(parent)? }
    serde_json::to_writer(File::create(&transcript_file)?,&TranscriptWithMetadata{ metadata: data.metadata, transcript })?;

    Ok(())
}
