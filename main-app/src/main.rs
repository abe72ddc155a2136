// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use std::path::PathBuf;
use apportion::allocation_transcript::{AllocationTranscript, TranscriptWithMetadata};
use apportion::parse_util::{ConstituencyTable, TableSpec};
use apportion::party_metadata::{ContestMetadata, ContestName, PartyIndex};

#[derive(Parser)]
#[command(version)]
/// Compute legislative seat allocations for a table of constituencies using the
/// D'Hondt highest-averages method, optionally applying a nationwide electoral
/// threshold first. The table is written back with a SEATS_<party> column added
/// for every eligible party.
struct Opts {
    /// The CSV file with one row per constituency.
    table : PathBuf,

    /// The columns holding each party's votes, in ballot order. Comma separated, or give the flag repeatedly.
    #[arg(short, long, required=true, value_delimiter=',')]
    parties : Vec<String>,

    /// The column with the number of seats each constituency fills.
    #[arg(short, long)]
    seats : String,

    /// The column with the total vote count, should an audited figure be available.
    /// The party columns are summed if not given.
    #[arg(long)]
    total : Option<String>,

    /// The column naming each constituency.
    #[arg(long)]
    name : Option<String>,

    /// The electoral threshold percentage a party's national share must strictly exceed (0 for none).
    #[arg(short, long, default_value_t=0.0)]
    threshold : f64,

    /// Where to write the table with the seat columns appended.
    /// If not specified, defaults to the input name with _seats appended.
    #[arg(short, long)]
    output : Option<PathBuf>,

    /// An optional .transcript file to store the full allocation history in.
    #[arg(long)]
    transcript : Option<PathBuf>,

    /// The year the election was held, for labeling output.
    #[arg(long, default_value="")]
    year : String,

    /// The name of the authority running the election, for labeling output.
    #[arg(long, default_value="")]
    authority : String,
}

/// one line of seat counts for the eligible parties, for progress output.
fn seats_summary(metadata:&ContestMetadata,eligible:&[PartyIndex],transcript:&AllocationTranscript) -> String {
    eligible.iter().map(|&p|format!("{} {}",metadata.party(p).name,transcript.seats(p))).collect::<Vec<_>>().join(", ")
}

fn main() -> anyhow::Result<()> {
    let opt : Opts = Opts::parse();

    let spec = TableSpec{
        party_columns : opt.parties.clone(),
        seats_column : opt.seats.clone(),
        total_votes_column : opt.total.clone(),
        name_column : opt.name.clone(),
    };
    let contest_name = ContestName{
        year : opt.year.clone(),
        authority : opt.authority.clone(),
        name : opt.table.file_stem().map(|o|o.to_string_lossy().to_string()).unwrap_or_default(),
    };
    let table = ConstituencyTable::from_path(&opt.table,&spec,contest_name,opt.threshold)?;
    table.data.print_summary();

    let transcript = table.data.allocate();
    let metadata = &table.data.metadata;
    println!("Parties eligible for seats : {}",metadata.party_names(&transcript.eligible));
    let num_constituencies = table.data.num_constituencies();
    for (current,constituency) in transcript.constituencies.iter().enumerate() {
        println!("[{}/{}] {} : {}",current+1,num_constituencies,constituency.name,seats_summary(metadata,&transcript.eligible,&constituency.transcript));
        if constituency.transcript.under_allocated() {
            println!("Warning: {} assigned {} of {} seats as no eligible party recorded a vote there",constituency.name,constituency.transcript.seats_awarded(),constituency.transcript.seats_wanted);
        }
    }
    let national = transcript.national_seats_by_party();
    println!("Nationwide : {}",transcript.eligible.iter().map(|&p|format!("{} {}",metadata.party(p).name,national[p.0])).collect::<Vec<_>>().join(", "));

    let output_file = match &opt.output {
        None => {
            let tablename = opt.table.file_stem().map(|o|o.to_string_lossy()).unwrap_or_default();
            opt.table.with_file_name(tablename.to_string()+"_seats.csv")
        }
        Some(of) => of.clone(),
    };
    table.write_with_seats_to_path(&output_file,&transcript)?;

    if let Some(transcript_file) = &opt.transcript {
        let with_metadata = TranscriptWithMetadata{ metadata : table.data.metadata.clone(), transcript };
        with_metadata.save(transcript_file)?;
    }

    Ok(())
}
