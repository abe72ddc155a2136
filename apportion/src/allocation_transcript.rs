// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.


//! Store the history of the seat allocation.


use serde::{Serialize,Deserialize};
use crate::party_metadata::{ContestMetadata, NumberOfSeats, PartyIndex};
use crate::threshold::NationalVoteTotals;

/// The index of an allocation round within one constituency. 0 means the round
/// in which the first seat was assigned.
#[derive(Copy,Clone,Debug,Ord, PartialOrd, Eq, PartialEq,Hash,Serialize,Deserialize)]
pub struct RoundIndex(pub usize);

/// One seat being awarded to a party.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct SeatAwarded {
    pub round : RoundIndex,
    pub who : PartyIndex,
    /// the quotient votes/(seats already won+1), truncated, that won this round.
    pub quotient : usize,
}

/// Everything that happened while allocating one constituency's seats.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct AllocationTranscript {
    pub seats_wanted : NumberOfSeats,
    pub rounds : Vec<SeatAwarded>,
    /// final mandate count for each party, same order and length as the metadata party list.
    pub seats_by_party : Vec<usize>,
}

impl AllocationTranscript {
    pub fn seats(&self,party:PartyIndex) -> usize { self.seats_by_party[party.0] }
    /// The number of seats actually assigned. Normally equals `seats_wanted`.
    pub fn seats_awarded(&self) -> usize { self.rounds.len() }
    /// true if fewer seats were assigned than asked for, which only happens when
    /// no eligible party carried a single vote. A warning, not an error.
    pub fn under_allocated(&self) -> bool { self.seats_awarded()<self.seats_wanted.0 }
}

/// The transcript for one constituency, labeled by name.
#[derive(Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub struct ConstituencyTranscript {
    pub name : String,
    pub transcript : AllocationTranscript,
}

/// The full run: the national totals and eligible set computed once, and one
/// transcript per constituency.
#[derive(Clone,Debug,Serialize,Deserialize)]
pub struct ContestTranscript {
    pub national_totals : NationalVoteTotals,
    pub eligible : Vec<PartyIndex>,
    pub constituencies : Vec<ConstituencyTranscript>,
}

impl ContestTranscript {
    /// total seats each party won across all constituencies.
    pub fn national_seats_by_party(&self) -> Vec<usize> {
        let mut res = vec![0;self.national_totals.by_party.len()];
        for c in &self.constituencies {
            for (party,seats) in c.transcript.seats_by_party.iter().enumerate() {
                res[party]+=seats;
            }
        }
        res
    }
}

#[derive(Clone,Debug,Serialize,Deserialize)]
pub struct TranscriptWithMetadata {
    pub metadata : ContestMetadata,
    pub transcript : ContestTranscript,
}

impl TranscriptWithMetadata {
    /// write the transcript out as JSON, the format it is stored on disk in.
    pub fn save(&self,path:&std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent)? }
        let file = std::fs::File::create(path)?;
        serde_json::to_writer(file,self)?;
        Ok(())
    }
}
