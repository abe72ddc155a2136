// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.


use serde::{Deserialize,Serialize};
use crate::allocation_transcript::{ConstituencyTranscript, ContestTranscript};
use crate::highest_averages::dhondt;
use crate::party_metadata::{ContestMetadata, NumberOfSeats};
use crate::threshold::{eligible_parties, NationalVoteTotals};

/// Vote totals and seat counts for the contest.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct ElectionData {
    pub metadata : ContestMetadata,
    pub constituencies : Vec<Constituency>,
}

/// One electoral district: its vote tally per party and the seats it fills.
/// Allocated independently of every other constituency.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct Constituency {
    pub name : String,
    pub seats : NumberOfSeats,
    /// votes for each party, same order and length as the metadata party list.
    pub votes : Vec<usize>,
    /// total votes cast here. Often the sum of the party columns, but may be an
    /// independently audited figure including votes for nobody on the list.
    pub total_votes : usize,
}

impl Constituency {
    /// the votes going to listed parties, which may be below `total_votes`.
    pub fn party_votes_sum(&self) -> usize { self.votes.iter().sum() }
}

impl ElectionData {
    pub fn num_parties(&self) -> usize { self.metadata.parties.len() }
    pub fn num_constituencies(&self) -> usize { self.constituencies.len() }
    /// Number of seats up for allocation over the whole contest.
    pub fn total_seats(&self) -> usize { self.constituencies.iter().map(|c|c.seats.0).sum() }

    /// Sum each party's votes and the total-votes column over all constituencies.
    /// This is the one shared, read-only input every per-constituency allocation consults.
    pub fn national_totals(&self) -> NationalVoteTotals {
        let mut by_party = vec![0;self.num_parties()];
        let mut total_votes = 0;
        for constituency in &self.constituencies {
            for (party,votes) in constituency.votes.iter().enumerate() { by_party[party]+=votes; }
            total_votes+=constituency.total_votes;
        }
        NationalVoteTotals{ by_party, total_votes }
    }

    /// Apply the threshold once, then run the D'Hondt allocation over every
    /// constituency with the metadata's threshold. Convenience method.
    pub fn allocate(&self) -> ContestTranscript {
        let national_totals = self.national_totals();
        let eligible = eligible_parties(&national_totals,self.metadata.threshold_percent);
        let constituencies = self.constituencies.iter().map(|constituency|ConstituencyTranscript{
            name : constituency.name.clone(),
            transcript : dhondt(&constituency.votes,&eligible,constituency.seats),
        }).collect();
        ContestTranscript{ national_totals, eligible, constituencies }
    }

    pub fn print_summary(&self) {
        println!("Summary for {}",self.metadata.name.human_readable_name());
        println!("{} parties, {} constituencies, {} seats",self.num_parties(),self.num_constituencies(),self.total_seats());
        let totals = self.national_totals();
        println!("{} total votes cast, {} for listed parties",totals.total_votes,totals.by_party.iter().sum::<usize>());
    }
}
