// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.


//! The nationwide electoral threshold.


use serde::{Serialize,Deserialize};
use crate::party_metadata::PartyIndex;

/// Each party's vote total summed across every constituency, and the grand total
/// of votes cast. The grand total comes from the table's total-votes column so it
/// may be an audited figure larger than the sum of the party columns.
/// Computed once; read-only afterwards.
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct NationalVoteTotals {
    /// votes for each party, same order and length as the metadata party list.
    pub by_party : Vec<usize>,
    pub total_votes : usize,
}

impl NationalVoteTotals {
    /// a party's nationwide percentage share, 0 if no votes were cast anywhere.
    pub fn share(&self,party:PartyIndex) -> f64 {
        if self.total_votes==0 { 0.0 }
        else { 100.0*self.by_party[party.0] as f64/self.total_votes as f64 }
    }
}

/// Work out which parties clear the electoral threshold nationwide.
///
/// A party qualifies iff its share *strictly* exceeds `threshold_percent`; a party
/// sitting exactly on the threshold is out. Should the threshold knock out every
/// party, the full party list is returned instead, so that seats still get
/// allocated to someone. That fallback is deliberate and relied upon.
///
/// The returned list is in table column order, which is also the order ties are
/// broken in by the allocator.
/// ```
/// use apportion::threshold::{NationalVoteTotals, eligible_parties};
/// use apportion::party_metadata::PartyIndex;
/// let totals = NationalVoteTotals{ by_party: vec![100,50,20], total_votes: 1000 };
/// // shares of 10%, 5% and 2%. Nobody passes a 50% threshold, so everyone is kept.
/// assert_eq!(eligible_parties(&totals,50.0),vec![PartyIndex(0),PartyIndex(1),PartyIndex(2)]);
/// assert_eq!(eligible_parties(&totals,4.0),vec![PartyIndex(0),PartyIndex(1)]);
/// ```
pub fn eligible_parties(totals:&NationalVoteTotals,threshold_percent:f64) -> Vec<PartyIndex> {
    let passing : Vec<PartyIndex> = (0..totals.by_party.len()).map(PartyIndex)
        .filter(|&p|totals.share(p)>threshold_percent).collect();
    if passing.is_empty() { (0..totals.by_party.len()).map(PartyIndex).collect() }
    else { passing }
}
