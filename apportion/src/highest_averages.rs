// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.


//! This is the D'Hondt highest-averages allocation for one constituency.
//! Seats are handed out one at a time, each to the party whose quotient
//! votes/(seats already won+1) is currently greatest.


use crate::allocation_transcript::{AllocationTranscript, RoundIndex, SeatAwarded};
use crate::party_metadata::{NumberOfSeats, PartyIndex};

/// The main workhorse that assigns one constituency's seats.
pub struct HighestAveragesAllocator<'a> {
    /// votes for every party, indexed by party, including ineligible ones.
    votes : &'a [usize],
    /// the parties actually in the running, in table column order. Ties between
    /// equal quotients and equal raw votes go to the earlier entry of this list.
    eligible : &'a [PartyIndex],
    seats : NumberOfSeats,
    /// seats assigned so far, indexed like `votes`.
    mandates : Vec<usize>,
    transcript : AllocationTranscript,
}

impl <'a> HighestAveragesAllocator<'a> {
    pub fn new(votes:&'a [usize],eligible:&'a [PartyIndex],seats:NumberOfSeats) -> Self {
        HighestAveragesAllocator{
            votes,
            eligible,
            seats,
            mandates : vec![0;votes.len()],
            transcript : AllocationTranscript{
                seats_wanted : seats,
                rounds : vec![],
                seats_by_party : vec![],
            },
        }
    }

    fn quotient(&self,party:PartyIndex) -> usize { self.votes[party.0]/(self.mandates[party.0]+1) }

    /// The party taking the next seat and the quotient it won with, or None if
    /// no eligible party has a vote to its name. Highest quotient wins; a tie on
    /// quotient goes to the party with more raw votes; a tie on both goes to the
    /// party earlier in the eligible list.
    fn next_winner(&self) -> Option<(PartyIndex,usize)> {
        let mut best : Option<(PartyIndex,usize)> = None;
        for &party in self.eligible {
            let quotient = self.quotient(party);
            let better = match best {
                None => true,
                Some((current,best_quotient)) => quotient>best_quotient
                    || (quotient==best_quotient && self.votes[party.0]>self.votes[current.0]),
            };
            if better { best=Some((party,quotient)); }
        }
        // A party without any votes never gets a seat. Since the raw-vote tie break
        // prefers any party holding votes, this can only strike when every eligible
        // party is on zero, leaving the constituency under-allocated.
        best.filter(|&(party,_)|self.votes[party.0]>0)
    }

    pub fn go(&mut self) {
        for round in 0..self.seats.0 {
            match self.next_winner() {
                Some((winner,quotient)) => {
                    self.mandates[winner.0]+=1;
                    self.transcript.rounds.push(SeatAwarded{ round: RoundIndex(round), who: winner, quotient });
                }
                None => break, // later rounds would find the same nothing
            }
        }
        self.transcript.seats_by_party=self.mandates.clone();
    }
}

/// Allocate one constituency's seats by the D'Hondt method.
///
/// `votes` holds every party's votes in table column order; only parties listed in
/// `eligible` can win seats. Pure and deterministic; never fails. Asking for 0
/// seats returns an all-zero result.
/// ```
/// use apportion::highest_averages::dhondt;
/// use apportion::party_metadata::{NumberOfSeats, PartyIndex};
/// let eligible : Vec<PartyIndex> = (0..4).map(PartyIndex).collect();
/// let transcript = dhondt(&[100000,80000,30000,20000],&eligible,NumberOfSeats(8));
/// assert_eq!(transcript.seats_by_party,vec![4,3,1,0]);
/// ```
pub fn dhondt(votes:&[usize],eligible:&[PartyIndex],seats:NumberOfSeats) -> AllocationTranscript {
    let mut work = HighestAveragesAllocator::new(votes,eligible,seats);
    work.go();
    work.transcript
}
