// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.


//! This exercises the electoral threshold, in particular the deliberate
//! fall-back to the full party list when nobody passes.


#[cfg(test)]
mod tests {
    use apportion::party_metadata::PartyIndex;
    use apportion::threshold::{eligible_parties, NationalVoteTotals};

    fn parties(indices:&[usize]) -> Vec<PartyIndex> { indices.iter().map(|&i|PartyIndex(i)).collect() }

    #[test]
    fn parties_below_threshold_are_dropped() {
        // shares of 50%, 30%, 15% and 5%.
        let totals = NationalVoteTotals{ by_party: vec![500,300,150,50], total_votes: 1000 };
        assert_eq!(eligible_parties(&totals,10.0),parties(&[0,1,2]));
        assert_eq!(eligible_parties(&totals,29.0),parties(&[0,1]));
    }

    #[test]
    fn threshold_is_strict() {
        // party 1 sits exactly on 40% and must be out.
        let totals = NationalVoteTotals{ by_party: vec![600,400], total_votes: 1000 };
        assert_eq!(eligible_parties(&totals,40.0),parties(&[0]));
        assert_eq!(eligible_parties(&totals,39.999),parties(&[0,1]));
    }

    #[test]
    fn zero_threshold_admits_any_party_with_votes() {
        let totals = NationalVoteTotals{ by_party: vec![10,0,1], total_votes: 11 };
        assert_eq!(eligible_parties(&totals,0.0),parties(&[0,2]));
    }

    #[test]
    fn nobody_passing_falls_back_to_everyone() {
        // shares of 10%, 5% and 2%; a 50% threshold excludes all three, so all three stay.
        let totals = NationalVoteTotals{ by_party: vec![100,50,20], total_votes: 1000 };
        assert_eq!(eligible_parties(&totals,50.0),parties(&[0,1,2]));
    }

    #[test]
    fn zero_total_votes_means_zero_shares_and_the_fallback() {
        let totals = NationalVoteTotals{ by_party: vec![0,0], total_votes: 0 };
        assert_eq!(totals.share(PartyIndex(0)),0.0);
        assert_eq!(eligible_parties(&totals,0.0),parties(&[0,1]));
        assert_eq!(eligible_parties(&totals,5.0),parties(&[0,1]));
    }

    #[test]
    fn audited_total_larger_than_party_sum_shrinks_shares() {
        // 400 of 1000 votes went to nobody on the list; shares use the audited total,
        // so party 1 is on 25% here rather than the 41.7% of the listed-party vote.
        let totals = NationalVoteTotals{ by_party: vec![350,250], total_votes: 1000 };
        assert_eq!(eligible_parties(&totals,30.0),parties(&[0]));
    }
}
