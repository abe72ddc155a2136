// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.


//! This parses a small constituency table, runs the whole allocation over it,
//! and checks the table written back out.


#[cfg(test)]
mod tests {
    use apportion::parse_util::{ConstituencyTable, TableError, TableSpec};
    use apportion::party_metadata::{ContestName, NumberOfSeats, PartyIndex};

    fn spec() -> TableSpec {
        TableSpec{
            party_columns : vec!["A".to_string(),"B".to_string(),"C".to_string(),"D".to_string()],
            seats_column : "seats".to_string(),
            total_votes_column : Some("total".to_string()),
            name_column : Some("district".to_string()),
        }
    }

    fn contest_name() -> ContestName {
        ContestName{ year: "2024".to_string(), authority: "PKW".to_string(), name: "test".to_string() }
    }

    const TABLE : &str = "\
district,region,seats,total,A,B,C,D
North,coast,8,230000,100000,80000,30000,20000
South,inland,3,61000,20000,20000,20000,0
Empty,nowhere,2,0,0,0,0,0
";

    fn parse(table:&str,threshold_percent:f64) -> anyhow::Result<ConstituencyTable> {
        ConstituencyTable::from_reader(table.as_bytes(),&spec(),contest_name(),threshold_percent)
    }

    #[test]
    fn parses_columns_by_name() {
        let table = parse(TABLE,0.0).unwrap();
        assert_eq!(table.data.num_parties(),4);
        assert_eq!(table.data.num_constituencies(),3);
        assert_eq!(table.data.total_seats(),11);
        let north = &table.data.constituencies[0];
        assert_eq!(north.name,"North");
        assert_eq!(north.seats,NumberOfSeats(8));
        assert_eq!(north.votes,vec![100000,80000,30000,20000]);
        assert_eq!(north.total_votes,230000);
        let totals = table.data.national_totals();
        assert_eq!(totals.by_party,vec![120000,100000,50000,20000]);
        assert_eq!(totals.total_votes,291000);
    }

    #[test]
    fn allocates_and_writes_seat_columns() {
        let table = parse(TABLE,0.0).unwrap();
        let transcript = table.data.allocate();
        assert_eq!(transcript.eligible,(0..4).map(PartyIndex).collect::<Vec<_>>());
        // the textbook row.
        assert_eq!(transcript.constituencies[0].transcript.seats_by_party,vec![4,3,1,0]);
        // three-way tie resolved by column order, round robin.
        assert_eq!(transcript.constituencies[1].transcript.seats_by_party,vec![1,1,1,0]);
        // no votes at all: an allowed under-allocation, not an error.
        assert!(transcript.constituencies[2].transcript.under_allocated());

        let mut written = Vec::new();
        table.write_with_seats(&mut written,&transcript).unwrap();
        let written = String::from_utf8(written).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next().unwrap(),"district,region,seats,total,A,B,C,D,SEATS_A,SEATS_B,SEATS_C,SEATS_D");
        assert_eq!(lines.next().unwrap(),"North,coast,8,230000,100000,80000,30000,20000,4,3,1,0");
        assert_eq!(lines.next().unwrap(),"South,inland,3,61000,20000,20000,20000,0,1,1,1,0");
        assert_eq!(lines.next().unwrap(),"Empty,nowhere,2,0,0,0,0,0,0,0,0,0");
    }

    #[test]
    fn threshold_restricts_seat_columns() {
        // D is on 20000/291000, about 6.9% nationwide, and misses a 7% threshold.
        let table = parse(TABLE,7.0).unwrap();
        let transcript = table.data.allocate();
        assert_eq!(transcript.eligible,(0..3).map(PartyIndex).collect::<Vec<_>>());
        let mut written = Vec::new();
        table.write_with_seats(&mut written,&transcript).unwrap();
        let written = String::from_utf8(written).unwrap();
        assert_eq!(written.lines().next().unwrap(),"district,region,seats,total,A,B,C,D,SEATS_A,SEATS_B,SEATS_C");
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let mut bad_spec = spec();
        bad_spec.party_columns.push("E".to_string());
        let err = ConstituencyTable::from_reader(TABLE.as_bytes(),&bad_spec,contest_name(),0.0).unwrap_err();
        match err.downcast_ref::<TableError>() {
            Some(TableError::MissingColumn(column)) => assert_eq!(column,"E"),
            _ => panic!("expected a MissingColumn error, got {}",err),
        }
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let table = "district,region,seats,total,A,B,C,D\nNorth,coast,8,230000,lots,80000,30000,20000\n";
        let err = parse(table,0.0).unwrap_err();
        match err.downcast_ref::<TableError>() {
            Some(TableError::BadCount{row,column,value}) => {
                assert_eq!(*row,0);
                assert_eq!(column,"A");
                assert_eq!(value,"lots");
            }
            _ => panic!("expected a BadCount error, got {}",err),
        }
    }

    #[test]
    fn negative_count_is_rejected() {
        let table = "district,region,seats,total,A,B,C,D\nNorth,coast,8,230000,-5,80000,30000,20000\n";
        let err = parse(table,0.0).unwrap_err();
        assert!(matches!(err.downcast_ref::<TableError>(),Some(TableError::BadCount{..})));
    }

    #[test]
    fn party_columns_summed_when_no_total_column_named() {
        let mut no_total = spec();
        no_total.total_votes_column=None;
        let table = ConstituencyTable::from_reader(TABLE.as_bytes(),&no_total,contest_name(),0.0).unwrap();
        assert_eq!(table.data.constituencies[0].total_votes,230000);
        assert_eq!(table.data.national_totals().total_votes,290000);
    }
}
