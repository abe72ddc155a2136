// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.


//! Read a constituency table from a CSV file, and write the results back.
//! The table has one row per constituency; which columns mean what is given
//! by name in a [TableSpec]. Columns not named there pass through untouched
//! when the table is written back with `SEATS_<party>` columns appended.


use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use csv::StringRecord;
use thiserror::Error;
use crate::allocation_transcript::ContestTranscript;
use crate::election_data::{Constituency, ElectionData};
use crate::party_metadata::{ContestMetadata, ContestName, NumberOfSeats, Party, PartyIndex};

/// Which columns of the table mean what, by header name.
#[derive(Debug,Clone)]
pub struct TableSpec {
    /// the columns holding each party's votes, in ballot order.
    pub party_columns : Vec<String>,
    /// the column with the number of seats each constituency fills.
    pub seats_column : String,
    /// the column with the audited total vote count. If None, the party columns are summed.
    pub total_votes_column : Option<String>,
    /// the column naming each constituency. Row numbers are used if absent.
    pub name_column : Option<String>,
}

#[derive(Error,Debug)]
pub enum TableError {
    #[error("Column {0:?} is not present in the table")]
    MissingColumn(String),
    #[error("Row {row}, column {column:?}: {value:?} is not a non-negative integer")]
    BadCount{ row : usize, column : String, value : String },
}

/// A parsed constituency table: the typed election data plus the raw rows, kept
/// so the table can be written back with seat columns added and nothing else
/// changed. Validation of counts happens here; the allocator itself assumes
/// non-negative integers.
#[derive(Debug)]
pub struct ConstituencyTable {
    pub data : ElectionData,
    headers : StringRecord,
    rows : Vec<StringRecord>,
}

/// index of a named column in the header row.
fn column_index(headers:&StringRecord,name:&str) -> Result<usize,TableError> {
    headers.iter().position(|h|h==name).ok_or_else(||TableError::MissingColumn(name.to_string()))
}

/// a cell that must hold a non-negative integer count.
fn parse_count(record:&StringRecord,row:usize,column_index:usize,column_name:&str) -> Result<usize,TableError> {
    let value = record.get(column_index).unwrap_or("");
    value.trim().parse::<usize>().map_err(|_|TableError::BadCount{
        row,
        column : column_name.to_string(),
        value : value.to_string(),
    })
}

impl ConstituencyTable {
    pub fn from_path(path:&Path,spec:&TableSpec,name:ContestName,threshold_percent:f64) -> anyhow::Result<Self> {
        let mut table = Self::from_reader(File::open(path)?,spec,name,threshold_percent)?;
        table.data.metadata.source.push(crate::party_metadata::DataSource{
            url : String::new(),
            files : vec![path.to_string_lossy().to_string()],
            comments : None,
        });
        Ok(table)
    }

    pub fn from_reader<R:Read>(reader:R,spec:&TableSpec,name:ContestName,threshold_percent:f64) -> anyhow::Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let party_indices = spec.party_columns.iter().map(|c|column_index(&headers,c)).collect::<Result<Vec<_>,_>>()?;
        let seats_index = column_index(&headers,&spec.seats_column)?;
        let total_index = spec.total_votes_column.as_deref().map(|c|column_index(&headers,c)).transpose()?;
        let name_index = spec.name_column.as_deref().map(|c|column_index(&headers,c)).transpose()?;
        let mut rows = vec![];
        let mut constituencies = vec![];
        for (row,record) in csv_reader.into_records().enumerate() {
            let record = record?;
            let votes = party_indices.iter().zip(spec.party_columns.iter())
                .map(|(&index,column)|parse_count(&record,row,index,column))
                .collect::<Result<Vec<_>,_>>()?;
            let seats = NumberOfSeats(parse_count(&record,row,seats_index,&spec.seats_column)?);
            let total_votes = match total_index {
                Some(index) => parse_count(&record,row,index,spec.total_votes_column.as_deref().unwrap())?,
                None => votes.iter().sum(),
            };
            let name = match name_index {
                Some(index) => record.get(index).unwrap_or("").to_string(),
                None => format!("row {}",row),
            };
            constituencies.push(Constituency{ name, seats, votes, total_votes });
            rows.push(record);
        }
        let metadata = ContestMetadata{
            name,
            parties : spec.party_columns.iter().map(|column|Party{
                column_id : column.clone(),
                name : column.clone(),
                abbreviation : None,
            }).collect(),
            source : vec![],
            threshold_percent,
        };
        Ok(ConstituencyTable{ data : ElectionData{ metadata, constituencies }, headers, rows })
    }

    /// Write the table back with a `SEATS_<party>` column appended for every
    /// eligible party, original columns first and unchanged.
    pub fn write_with_seats<W:Write>(&self,writer:W,transcript:&ContestTranscript) -> anyhow::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let seat_column = |party:PartyIndex|format!("SEATS_{}",self.data.metadata.party(party).column_id);
        let header : Vec<String> = self.headers.iter().map(|h|h.to_string())
            .chain(transcript.eligible.iter().map(|&p|seat_column(p))).collect();
        csv_writer.write_record(&header)?;
        for (row,constituency) in self.rows.iter().zip(transcript.constituencies.iter()) {
            let record : Vec<String> = row.iter().map(|f|f.to_string())
                .chain(transcript.eligible.iter().map(|&p|constituency.transcript.seats(p).to_string())).collect();
            csv_writer.write_record(&record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_with_seats_to_path(&self,path:&Path,transcript:&ContestTranscript) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent)? }
        self.write_with_seats(File::create(path)?,transcript)
    }
}
