//! Information about the contest, such as parties.

use serde::{Serialize,Deserialize};
use std::fmt;

/// a party, referred to by the position of its vote column in the table, 0 being first
#[derive(Clone, Copy, PartialEq, Eq, Hash,Serialize,Deserialize)]
pub struct PartyIndex(pub usize);
// type alias really, don't want long display
impl fmt::Display for PartyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for PartyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// the number of seats to be filled in a constituency
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,Debug,Serialize,Deserialize)]
pub struct NumberOfSeats(pub usize);

impl fmt::Display for NumberOfSeats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Information about the contest
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct ContestMetadata {
    pub name : ContestName,
    pub parties : Vec<Party>,
    /// where the data came from, such as a URL.
    pub source : Vec<DataSource>,
    /// the nationwide electoral threshold percentage applied, 0 meaning none.
    pub threshold_percent : f64,
}

/// Documentation on where the data files used for this data came from.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct DataSource {
    pub url : String,
    pub files : Vec<String>,
    pub comments : Option<String>
}

impl ContestMetadata {
    pub fn party(&self,index:PartyIndex) -> &Party { &self.parties[index.0] }
    pub fn num_parties(&self) -> usize { self.parties.len() }
    /// names of the given parties, comma separated, for human consumption.
    pub fn party_names(&self,parties:&[PartyIndex]) -> String {
        parties.iter().map(|&p|self.party(p).name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

/// Which contest it was.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct ContestName {
    /// The year this election was held
    pub year : String,
    /// The name of the authority running the election
    pub authority : String,
    /// the overall name of the election, e.g. Sejm
    pub name : String,
}

impl ContestName {
    pub fn human_readable_name(&self) -> String {
        format!("{} {} election run by {}",self.year,self.name,self.authority)
    }
}

/// information about a party in the contest.
#[derive(Debug,Serialize,Deserialize,Clone)]
pub struct Party {
    /// The name of the vote column in the source table.
    pub column_id : String,
    /// The name of the party
    pub name : String,
    /// an abbreviation for the party
    pub abbreviation : Option<String>,
}
