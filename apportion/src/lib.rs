// Copyright 2025 the ConcreteDHondt developers.
// This file is part of ConcreteDHondt.
// ConcreteDHondt is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteDHondt is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteDHondt.  If not, see <https://www.gnu.org/licenses/>.


pub mod party_metadata;
pub mod election_data;
pub mod threshold;
pub mod highest_averages;
pub mod allocation_transcript;
pub mod parse_util;
