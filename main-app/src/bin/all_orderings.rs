// Copyright 2024 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


use clap::Parser;
use irv::permutation_util::all_orderings;

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="all_orderings")]
/// Print every possible ordering of the given candidate names, one comma separated line
/// each. The output is usable directly as a .csv ballot file for concrete_irv.
struct Opts {
    /// The candidate names, in ballot paper order.
    candidates : Vec<String>,
}

fn main() {
    let opt : Opts = Opts::parse();
    for ordering in all_orderings(&opt.candidates) {
        println!("{}",ordering.join(","));
    }
}
