// Copyright 2024 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! A small utility for generating every ordering of a list. Useful for making exhaustive
//! test ballots; the counting algorithm itself never needs it.

use itertools::Itertools;

/// Every ordering of `items`. The iterator is finite (n! entries, in lexicographic order
/// of original positions); call again for a fresh, restartable pass.
/// ```
/// use irv::permutation_util::all_orderings;
/// let orderings : Vec<Vec<u32>> = all_orderings(&[1,2,3]).collect();
/// assert_eq!(6,orderings.len());
/// assert_eq!(vec![1,2,3],orderings[0]);
/// assert_eq!(vec![3,2,1],orderings[5]);
/// ```
pub fn all_orderings<T:Clone>(items:&[T]) -> impl Iterator<Item=Vec<T>> + '_ {
    items.iter().cloned().permutations(items.len())
}
