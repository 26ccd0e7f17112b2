// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use borsh::io::{Error, ErrorKind, Read, Result, Write};
use borsh::{BorshDeserialize, BorshSerialize};

use crate::LinkedList;

/// Written as a `u32` element count followed by each element, front to back.
impl<T: BorshSerialize> BorshSerialize for LinkedList<T> {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        let len = u32::try_from(self.len())
            .map_err(|_| Error::new(ErrorKind::InvalidData, "list too long to serialize"))?;
        len.serialize(writer)?;
        for elem in self {
            elem.serialize(writer)?;
        }
        Ok(())
    }
}

impl<T: BorshDeserialize> BorshDeserialize for LinkedList<T> {
    fn deserialize_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let len = u32::deserialize_reader(reader)?;
        (0..len).map(|_| T::deserialize_reader(reader)).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    #[test]
    fn test_borsh_layout() {
        let list: LinkedList<u8> = [1, 2, 3].iter().cloned().collect();
        let bytes = borsh::to_vec(&list).unwrap();
        assert_eq!(bytes, [3, 0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_borsh_restores_list() {
        let mut list = LinkedList::new();
        for v in [9, -4, 12, 0] {
            list.insert_ascending(v);
        }
        let bytes = borsh::to_vec(&list).unwrap();
        let restored: LinkedList<i32> = borsh::from_slice(&bytes).unwrap();
        assert_eq!(restored, list);
        assert!(restored.is_ascending());
    }

    #[test]
    fn test_borsh_truncated_input() {
        assert!(borsh::from_slice::<LinkedList<u8>>(&[2, 0, 0, 0, 1]).is_err());
    }
}
