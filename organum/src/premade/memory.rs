// memory.rs provides simple abstractions for byte-addressable memory
use crate::core::*;
use crate::error::Error;

/// Plain RAM, ROM or a register file that just remembers what was written.
#[derive(Clone, Debug)]
pub struct MemoryBlock {
    read_only: bool,
    contents: Vec<u8>,
}

impl MemoryBlock {
    pub fn new(contents: Vec<u8>) -> MemoryBlock {
        MemoryBlock {
            read_only: false,
            contents,
        }
    }

    pub fn read_only(&mut self) {
        self.read_only = true;
    }

    fn range(&self, addr: Address, count: usize) -> Result<std::ops::Range<usize>, Error> {
        let start = addr as usize;
        let end = start + count;
        if end > self.contents.len() {
            return Err(Error::bus(addr));
        }
        Ok(start..end)
    }
}

impl Addressable for MemoryBlock {
    fn len(&self) -> usize {
        self.contents.len()
    }

    fn read(&mut self, addr: Address, data: &mut [u8]) -> Result<(), Error> {
        let range = self.range(addr, data.len())?;
        data.copy_from_slice(&self.contents[range]);
        Ok(())
    }

    fn write(&mut self, addr: Address, data: &[u8]) -> Result<(), Error> {
        if self.read_only {
            return Err(Error::breakpoint(&format!(
                "Attempt to write to read-only memory at {:x} with data {:?}",
                addr, data
            )));
        }

        let range = self.range(addr, data.len())?;
        self.contents[range].copy_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;

    #[test]
    fn big_endian_accessors() {
        let mut mem = MemoryBlock::new(vec![0; 8]);
        mem.write_beu16(0, 0x1234).unwrap();
        mem.write_beu32(4, 0xdeadbeef).unwrap();
        assert_eq!(mem.read_u8(0).unwrap(), 0x12);
        assert_eq!(mem.read_u8(1).unwrap(), 0x34);
        assert_eq!(mem.read_beu32(4).unwrap(), 0xdeadbeef);
    }

    #[test]
    fn out_of_range_is_a_bus_error() {
        let mut mem = MemoryBlock::new(vec![0; 4]);
        let err = mem.read_beu32(2).unwrap_err();
        assert_eq!(err.err, ErrorType::Bus);
        assert_eq!(err.native, 2);
    }

    #[test]
    fn read_only_blocks_writes() {
        let mut mem = MemoryBlock::new(vec![0; 4]);
        mem.read_only();
        assert_eq!(mem.write_u8(0, 1).unwrap_err().err, ErrorType::Breakpoint);
    }
}
