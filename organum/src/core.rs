// core.rs holds the interfaces every modelled device implements
use crate::error::Error;

pub type Address = u32;

/// A byte addressable device, seen from the CPU side.
///
/// This is the register port abstraction: firmware code talks to hardware
/// registers only through it, so a bus of real devices and an in-memory
/// fake are interchangeable. All multi-byte accessors are big endian, like
/// the 68000 bus.
pub trait Addressable {
    fn len(&self) -> usize;
    fn read(&mut self, addr: Address, data: &mut [u8]) -> Result<(), Error>;
    fn write(&mut self, addr: Address, data: &[u8]) -> Result<(), Error>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_u8(&mut self, addr: Address) -> Result<u8, Error> {
        let mut data = [0u8; 1];
        self.read(addr, &mut data)?;
        Ok(data[0])
    }

    fn read_beu16(&mut self, addr: Address) -> Result<u16, Error> {
        let mut data = [0u8; 2];
        self.read(addr, &mut data)?;
        Ok(u16::from_be_bytes(data))
    }

    fn read_beu32(&mut self, addr: Address) -> Result<u32, Error> {
        let mut data = [0u8; 4];
        self.read(addr, &mut data)?;
        Ok(u32::from_be_bytes(data))
    }

    fn write_u8(&mut self, addr: Address, value: u8) -> Result<(), Error> {
        self.write(addr, &[value])
    }

    fn write_beu16(&mut self, addr: Address, value: u16) -> Result<(), Error> {
        self.write(addr, &value.to_be_bytes())
    }

    fn write_beu32(&mut self, addr: Address, value: u32) -> Result<(), Error> {
        self.write(addr, &value.to_be_bytes())
    }
}

/// A device that can be plugged into a bus shared with other threads.
pub type DeviceBox = Box<dyn Addressable + Send>;

pub fn wrap_device<T: Addressable + Send + 'static>(value: T) -> DeviceBox {
    Box::new(value)
}
