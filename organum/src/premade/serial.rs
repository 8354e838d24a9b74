// Serial provides a 68681 style DUART channel B as seen through its registers
//
// Only what a polling driver needs is modelled: the status register,
// the receive holding register and the transmit holding register.
// Everything else reads back whatever was last written.

use std::collections::VecDeque;

use crate::core::{Address, Addressable};
use crate::error::Error;

pub const REGISTER_COUNT: usize = 0x20;

#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Register {
    MRB = 0x11,
    SRB = 0x13,
    CRB = 0x15,
    /// RHRB on read, THRB on write.
    HRB = 0x17,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flag {
    RXRDY = 1 << 0,
    FFULL = 1 << 1,
    TXRDY = 1 << 2,
    TXEMP = 1 << 3,
}

#[derive(Clone, Debug, Default)]
pub struct Serial {
    regs: Vec<u8>,
    pub tx_buffer: Vec<u8>,
    pub rx_buffer: VecDeque<u8>,
}

impl Serial {
    pub fn new() -> Self {
        Self {
            regs: vec![0u8; REGISTER_COUNT],
            tx_buffer: Vec::new(),
            rx_buffer: VecDeque::new(),
        }
    }

    /// Bytes arriving from the far end of the line.
    pub fn receive(&mut self, bytes: &[u8]) {
        self.rx_buffer.extend(bytes);
    }

    /// Drain what the firmware has sent so far.
    pub fn take_transmitted(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.tx_buffer)
    }

    fn status(&self) -> u8 {
        let mut stat = Flag::TXRDY as u8 | Flag::TXEMP as u8;
        if !self.rx_buffer.is_empty() {
            stat |= Flag::RXRDY as u8;
        }
        stat
    }
}

impl Addressable for Serial {
    fn len(&self) -> usize {
        REGISTER_COUNT
    }

    fn read(&mut self, addr: Address, data: &mut [u8]) -> Result<(), Error> {
        for (i, byte) in data.iter_mut().enumerate() {
            let reg = addr as usize + i;
            if reg >= REGISTER_COUNT {
                return Err(Error::bus(addr + i as Address));
            }
            *byte = match reg as u32 {
                r if r == Register::SRB as u32 => self.status(),
                r if r == Register::HRB as u32 => self.rx_buffer.pop_front().unwrap_or(0),
                _ => self.regs[reg],
            };
        }
        Ok(())
    }

    fn write(&mut self, addr: Address, data: &[u8]) -> Result<(), Error> {
        for (i, byte) in data.iter().enumerate() {
            let reg = addr as usize + i;
            if reg >= REGISTER_COUNT {
                return Err(Error::bus(addr + i as Address));
            }
            if reg as u32 == Register::HRB as u32 {
                self.tx_buffer.push(*byte);
            } else {
                self.regs[reg] = *byte;
            }
        }
        Ok(())
    }
}
