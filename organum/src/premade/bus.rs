// bus.rs decodes absolute addresses into the devices mapped on a bus
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use crate::core::{Address, Addressable, DeviceBox};
use crate::error::Error;

pub struct Block {
    pub base: Address,
    pub length: usize,
    pub dev: DeviceBox,
}

impl Block {
    fn contains(&self, addr: Address, count: usize) -> bool {
        let start = addr as u64;
        let base = self.base as u64;
        start >= base && start + count as u64 <= base + self.length as u64
    }
}

#[derive(Default)]
pub struct Bus {
    blocks: Vec<Block>,
}

impl Bus {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn insert(&mut self, base: Address, dev: DeviceBox) -> Result<(), Error> {
        let length = dev.len();
        let end = base as u64 + length as u64;
        let overlaps = self.blocks.iter().any(|block| {
            (base as u64) < block.base as u64 + block.length as u64 && (block.base as u64) < end
        });
        if overlaps {
            return Err(Error::new(&format!(
                "Device at {:08x} ({} bytes) overlaps an existing mapping",
                base, length
            )));
        }

        debug!("bus: mapped {} bytes at {:08x}", length, base);
        self.blocks.push(Block { base, length, dev });
        self.blocks.sort_by_key(|block| block.base);
        Ok(())
    }

    pub fn get_device_at(&mut self, addr: Address, count: usize) -> Result<(&mut Block, Address), Error> {
        match self.blocks.iter_mut().find(|block| block.contains(addr, count)) {
            Some(block) => {
                let offset = addr - block.base;
                Ok((block, offset))
            }
            None => Err(Error::bus(addr)),
        }
    }
}

impl Addressable for Bus {
    fn len(&self) -> usize {
        self.blocks
            .last()
            .map(|block| block.base as usize + block.length)
            .unwrap_or(0)
    }

    fn read(&mut self, addr: Address, data: &mut [u8]) -> Result<(), Error> {
        let (block, offset) = self.get_device_at(addr, data.len())?;
        block.dev.read(offset, data)
    }

    fn write(&mut self, addr: Address, data: &[u8]) -> Result<(), Error> {
        let (block, offset) = self.get_device_at(addr, data.len())?;
        block.dev.write(offset, data)
    }
}

/// A cloneable handle on a bus, usable from an interrupt thread.
#[derive(Clone)]
pub struct BusPort {
    bus: Arc<Mutex<Bus>>,
}

impl BusPort {
    pub fn new(bus: Bus) -> Self {
        Self {
            bus: Arc::new(Mutex::new(bus)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Bus>, Error> {
        self.bus
            .lock()
            .map_err(|_| Error::new("bus lock poisoned by a panicking device"))
    }

    pub fn map(&self, base: Address, dev: DeviceBox) -> Result<(), Error> {
        self.lock()?.insert(base, dev)
    }
}

impl Addressable for BusPort {
    fn len(&self) -> usize {
        self.bus.lock().map(|bus| bus.len()).unwrap_or(0)
    }

    fn read(&mut self, addr: Address, data: &mut [u8]) -> Result<(), Error> {
        self.lock()?.read(addr, data)
    }

    fn write(&mut self, addr: Address, data: &[u8]) -> Result<(), Error> {
        self.lock()?.write(addr, data)
    }
}
