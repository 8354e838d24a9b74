// Keyboard controller link on DUART channel B
use std::thread;
use std::time::Duration;

use log::{debug, trace};
use organum::core::{Address, Addressable};
use organum::error::Error;
use organum::premade::serial::{Flag, Register};

/* controller commands */
pub const CMD_LED_POWRED: u8 = 0x01;
pub const CMD_LED_POWGRN: u8 = 0x02;
pub const CMD_LED_POWBLU: u8 = 0x03;
pub const CMD_LED_DISK: u8 = 0x05;
pub const CMD_MODE_SET: u8 = 0x10;
pub const CMD_MOUSE_DETECT: u8 = 0x20;
pub const CMD_MOUSE_STRM_ON: u8 = 0x21;

/// Power LED red and green, blue dimmed, disk LED on, scancode mode, mouse on.
const INIT_SEQUENCE: [u8; 12] = [
    CMD_LED_POWRED,
    0xff,
    CMD_LED_POWGRN,
    0x02,
    CMD_LED_POWBLU,
    0xcf,
    CMD_LED_DISK,
    0xff,
    CMD_MODE_SET,
    0x00,
    CMD_MOUSE_DETECT,
    CMD_MOUSE_STRM_ON,
];

pub struct KeyboardLink<P: Addressable> {
    port: P,
    base: Address,
}

impl<P: Addressable> KeyboardLink<P> {
    /// `base` is where the DUART registers start in `port`.
    pub fn new(port: P, base: Address) -> Self {
        Self { port, base }
    }

    fn status(&mut self) -> Result<u8, Error> {
        self.port.read_u8(self.base + Register::SRB as Address)
    }

    pub fn init(&mut self) -> Result<(), Error> {
        for byte in INIT_SEQUENCE {
            self.write(byte)?;
        }
        debug!("ikbd: controller initialised");
        Ok(())
    }

    /// A byte is waiting.
    pub fn ready(&mut self) -> Result<bool, Error> {
        Ok(self.status()? & Flag::RXRDY as u8 != 0)
    }

    /// Send one byte once the transmitter takes it.
    pub fn write(&mut self, byte: u8) -> Result<(), Error> {
        while self.status()? & Flag::TXRDY as u8 == 0 {
            std::hint::spin_loop();
        }
        trace!("ikbd: -> {:02x}", byte);
        self.port.write_u8(self.base + Register::HRB as Address, byte)
    }

    /// Wait up to `timeout_ms` milliseconds for a byte.
    pub fn read(&mut self, timeout_ms: u16) -> Result<Option<u8>, Error> {
        for _ in 0..timeout_ms {
            if self.ready()? {
                let byte = self.port.read_u8(self.base + Register::HRB as Address)?;
                trace!("ikbd: <- {:02x}", byte);
                return Ok(Some(byte));
            }
            thread::sleep(Duration::from_millis(1));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use organum::premade::serial::Serial;

    #[test]
    fn init_sends_the_command_sequence() {
        let mut link = KeyboardLink::new(Serial::new(), 0);
        link.init().unwrap();
        assert_eq!(
            link.port.take_transmitted(),
            vec![0x01, 0xff, 0x02, 0x02, 0x03, 0xcf, 0x05, 0xff, 0x10, 0x00, 0x20, 0x21]
        );
    }

    #[test]
    fn read_returns_waiting_bytes_in_order() {
        let mut serial = Serial::new();
        serial.receive(&[0x1c, 0x9c]);
        let mut link = KeyboardLink::new(serial, 0);
        assert!(link.ready().unwrap());
        assert_eq!(link.read(5).unwrap(), Some(0x1c));
        assert_eq!(link.read(5).unwrap(), Some(0x9c));
        assert!(!link.ready().unwrap());
    }

    #[test]
    fn read_times_out() {
        let mut link = KeyboardLink::new(Serial::new(), 0);
        assert_eq!(link.read(3).unwrap(), None);
        assert_eq!(link.read(0).unwrap(), None);
    }

    #[test]
    fn works_through_the_bus() {
        use crate::components::{build_bus, MachineConfig, DUART_BASE};

        let config = MachineConfig { phystop: 0x1000, ..MachineConfig::default() };
        let port = build_bus(&config).unwrap();
        let mut link = KeyboardLink::new(port, DUART_BASE);
        link.write(0x80).unwrap();
        assert_eq!(link.read(1).unwrap(), None);
    }
}
