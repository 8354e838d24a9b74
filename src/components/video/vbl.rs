// Vertical blank: frame counter, deferred palette load and the vsync rendezvous
use std::sync::{Condvar, Mutex, MutexGuard};

use log::trace;
use organum::core::{Address, Addressable};
use organum::error::Error;
use organum::interrupts::InterruptController;

use super::ST_PALETTE_REGS;

/// Autovector level of the vertical blank.
pub const VBL_LEVEL: u8 = 4;

#[derive(Debug, Default)]
struct VblState {
    frclock: u32,
    /// Palette waiting for the next blank, 16 words in bus memory.
    colorptr: Option<Address>,
}

/// Shared between the thread of control and whoever raises the blank.
#[derive(Debug, Default)]
pub struct Vbl {
    state: Mutex<VblState>,
    tick: Condvar,
}

impl Vbl {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, VblState>, Error> {
        self.state.lock().map_err(|_| Error::new("vbl: state lock poisoned"))
    }

    pub fn frclock(&self) -> Result<u32, Error> {
        Ok(self.lock()?.frclock)
    }

    /// Load the palette at `addr` on the next blank.
    pub fn set_palette(&self, addr: Address) -> Result<(), Error> {
        self.lock()?.colorptr = Some(addr);
        Ok(())
    }

    pub fn pending_palette(&self) -> Result<Option<Address>, Error> {
        Ok(self.lock()?.colorptr)
    }

    /// One vertical blank. A blank arriving while the level is masked is
    /// lost; returns whether it was taken.
    pub fn interrupt<R: Addressable>(&self, irq: &InterruptController, regs: &mut R) -> Result<bool, Error> {
        if !irq.accepts(VBL_LEVEL) {
            return Ok(false);
        }

        let mut state = self.lock()?;
        state.frclock = state.frclock.wrapping_add(1);
        if let Some(ptr) = state.colorptr.take() {
            for i in 0..16 {
                let color = regs.read_beu16(ptr + i * 2)?;
                regs.write_beu16(ST_PALETTE_REGS + i * 2, color)?;
            }
            trace!("vbl: palette loaded from {:06x}", ptr);
        }
        self.tick.notify_all();
        Ok(true)
    }

    /// Block until the frame counter moves past `since`.
    pub fn wait_tick(&self, since: u32) -> Result<u32, Error> {
        let mut state = self.lock()?;
        while state.frclock == since {
            state = self
                .tick
                .wait(state)
                .map_err(|_| Error::new("vbl: state lock poisoned"))?;
        }
        Ok(state.frclock)
    }
}
