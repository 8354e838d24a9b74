// interrupts.rs models the interrupt priority mask of a 68000 status register
use std::sync::atomic::{AtomicU16, Ordering};

use log::trace;

pub const SR_SUPERVISOR: u16 = 0x2000;
pub const SR_IPL_MASK: u16 = 0x0700;
pub const SR_IPL_SHIFT: u16 = 8;

/// Level 7 cannot be masked.
pub const NMI_LEVEL: u8 = 7;

/// Holds the status register the interrupt sources check before firing.
///
/// The register lives in an atomic so that an interrupt source running on
/// another thread sees mask changes made by the main thread of control.
#[derive(Debug)]
pub struct InterruptController {
    sr: AtomicU16,
}

impl InterruptController {
    pub fn new(sr: u16) -> Self {
        Self {
            sr: AtomicU16::new(sr),
        }
    }

    pub fn sr(&self) -> u16 {
        self.sr.load(Ordering::SeqCst)
    }

    /// Replace the status register, returning the previous value.
    pub fn set_sr(&self, sr: u16) -> u16 {
        let old = self.sr.swap(sr, Ordering::SeqCst);
        trace!("sr {:04x} -> {:04x}", old, sr);
        old
    }

    pub fn ipl(&self) -> u8 {
        ((self.sr() & SR_IPL_MASK) >> SR_IPL_SHIFT) as u8
    }

    /// Whether an interrupt at `level` would be taken right now.
    pub fn accepts(&self, level: u8) -> bool {
        level == NMI_LEVEL || level > self.ipl()
    }

    /// Switch to `sr` until the returned guard goes out of scope.
    pub fn scoped(&self, sr: u16) -> SrGuard<'_> {
        let saved = self.set_sr(sr);
        SrGuard { controller: self, saved }
    }

    /// Raise the mask so that nothing below `level` + 1 gets through.
    pub fn mask_up_to(&self, level: u8) -> SrGuard<'_> {
        let current = self.sr();
        let ipl = ((current & SR_IPL_MASK) >> SR_IPL_SHIFT) as u8;
        let sr = if level > ipl {
            (current & !SR_IPL_MASK) | ((level as u16) << SR_IPL_SHIFT)
        } else {
            current
        };
        self.scoped(sr)
    }
}

impl Default for InterruptController {
    fn default() -> Self {
        // supervisor mode, everything masked, as after reset
        Self::new(SR_SUPERVISOR | SR_IPL_MASK)
    }
}

/// Restores the saved status register when dropped.
pub struct SrGuard<'a> {
    controller: &'a InterruptController,
    saved: u16,
}

impl SrGuard<'_> {
    pub fn saved(&self) -> u16 {
        self.saved
    }
}

impl Drop for SrGuard<'_> {
    fn drop(&mut self) {
        self.controller.set_sr(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_state_masks_everything_but_nmi() {
        let irq = InterruptController::default();
        assert_eq!(irq.ipl(), 7);
        assert!(!irq.accepts(4));
        assert!(irq.accepts(NMI_LEVEL));
    }

    #[test]
    fn scoped_mask_is_restored() {
        let irq = InterruptController::new(0x2700);
        {
            let guard = irq.scoped(0x2300);
            assert_eq!(guard.saved(), 0x2700);
            assert!(irq.accepts(4));
            assert!(!irq.accepts(3));
        }
        assert_eq!(irq.sr(), 0x2700);
    }

    #[test]
    fn mask_up_to_never_lowers_the_mask() {
        let irq = InterruptController::new(0x2600);
        {
            let _guard = irq.mask_up_to(4);
            assert_eq!(irq.sr(), 0x2600);
        }
        let irq = InterruptController::new(0x2300);
        {
            let _guard = irq.mask_up_to(4);
            assert!(!irq.accepts(4));
            assert!(irq.accepts(5));
        }
        assert_eq!(irq.sr(), 0x2300);
    }
}
