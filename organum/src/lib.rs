// organum.rs
/* Organum is a very simple library that provides basic abstractions
and general interfaces to model and tailor pseudo-hardware modules
for simple emulators: byte-addressable register ports, a bus that
decodes real hardware addresses into devices, and an interrupt
controller with a 68000 style status register. */

pub mod core;
pub mod error;
pub mod interrupts;
pub mod premade;
