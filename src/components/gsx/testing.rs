// A driver that records every call, for the gsx tests
use organum::error::Error;

use super::{Driver, Fdb, GraphicsContext, Opcode, ParamBlock, Workstation};
use crate::components::Word;

#[derive(Clone, Debug)]
pub struct Call {
    pub opcode: Opcode,
    pub ptsin: Vec<Word>,
    pub intin: Vec<Word>,
    pub src: Fdb,
    pub dst: Fdb,
}

/// Two fonts: the IBM cell font (8x16 cell, 13 point high) and a small one
/// (6x8 cell, 6 point high).
pub struct Recorder {
    pub calls: Vec<Call>,
    /// Calls of this function fail without being recorded.
    pub fail_on: Option<Opcode>,
    current: [Word; 4],
}

pub const BIG: [Word; 4] = [7, 13, 8, 16];
pub const SMALL: [Word; 4] = [5, 6, 6, 8];

impl Recorder {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_on: None,
            current: BIG,
        }
    }

    pub fn workstation() -> Workstation {
        Workstation {
            handle: 1,
            xres: 639,
            yres: 399,
            wpixel: 372,
            hpixel: 372,
            nplanes: 1,
            chminh: 6,
            chmaxh: 13,
        }
    }

    pub fn calls_of(&self, opcode: Opcode) -> impl Iterator<Item = &Call> {
        self.calls.iter().filter(move |call| call.opcode == opcode)
    }

    pub fn count(&self, opcode: Opcode) -> usize {
        self.calls_of(opcode).count()
    }
}

impl Driver for Recorder {
    fn gsx2(&mut self, pb: &mut ParamBlock) -> Result<(), Error> {
        let opcode = pb.opcode()?;
        if self.fail_on == Some(opcode) {
            return Err(Error::new(&format!("recorder: {:?} refused", opcode)));
        }
        match opcode {
            Opcode::SetCharHeight => {
                self.current = if pb.ptsin[1] <= SMALL[1] { SMALL } else { BIG };
                pb.ptsout[..4].copy_from_slice(&self.current);
            }
            Opcode::InquireTextAttributes => pb.ptsout[..4].copy_from_slice(&self.current),
            _ => {}
        }
        self.calls.push(Call {
            opcode,
            ptsin: pb.ptsin[..pb.nptsin() * 2].to_vec(),
            intin: pb.intin[..pb.nintin()].to_vec(),
            src: pb.src,
            dst: pb.dst,
        });
        Ok(())
    }
}

/// A started context over a fresh recorder.
pub fn test_context() -> GraphicsContext<Recorder> {
    let mut ctx = GraphicsContext::new(Recorder::new(), Recorder::workstation());
    ctx.start().unwrap();
    ctx
}
