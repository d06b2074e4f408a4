use std::fmt;

use crate::error::{CpuError, offset_addr};
use crate::mmu::MemoryBus;
use crate::opcodes::{CB_PREFIX, OpcodeSpec, lookup, lookup_cb};

/// One decoded instruction: its table entry plus up to two immediate bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    spec: &'static OpcodeSpec,
    data: [u8; 2],
}

impl Instruction {
    pub fn new(spec: &'static OpcodeSpec, data: [u8; 2]) -> Self {
        Self { spec, data }
    }

    #[inline]
    pub fn spec(&self) -> &'static OpcodeSpec {
        self.spec
    }

    #[inline]
    pub fn opcode(&self) -> u8 {
        self.spec.value
    }

    #[inline]
    pub fn is_prefixed(&self) -> bool {
        self.spec.prefixed
    }

    #[inline]
    pub fn length(&self) -> u16 {
        self.spec.length as u16
    }

    /// The immediate operand bytes, in encoding order.
    pub fn data(&self) -> &[u8] {
        if self.spec.prefixed {
            &[]
        } else {
            &self.data[..self.spec.length as usize - 1]
        }
    }

    #[inline]
    pub fn imm8(&self) -> u8 {
        self.data[0]
    }

    #[inline]
    pub fn imm16(&self) -> u16 {
        u16::from_le_bytes(self.data)
    }

    /// The immediate byte as a signed displacement (`r8`).
    #[inline]
    pub fn offset(&self) -> i8 {
        self.data[0] as i8
    }

    /// Address of the following instruction.
    #[inline]
    pub fn next_pc(&self, pc: u16) -> u16 {
        pc.wrapping_add(self.length())
    }

    /// Cost in T-cycles. `branched` selects between the base cost and the
    /// branch-not-taken cost for conditional opcodes.
    #[inline]
    pub fn cycles(&self, branched: bool) -> u32 {
        if !branched && self.spec.is_conditional() {
            self.spec.cycles_not_taken as u32
        } else {
            self.spec.cycles as u32
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.spec.mnemonic;
        let text = if m.contains("SP+r8") {
            m.replace("SP+r8", &format!("SP{:+}", self.offset()))
        } else if m.contains("r8") {
            m.replace("r8", &format!("{:+}", self.offset()))
        } else if m.contains("d16") || m.contains("a16") {
            m.replace("d16", &format!("${:04X}", self.imm16()))
                .replace("a16", &format!("${:04X}", self.imm16()))
        } else if m.contains("d8") || m.contains("a8") {
            m.replace("d8", &format!("${:02X}", self.imm8()))
                .replace("a8", &format!("${:02X}", self.imm8()))
        } else {
            return f.pad(m);
        };
        f.pad(&text)
    }
}

/// Decode the instruction at `pc`.
///
/// Reads only; fails if any operand byte would lie past 0xFFFF.
pub fn decode<B: MemoryBus + ?Sized>(pc: u16, bus: &B) -> Result<Instruction, CpuError> {
    let first = bus.read_byte(pc);
    if first == CB_PREFIX {
        let op = bus.read_byte(offset_addr(pc, 1)?);
        return Ok(Instruction::new(lookup_cb(op), [0, 0]));
    }

    let spec = lookup(first);
    let mut data = [0u8; 2];
    for i in 1..spec.length as i32 {
        data[i as usize - 1] = bus.read_byte(offset_addr(pc, i)?);
    }
    Ok(Instruction::new(spec, data))
}
