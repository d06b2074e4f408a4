use thiserror::Error;

/// Fatal conditions raised while decoding or executing an instruction.
///
/// None of these are recoverable inside the core: they mean either an
/// emulator bug or a ROM doing something the hardware model cannot express.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("address ${base:04X}{offset:+} is outside the 64KiB address space")]
    AddressOutOfRange { base: u16, offset: i32 },

    #[error("invalid {operand} operand ${value:04X}")]
    InvalidOperand { operand: &'static str, value: u16 },

    #[error("illegal opcode ${opcode:02X} at ${pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },
}

/// `base + delta` within the address space, or `AddressOutOfRange`.
#[inline]
pub fn offset_addr(base: u16, delta: i32) -> Result<u16, CpuError> {
    let target = base as i32 + delta;
    u16::try_from(target).map_err(|_| CpuError::AddressOutOfRange {
        base,
        offset: delta,
    })
}
