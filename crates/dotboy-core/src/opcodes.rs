//! Static opcode metadata.
//!
//! The tables themselves live in [`crate::opcode_table`], produced offline by
//! `dotboy-opgen`. This module defines the entry type and lookups.

pub use crate::opcode_table::{CB_PREFIXED, UNPREFIXED};

/// First byte of every extended (bit operation) opcode.
pub const CB_PREFIX: u8 = 0xCB;

/// What an instruction does to one flag bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagEffect {
    Unaffected,
    Set,
    Reset,
    Computed,
}

impl FlagEffect {
    const fn from_code(code: u8) -> Self {
        match code {
            b'-' => FlagEffect::Unaffected,
            b'1' => FlagEffect::Set,
            b'0' => FlagEffect::Reset,
            _ => FlagEffect::Computed,
        }
    }

    /// Resolves the new flag value given the current one and the value the
    /// ALU computed.
    #[inline]
    pub fn apply(self, current: bool, computed: bool) -> bool {
        match self {
            FlagEffect::Unaffected => current,
            FlagEffect::Set => true,
            FlagEffect::Reset => false,
            FlagEffect::Computed => computed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagEffects {
    pub z: FlagEffect,
    pub n: FlagEffect,
    pub h: FlagEffect,
    pub c: FlagEffect,
}

impl FlagEffects {
    /// Parses the four-character `ZNHC` notation used by opcode references:
    /// `-` unaffected, `0` reset, `1` set, anything else computed.
    pub const fn parse(notation: &str) -> Self {
        let b = notation.as_bytes();
        assert!(b.len() == 4, "flag notation must have four characters");
        Self {
            z: FlagEffect::from_code(b[0]),
            n: FlagEffect::from_code(b[1]),
            h: FlagEffect::from_code(b[2]),
            c: FlagEffect::from_code(b[3]),
        }
    }

    pub fn touches_any(&self) -> bool {
        [self.z, self.n, self.h, self.c]
            .iter()
            .any(|e| *e != FlagEffect::Unaffected)
    }
}

/// Metadata for one opcode.
///
/// `cycles` is the cost in T-cycles when a conditional branch is taken (or the
/// only cost for everything else); `cycles_not_taken` is 0 for opcodes that
/// have no conditional path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeSpec {
    pub value: u8,
    pub prefixed: bool,
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub cycles_not_taken: u8,
    pub flags: FlagEffects,
}

impl OpcodeSpec {
    pub const fn unprefixed(
        value: u8,
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        cycles_not_taken: u8,
        flags: &str,
    ) -> Self {
        Self {
            value,
            prefixed: false,
            mnemonic,
            length,
            cycles,
            cycles_not_taken,
            flags: FlagEffects::parse(flags),
        }
    }

    /// CB-prefixed opcodes are always two bytes with no immediate operand.
    pub const fn prefixed(value: u8, mnemonic: &'static str, cycles: u8, flags: &str) -> Self {
        Self {
            value,
            prefixed: true,
            mnemonic,
            length: 2,
            cycles,
            cycles_not_taken: 0,
            flags: FlagEffects::parse(flags),
        }
    }

    #[inline]
    pub fn is_conditional(&self) -> bool {
        self.cycles_not_taken != 0
    }

    /// Unused opcode slots lock up real hardware.
    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.mnemonic.starts_with("ILLEGAL")
    }
}

#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeSpec {
    &UNPREFIXED[opcode as usize]
}

#[inline]
pub fn lookup_cb(opcode: u8) -> &'static OpcodeSpec {
    &CB_PREFIXED[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_indexed_by_value() {
        for i in 0..=255u8 {
            assert_eq!(lookup(i).value, i);
            assert!(!lookup(i).prefixed);
            assert_eq!(lookup_cb(i).value, i);
            assert!(lookup_cb(i).prefixed);
        }
    }

    #[test]
    fn lengths_match_operand_kinds() {
        for spec in UNPREFIXED.iter() {
            let expected = if spec.mnemonic.contains("d16") || spec.mnemonic.contains("a16") {
                3
            } else if spec.mnemonic.contains("d8")
                || spec.mnemonic.contains("a8")
                || spec.mnemonic.contains("r8")
                || spec.mnemonic.starts_with("STOP")
            {
                2
            } else {
                1
            };
            assert_eq!(spec.length, expected, "{}", spec.mnemonic);
        }
        assert!(CB_PREFIXED.iter().all(|s| s.length == 2));
    }

    #[test]
    fn conditional_costs() {
        // JR NZ / RET Z / JP NC / CALL C
        assert_eq!((lookup(0x20).cycles, lookup(0x20).cycles_not_taken), (12, 8));
        assert_eq!((lookup(0xC8).cycles, lookup(0xC8).cycles_not_taken), (20, 8));
        assert_eq!((lookup(0xD2).cycles, lookup(0xD2).cycles_not_taken), (16, 12));
        assert_eq!((lookup(0xDC).cycles, lookup(0xDC).cycles_not_taken), (24, 12));
        // Unconditional forms have no alternate.
        for op in [0x18, 0xC3, 0xC9, 0xCD, 0xD9, 0xE9] {
            assert!(!lookup(op).is_conditional(), "{op:02X}");
        }
        let conditional = UNPREFIXED.iter().filter(|s| s.is_conditional()).count();
        assert_eq!(conditional, 16);
    }

    #[test]
    fn flag_classification_samples() {
        let inc_b = lookup(0x04).flags;
        assert_eq!(inc_b, FlagEffects::parse("Z0H-"));
        let daa = lookup(0x27).flags;
        assert_eq!(daa.n, FlagEffect::Unaffected);
        assert_eq!(daa.h, FlagEffect::Reset);
        assert_eq!(lookup(0x37).flags, FlagEffects::parse("-001"));
        assert_eq!(lookup(0xE8).flags, FlagEffects::parse("00HC"));
        assert!(!lookup(0xC5).flags.touches_any());
        assert_eq!(lookup_cb(0x7C).flags, FlagEffects::parse("Z01-"));
        assert!(!lookup_cb(0xC6).flags.touches_any());
    }

    #[test]
    fn cb_costs_depend_on_hl_operand() {
        assert_eq!(lookup_cb(0x00).cycles, 8);
        assert_eq!(lookup_cb(0x06).cycles, 16);
        assert_eq!(lookup_cb(0x46).cycles, 12);
        assert_eq!(lookup_cb(0x86).cycles, 16);
        assert_eq!(lookup_cb(0xFE).cycles, 16);
    }

    #[test]
    fn illegal_slots() {
        let illegal: Vec<u8> = UNPREFIXED
            .iter()
            .filter(|s| s.is_illegal())
            .map(|s| s.value)
            .collect();
        assert_eq!(
            illegal,
            [0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD]
        );
    }

    #[test]
    fn flag_effect_apply() {
        assert!(FlagEffect::Unaffected.apply(true, false));
        assert!(FlagEffect::Set.apply(false, false));
        assert!(!FlagEffect::Reset.apply(true, true));
        assert!(FlagEffect::Computed.apply(false, true));
    }
}
