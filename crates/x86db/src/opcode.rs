//! Packed opcode word.
//!
//! One 32-bit value carries everything the prefix/opcode stage of an encoder
//! needs: mandatory prefix, opcode map, opcode byte, fixed ModR/M extension,
//! VEX/EVEX length and W bits, and the EVEX tuple with its
//! compressed-displacement shift. The encoder's hot loop reads one word and
//! dispatches; there are no secondary lookups for prefix selection.
//!
//! The raw word never leaves this module's accessors; records hold [`Opcode`]
//! values built with the const builder.

use core::fmt;

/// Mandatory legacy prefix — part of the opcode, not a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Prefix {
    /// No mandatory prefix.
    None = 0,
    /// Operand-size override used as an opcode selector (`66`).
    P66 = 1,
    /// `F2` selector.
    PF2 = 2,
    /// `F3` selector.
    PF3 = 3,
    /// FPU wait (`9B`), mandatory for `fstsw`-style forms.
    P9B = 4,
}

/// Opcode map (escape plane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Map {
    /// Single-byte opcode.
    M1 = 0,
    /// `0F` escape.
    M0F = 1,
    /// `0F 38` escape.
    M0F38 = 2,
    /// `0F 3A` escape.
    M0F3A = 3,
    /// `0F 01` group (system instructions with a fixed second byte).
    M0F01 = 4,
    /// XOP map 8.
    XopM8 = 5,
    /// XOP map 9.
    XopM9 = 6,
    /// 3DNow! (`0F 0F` with trailing opcode byte).
    M3dNow = 7,
}

/// AVX-512 tuple type; selects how displacement compression scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TupleType {
    /// No tuple (not an EVEX instruction, or tuple-free form).
    None = 0,
    /// Full vector, broadcast-capable.
    Fv = 1,
    /// Half vector, broadcast-capable.
    Hv = 2,
    /// Full vector memory.
    Fvm = 3,
    /// Tuple-1 scalar.
    T1S = 4,
    /// Tuple-1 fixed (32-bit).
    T1F = 5,
    /// Tuple-1 fixed (64-bit, W-selected).
    T1W = 6,
    /// Tuple-2.
    T2 = 7,
    /// Tuple-4.
    T4 = 8,
    /// Tuple-8.
    T8 = 9,
    /// Half vector memory.
    Hvm = 10,
    /// Quarter vector memory.
    Ovm = 11,
    /// Eighth vector memory.
    Qvm = 12,
    /// Fixed 128-bit memory.
    M128 = 13,
    /// `movddup` special form.
    Dup = 14,
}

/// VEX/EVEX vector-length selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VecLen {
    /// Length taken from the operands.
    Unspecified = 0,
    /// 128-bit (`L.128`).
    L128 = 1,
    /// 256-bit (`L.256`).
    L256 = 2,
    /// 512-bit (`L.512`).
    L512 = 3,
}

// Bit layout. Field positions are private; everything goes through the
// accessors below.
const BYTE_SHIFT: u32 = 0; // 8 bits
const MAP_SHIFT: u32 = 8; // 3 bits
const PREFIX_SHIFT: u32 = 11; // 3 bits
const MODO_SHIFT: u32 = 14; // 3 bits
const MODO_VALID: u32 = 1 << 17;
const LEN_SHIFT: u32 = 18; // 2 bits
const W_BIT: u32 = 1 << 20;
const EVEX_W_BIT: u32 = 1 << 21;
const CD_SHIFT: u32 = 22; // 3 bits
const TUPLE_SHIFT: u32 = 25; // 4 bits
const VEX3_BIT: u32 = 1 << 29;

/// Packed opcode word (see module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opcode(u32);

impl Opcode {
    /// The absent opcode; used as the alternate word of single-form
    /// instructions.
    pub const NONE: Opcode = Opcode(0);

    /// Opcode with no mandatory prefix in the single-byte map.
    #[must_use]
    pub const fn new(byte: u8) -> Self {
        Self::with(Prefix::None, Map::M1, byte)
    }

    /// Opcode with explicit prefix and map.
    #[must_use]
    pub const fn with(prefix: Prefix, map: Map, byte: u8) -> Self {
        Opcode(
            ((byte as u32) << BYTE_SHIFT)
                | ((map as u32) << MAP_SHIFT)
                | ((prefix as u32) << PREFIX_SHIFT),
        )
    }

    /// Attach a fixed `/0`..`/7` ModR/M extension.
    #[must_use]
    pub const fn modo(self, ext: u8) -> Self {
        Opcode(self.0 | (((ext & 7) as u32) << MODO_SHIFT) | MODO_VALID)
    }

    /// Select VEX/XOP `W1`.
    #[must_use]
    pub const fn w1(self) -> Self {
        Opcode(self.0 | W_BIT)
    }

    /// Select EVEX `W1` (independent of the VEX W bit; a number of
    /// instructions are WIG under VEX but W-selected under EVEX).
    #[must_use]
    pub const fn evex_w1(self) -> Self {
        Opcode(self.0 | EVEX_W_BIT)
    }

    /// Fix the vector length.
    #[must_use]
    pub const fn len(self, l: VecLen) -> Self {
        Opcode(self.0 | ((l as u32) << LEN_SHIFT))
    }

    /// Attach the EVEX tuple type and the compressed-displacement shift
    /// (`disp8 * (1 << shift)` at the 128-bit length).
    #[must_use]
    pub const fn tuple(self, t: TupleType, cd_shift: u8) -> Self {
        Opcode(self.0 | ((t as u32) << TUPLE_SHIFT) | (((cd_shift & 7) as u32) << CD_SHIFT))
    }

    /// Force the 3-byte VEX form even when the 2-byte form would encode.
    #[must_use]
    pub const fn vex3(self) -> Self {
        Opcode(self.0 | VEX3_BIT)
    }

    /// Whether this word is [`Opcode::NONE`].
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Principal opcode byte.
    #[must_use]
    pub const fn byte(self) -> u8 {
        (self.0 >> BYTE_SHIFT) as u8
    }

    /// Opcode map.
    #[must_use]
    pub const fn map(self) -> Map {
        match (self.0 >> MAP_SHIFT) & 7 {
            0 => Map::M1,
            1 => Map::M0F,
            2 => Map::M0F38,
            3 => Map::M0F3A,
            4 => Map::M0F01,
            5 => Map::XopM8,
            6 => Map::XopM9,
            _ => Map::M3dNow,
        }
    }

    /// Mandatory prefix.
    #[must_use]
    pub const fn prefix(self) -> Prefix {
        match (self.0 >> PREFIX_SHIFT) & 7 {
            0 => Prefix::None,
            1 => Prefix::P66,
            2 => Prefix::PF2,
            3 => Prefix::PF3,
            _ => Prefix::P9B,
        }
    }

    /// Fixed ModR/M extension, if the encoding requires one.
    #[must_use]
    pub const fn mod_ext(self) -> Option<u8> {
        if self.0 & MODO_VALID != 0 {
            Some(((self.0 >> MODO_SHIFT) & 7) as u8)
        } else {
            None
        }
    }

    /// Vector length selector.
    #[must_use]
    pub const fn vec_len(self) -> VecLen {
        match (self.0 >> LEN_SHIFT) & 3 {
            0 => VecLen::Unspecified,
            1 => VecLen::L128,
            2 => VecLen::L256,
            _ => VecLen::L512,
        }
    }

    /// VEX/XOP W bit.
    #[must_use]
    pub const fn is_w1(self) -> bool {
        self.0 & W_BIT != 0
    }

    /// EVEX W bit.
    #[must_use]
    pub const fn is_evex_w1(self) -> bool {
        self.0 & EVEX_W_BIT != 0
    }

    /// Compressed-displacement shift at the 128-bit length.
    #[must_use]
    pub const fn cd_shift(self) -> u8 {
        ((self.0 >> CD_SHIFT) & 7) as u8
    }

    /// EVEX tuple type.
    #[must_use]
    pub const fn tuple_type(self) -> TupleType {
        match (self.0 >> TUPLE_SHIFT) & 15 {
            0 => TupleType::None,
            1 => TupleType::Fv,
            2 => TupleType::Hv,
            3 => TupleType::Fvm,
            4 => TupleType::T1S,
            5 => TupleType::T1F,
            6 => TupleType::T1W,
            7 => TupleType::T2,
            8 => TupleType::T4,
            9 => TupleType::T8,
            10 => TupleType::Hvm,
            11 => TupleType::Ovm,
            12 => TupleType::Qvm,
            13 => TupleType::M128,
            _ => TupleType::Dup,
        }
    }

    /// Whether the 3-byte VEX form is forced.
    #[must_use]
    pub const fn forces_vex3(self) -> bool {
        self.0 & VEX3_BIT != 0
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("<none>");
        }
        match self.prefix() {
            Prefix::None => {}
            Prefix::P66 => f.write_str("66 ")?,
            Prefix::PF2 => f.write_str("F2 ")?,
            Prefix::PF3 => f.write_str("F3 ")?,
            Prefix::P9B => f.write_str("9B ")?,
        }
        match self.map() {
            Map::M1 => {}
            Map::M0F => f.write_str("0F ")?,
            Map::M0F38 => f.write_str("0F 38 ")?,
            Map::M0F3A => f.write_str("0F 3A ")?,
            Map::M0F01 => f.write_str("0F 01 ")?,
            Map::XopM8 => f.write_str("XOP.M8 ")?,
            Map::XopM9 => f.write_str("XOP.M9 ")?,
            Map::M3dNow => f.write_str("0F 0F ")?,
        }
        write!(f, "{:02X}", self.byte())?;
        if let Some(ext) = self.mod_ext() {
            write!(f, " /{ext}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack() {
        let op = Opcode::with(Prefix::P66, Map::M0F, 0x58)
            .evex_w1()
            .tuple(TupleType::Fv, 4);
        assert_eq!(op.byte(), 0x58);
        assert_eq!(op.map(), Map::M0F);
        assert_eq!(op.prefix(), Prefix::P66);
        assert!(!op.is_w1());
        assert!(op.is_evex_w1());
        assert_eq!(op.tuple_type(), TupleType::Fv);
        assert_eq!(op.cd_shift(), 4);
        assert_eq!(op.mod_ext(), None);
        assert!(!op.forces_vex3());
    }

    #[test]
    fn mod_ext_zero_is_distinguishable() {
        let op = Opcode::new(0xFE).modo(0);
        assert_eq!(op.mod_ext(), Some(0));
        assert_eq!(Opcode::new(0xFE).mod_ext(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Opcode::new(0x90).to_string(), "90");
        assert_eq!(
            Opcode::with(Prefix::PF3, Map::M0F, 0x58).to_string(),
            "F3 0F 58"
        );
        assert_eq!(Opcode::new(0x80).modo(7).to_string(), "80 /7");
    }
}
