//! The instruction table.
//!
//! One record per mnemonic: encoding kind, packed opcode words, flags, CPU
//! features, EFLAGS effects, write info, family classification, name offset,
//! and the signature group with the legal operand tuples. Everything is a
//! compile-time constant; concurrent readers need no synchronization.
//!
//! The table is generated by one `inst_db!` invocation that keeps the id
//! constants, the name blob, and the records in lockstep. Ids are dense:
//! `InstId::NONE` is 0 and real instructions occupy `1..count()`.
//!
//! Ordering contract: names ascend by their first letter, and within one
//! letter they are alphabetical — except the `j` bucket, where the
//! conditional-branch family precedes `jecxz`/`jmp` (name lookup scans that
//! bucket linearly instead of binary-searching it).

use core::fmt;

use bitflags::bitflags;

use crate::error::Error;
use crate::opcode::{Map, Opcode, Prefix, TupleType, VecLen};
use crate::signature::{InstSignature, SigGroup};

/// How the encoder lays out prefixes, ModR/M, and immediates for one
/// instruction. The tag is data, not behavior: the encoder dispatches on it
/// and builds its own jump tables from the discriminant.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[non_exhaustive]
pub enum EncodingKind {
    /// Unused slot (the null record).
    None,
    /// Fixed byte sequence, no operands beyond implicit ones.
    X86Op,
    /// Single `r/m` operand selected by the ModR/M extension.
    X86Rm,
    /// The eight-member ALU class: `op r/m, r` / `op r, r/m` / `op r/m, imm`.
    X86Arith,
    /// `bswap r32/r64` (register encoded in the opcode byte).
    X86Bswap,
    /// `bt`/`btc`/`btr`/`bts`.
    X86BTest,
    /// `call rel32` / `call r/m`.
    X86Call,
    /// `cmovcc r, r/m`.
    X86Cmov,
    /// `cmpxchg r/m, r` with the implicit accumulator.
    X86Cmpxchg,
    /// `enter imm16, imm8`.
    X86Enter,
    /// `lfence`/`mfence`/`sfence` (`0F AE` with a register-form extension).
    X86Fence,
    /// `imul` in its unary, two-operand, and immediate forms.
    X86Imul,
    /// `in acc, imm8|dx`.
    X86In,
    /// `inc`/`dec`.
    X86IncDec,
    /// `int imm8`.
    X86Int,
    /// `jcc rel8/rel32`.
    X86Jcc,
    /// `jecxz rel8` (implicit count register, rel8 only).
    X86Jcxz,
    /// `jmp rel/r/m`.
    X86Jmp,
    /// `lea r, m`.
    X86Lea,
    /// `loop`/`loope`/`loopne`.
    X86Loop,
    /// `mov` in all register-class crossings.
    X86Mov,
    /// `movsx`/`movzx`.
    X86MovsxMovzx,
    /// `movsxd r64, r/m32`.
    X86Movsxd,
    /// `out imm8|dx, acc`.
    X86Out,
    /// `pop r/m`.
    X86Pop,
    /// `prefetch* m8` (hint in the ModR/M extension).
    X86Prefetch,
    /// `push r/m/imm`.
    X86Push,
    /// Generic `op r, r/m`.
    X86RegRm,
    /// `ret` / `ret imm16`.
    X86Ret,
    /// Rotate/shift class (`rol`..`sar`): CL form primary, imm form alternate.
    X86Rot,
    /// `setcc r/m8`.
    X86Set,
    /// `shld`/`shrd`.
    X86ShldShrd,
    /// `lods*` with implicit accumulator and source.
    X86StrLods,
    /// `stos*` with implicit destination and accumulator.
    X86StrStos,
    /// `test r/m, r` / `test r/m, imm`.
    X86Test,
    /// `xadd r/m, r`.
    X86Xadd,
    /// `xchg r/m, r` (implicitly locked).
    X86Xchg,
    /// Fixed-sequence FPU operation. The opcode byte holds the second byte;
    /// the ModR/M-extension field holds the page offset from `D8`.
    FpuOp,
    /// FPU arithmetic: `st0, sti` / `sti, st0` / `m32` (primary page) and
    /// `m64` (alternate page).
    FpuArith,
    /// FPU arithmetic-and-pop (`DE` page).
    FpuArithP,
    /// FPU compare (`fcom` family).
    FpuCom,
    /// `fld`/`fst`/`fstp` (`m64` page derived, `m80` form in the alternate).
    FpuLdSt,
    /// FPU memory-only forms (`fild`, `fist*`, `fldcw`, `fnstcw`).
    FpuM,
    /// `fnstsw ax|m16`.
    FpuStsw,
    /// `fxch` (`D9 C8+i`).
    FpuXch,
    /// SSE `op xmm, xmm/m`.
    ExtRm,
    /// Paired MMX/SSE `op mm|xmm, mm|xmm/m`; the MMX form drops the `66`
    /// prefix stored in the opcode word.
    ExtRm_P,
    /// SSE source, general-purpose destination (`pmovmskb`, `movmskps`).
    ExtRm_Gp,
    /// SSE `op xmm, xmm/m, imm8`.
    ExtRmi,
    /// Paired MMX/SSE shift: register form primary, immediate form in the
    /// alternate word with its ModR/M extension.
    ExtRmRi_P,
    /// SSE load/store pair (`movaps`: load primary, store alternate).
    ExtMov,
    /// `movd` (the MMX form drops the `66` prefix).
    ExtMovd,
    /// `movq` across xmm/mm/gp.
    ExtMovq,
    /// `pextrw`.
    ExtExtract,
    /// `pinsrw`.
    ExtInsert,
    /// `cvtsi2ss`-shaped conversions (gp/mem source).
    ExtCvtSi,
    /// `cvttss2si`-shaped conversions (gp destination).
    ExtCvtGp,
    /// Fixed VEX sequence (`vzeroupper`).
    VexOp,
    /// VEX `op v, v/m`.
    VexRm,
    /// VEX three-operand `op v, v, v/m`.
    VexRvm,
    /// VEX `op v, v/m, imm8`.
    VexRmi,
    /// VEX `op v, v, v/m, imm8`.
    VexRvmi,
    /// VEX load/store pair.
    VexMov,
    /// `vmovd`.
    VexMovd,
    /// `vmovq`.
    VexMovq,
    /// VEX gather (vector-index memory, mask in the third operand).
    VexGather,
    /// `kmov*` (k/m form primary, general-purpose form alternate).
    VexKmov,
    /// EVEX-only `op v, v/m`.
    EvexRm,
    /// EVEX-only three-operand form.
    EvexRvm,
    /// EVEX-only `op v, v/m, imm8`.
    EvexRmi,
    /// EVEX-only `op v, v, v/m, imm8`.
    EvexRvmi,
    /// EVEX-only load/store pair.
    EvexMov,
}

bitflags! {
    /// Per-record behavior flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InstFlags: u32 {
        /// First operand is read.
        const RO = 1 << 0;
        /// First operand is written.
        const WO = 1 << 1;
        /// First operand is read and written.
        const RW = Self::RO.bits() | Self::WO.bits();
        /// `lock` prefix is legal (memory first operand).
        const LOCK = 1 << 2;
        /// `xacquire` is legal with `lock`.
        const XACQUIRE = 1 << 3;
        /// `xrelease` is legal with `lock`.
        const XRELEASE = 1 << 4;
        /// Control flow (branch, call, return).
        const FLOW = 1 << 5;
        /// Must not be reordered or elided.
        const VOLATILE = 1 << 6;
        /// Reads or writes registers that are not in the operand list.
        const SPECIAL = 1 << 7;
        /// Exchanges its operands.
        const XCHG = 1 << 8;
        /// Writes the full register when the source is memory
        /// (`movss xmm, m32` zeroes the upper lanes).
        const ZERO_IF_MEM = 1 << 9;
        /// VEX encoding exists.
        const VEX = 1 << 10;
        /// EVEX encoding exists.
        const EVEX = 1 << 11;
        /// EVEX form accepts a writemask.
        const EVEX_K = 1 << 12;
        /// EVEX form accepts zeroing-masking.
        const EVEX_KZ = 1 << 13;
        /// EVEX form accepts suppress-all-exceptions.
        const EVEX_SAE = 1 << 14;
        /// EVEX form accepts embedded rounding.
        const EVEX_ER = 1 << 15;
        /// EVEX broadcast element is 4 bytes.
        const EVEX_B4 = 1 << 16;
        /// EVEX broadcast element is 8 bytes.
        const EVEX_B8 = 1 << 17;
    }
}

bitflags! {
    /// CPU features an instruction requires (any one of the set suffices
    /// for paired forms, e.g. MMX|SSE2).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CpuFeatures: u32 {
        /// Baseline x86.
        const BASE = 1 << 0;
        /// 486-era additions (`bswap`, `cmpxchg`, `xadd`, `cpuid`).
        const I486 = 1 << 1;
        /// x87 FPU.
        const FPU = 1 << 2;
        /// `cmovcc`.
        const CMOV = 1 << 3;
        /// `rdtsc`/`rdtscp`.
        const TSC = 1 << 4;
        /// `rdmsr`/`wrmsr`.
        const MSR = 1 << 5;
        /// `sysenter`/`sysexit`.
        const SEP = 1 << 6;
        /// MMX.
        const MMX = 1 << 7;
        /// MMX extensions introduced with SSE (`pextrw mm`, `sfence`, ...).
        const MMX2 = 1 << 8;
        /// SSE.
        const SSE = 1 << 9;
        /// SSE2.
        const SSE2 = 1 << 10;
        /// SSE3.
        const SSE3 = 1 << 11;
        /// SSSE3.
        const SSSE3 = 1 << 12;
        /// SSE4.1.
        const SSE4_1 = 1 << 13;
        /// SSE4.2.
        const SSE4_2 = 1 << 14;
        /// AVX.
        const AVX = 1 << 15;
        /// AVX2.
        const AVX2 = 1 << 16;
        /// AVX-512 foundation.
        const AVX512_F = 1 << 17;
        /// AVX-512 byte/word.
        const AVX512_BW = 1 << 18;
        /// AVX-512 doubleword/quadword.
        const AVX512_DQ = 1 << 19;
        /// AVX-512 vector-length extensions.
        const AVX512_VL = 1 << 20;
    }
}

/// Effect of an instruction on one EFLAGS bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FlagEffect {
    /// Left unchanged.
    Unchanged = 0,
    /// Written.
    Written = 1,
    /// Read.
    Read = 2,
    /// Read and written.
    ReadWritten = 3,
    /// Left undefined.
    Undefined = 4,
    /// Tested without being consumed as data.
    Tested = 5,
}

/// EFLAGS bits tracked per record. `Other` aggregates the lesser-known
/// flags (IF, TF, AC, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EFlag {
    /// Overflow.
    O = 0,
    /// Sign.
    S = 1,
    /// Zero.
    Z = 2,
    /// Adjust.
    A = 3,
    /// Parity.
    P = 4,
    /// Carry.
    C = 5,
    /// Direction.
    D = 6,
    /// Aggregate of the remaining flags.
    Other = 7,
}

/// Micro-architectural family, for behavioral queries unrelated to encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FamilyKind {
    /// No family data.
    None = 0,
    /// x87 stack instruction.
    Fpu = 1,
    /// SSE-family instruction; the index selects the generation row.
    Sse = 2,
}

/// SSE generation of a [`FamilyKind::Sse`] instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SseGeneration {
    /// SSE.
    Sse = 0,
    /// SSE2.
    Sse2 = 1,
    /// SSE3.
    Sse3 = 2,
    /// SSSE3.
    Ssse3 = 3,
    /// SSE4.1.
    Sse41 = 4,
    /// SSE4.2.
    Sse42 = 5,
}

const SSE_GENERATIONS: [SseGeneration; 6] = [
    SseGeneration::Sse,
    SseGeneration::Sse2,
    SseGeneration::Sse3,
    SseGeneration::Ssse3,
    SseGeneration::Sse41,
    SseGeneration::Sse42,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Family {
    pub(crate) kind: FamilyKind,
    pub(crate) index: u8,
}

/// Instruction identifier. Dense: `NONE` is 0, real instructions occupy
/// `1..`[`count()`]. Raw values outside the range are representable so that
/// callers streaming ids from external tables get a typed error instead of
/// a construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstId(u16);

impl InstId {
    /// Id from a raw value, unchecked; [`record`] reports out-of-range ids.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        InstId(raw)
    }

    /// Id from a raw value, `None` when out of range.
    #[must_use]
    pub fn from_u16(raw: u16) -> Option<Self> {
        if (raw as usize) < INST_COUNT {
            Some(InstId(raw))
        } else {
            None
        }
    }

    /// Raw value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the null id.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Mnemonic, or the empty string for the null id.
    #[must_use]
    pub fn name(self) -> &'static str {
        crate::name::name_of(self)
    }
}

impl fmt::Display for InstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        if name.is_empty() {
            write!(f, "<inst #{}>", self.0)
        } else {
            f.write_str(name)
        }
    }
}

/// One immutable instruction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstRecord {
    pub(crate) encoding: EncodingKind,
    pub(crate) sig_group: SigGroup,
    pub(crate) opcode: Opcode,
    pub(crate) alt_opcode: Opcode,
    pub(crate) flags: InstFlags,
    pub(crate) features: CpuFeatures,
    pub(crate) eflags: u32,
    pub(crate) write_index: u8,
    pub(crate) write_size: u8,
    pub(crate) family: Family,
    pub(crate) name_offset: u32,
}

impl InstRecord {
    const fn null() -> Self {
        InstRecord {
            encoding: EncodingKind::None,
            sig_group: SigGroup::NoOp,
            opcode: Opcode::NONE,
            alt_opcode: Opcode::NONE,
            flags: InstFlags::empty(),
            features: CpuFeatures::empty(),
            eflags: 0,
            write_index: 0,
            write_size: 0,
            family: Family {
                kind: FamilyKind::None,
                index: 0,
            },
            name_offset: 0,
        }
    }

    /// Encoding kind.
    #[must_use]
    pub fn encoding(&self) -> EncodingKind {
        self.encoding
    }

    /// Primary opcode word.
    #[must_use]
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Alternate opcode word covering the secondary form selected by the
    /// encoding kind (store direction, immediate form, ...). Consumed by the
    /// encoder only; validation never reads it.
    #[must_use]
    pub fn alt_opcode(&self) -> Opcode {
        self.alt_opcode
    }

    /// Behavior flags.
    #[must_use]
    pub fn flags(&self) -> InstFlags {
        self.flags
    }

    /// Required CPU features.
    #[must_use]
    pub fn features(&self) -> CpuFeatures {
        self.features
    }

    /// Effect on one EFLAGS bit.
    #[must_use]
    pub fn eflags_effect(&self, flag: EFlag) -> FlagEffect {
        match (self.eflags >> ((flag as u32) * 4)) & 0xF {
            0 => FlagEffect::Unchanged,
            1 => FlagEffect::Written,
            2 => FlagEffect::Read,
            3 => FlagEffect::ReadWritten,
            4 => FlagEffect::Undefined,
            _ => FlagEffect::Tested,
        }
    }

    /// Byte offset of the value written by a write-only first operand.
    #[must_use]
    pub fn write_index(&self) -> u8 {
        self.write_index
    }

    /// Size in bytes of the value written by a write-only first operand,
    /// zero when not tracked.
    #[must_use]
    pub fn write_size(&self) -> u8 {
        self.write_size
    }

    /// Micro-architectural family.
    #[must_use]
    pub fn family_kind(&self) -> FamilyKind {
        self.family.kind
    }

    /// Index into the family's data table.
    #[must_use]
    pub fn family_index(&self) -> u8 {
        self.family.index
    }

    /// SSE generation for [`FamilyKind::Sse`] records.
    #[must_use]
    pub fn sse_generation(&self) -> Option<SseGeneration> {
        match self.family.kind {
            FamilyKind::Sse => Some(SSE_GENERATIONS[self.family.index as usize]),
            _ => None,
        }
    }

    /// Offset of the mnemonic in the name blob.
    #[must_use]
    pub fn name_offset(&self) -> u32 {
        self.name_offset
    }

    /// The legal operand tuples of this instruction.
    #[must_use]
    pub fn signatures(&self) -> &'static [InstSignature] {
        self.sig_group.rows()
    }

    /// Offset of the signature group in the flat signature table.
    #[must_use]
    pub fn signature_group_index(&self) -> usize {
        self.sig_group.flat_index() as usize
    }

    /// Number of rows in the signature group.
    #[must_use]
    pub fn signature_group_count(&self) -> usize {
        self.sig_group.rows().len()
    }

    /// Whether a `lock` prefix is legal.
    #[must_use]
    pub fn is_lockable(&self) -> bool {
        self.flags.contains(InstFlags::LOCK)
    }

    /// Whether a VEX encoding exists.
    #[must_use]
    pub fn is_vex(&self) -> bool {
        self.flags.contains(InstFlags::VEX)
    }

    /// Whether an EVEX encoding exists.
    #[must_use]
    pub fn is_evex(&self) -> bool {
        self.flags.contains(InstFlags::EVEX)
    }
}

// Opcode shorthands for the table.
const fn o(byte: u8) -> Opcode {
    Opcode::new(byte)
}
const fn o0f(byte: u8) -> Opcode {
    Opcode::with(Prefix::None, Map::M0F, byte)
}
const fn o66(byte: u8) -> Opcode {
    Opcode::with(Prefix::P66, Map::M0F, byte)
}
const fn of2(byte: u8) -> Opcode {
    Opcode::with(Prefix::PF2, Map::M0F, byte)
}
const fn of3(byte: u8) -> Opcode {
    Opcode::with(Prefix::PF3, Map::M0F, byte)
}
const fn o66_38(byte: u8) -> Opcode {
    Opcode::with(Prefix::P66, Map::M0F38, byte)
}
const fn o66_3a(byte: u8) -> Opcode {
    Opcode::with(Prefix::P66, Map::M0F3A, byte)
}
const fn o66_1(byte: u8) -> Opcode {
    Opcode::with(Prefix::P66, Map::M1, byte)
}
const fn o0f01(byte: u8) -> Opcode {
    Opcode::with(Prefix::None, Map::M0F01, byte)
}

const NO: Opcode = Opcode::NONE;
const FV: TupleType = TupleType::Fv;
const FVM: TupleType = TupleType::Fvm;
const T1S: TupleType = TupleType::T1S;
const L128: VecLen = VecLen::L128;
const L256: VecLen = VecLen::L256;

/// Packs an 8-character EFLAGS description (order `O S Z A P C D X`,
/// tags `_ W R X U T`) into the per-record word.
const fn ef(s: &str) -> u32 {
    let b = s.as_bytes();
    assert!(b.len() == 8, "EFLAGS description must name all 8 tracked bits");
    let mut out = 0u32;
    let mut i = 0;
    while i < 8 {
        let v: u32 = match b[i] {
            b'_' => 0,
            b'W' => 1,
            b'R' => 2,
            b'X' => 3,
            b'U' => 4,
            b'T' => 5,
            _ => panic!("unknown EFLAGS tag"),
        };
        out |= v << (i * 4);
        i += 1;
    }
    out
}

macro_rules! f {
    () => { InstFlags::empty() };
    ($($x:ident)|+) => { InstFlags::from_bits_retain(0 $( | InstFlags::$x.bits() )+) };
}

macro_rules! cpu {
    ($($x:ident)|+) => { CpuFeatures::from_bits_retain(0 $( | CpuFeatures::$x.bits() )+) };
}

macro_rules! fam {
    (N) => {
        Family { kind: FamilyKind::None, index: 0 }
    };
    (FPU) => {
        Family { kind: FamilyKind::Fpu, index: 0 }
    };
    (SSE) => {
        Family { kind: FamilyKind::Sse, index: 0 }
    };
    (SSE2) => {
        Family { kind: FamilyKind::Sse, index: 1 }
    };
    (SSE3) => {
        Family { kind: FamilyKind::Sse, index: 2 }
    };
    (SSSE3) => {
        Family { kind: FamilyKind::Sse, index: 3 }
    };
    (SSE41) => {
        Family { kind: FamilyKind::Sse, index: 4 }
    };
    (SSE42) => {
        Family { kind: FamilyKind::Sse, index: 5 }
    };
}

macro_rules! inst_db {
    ($(
        $id:ident => $name:literal, $enc:ident, $sg:ident, ($opc:expr, $alt:expr),
            [$($fl:ident)|*], [$($cf:ident)|+], $ef:literal, ($wi:literal, $ws:literal), $fam:tt;
    )*) => {
        #[allow(non_camel_case_types, dead_code)]
        #[repr(u16)]
        enum Idx {
            None,
            $($id),*
        }

        #[allow(missing_docs)]
        impl InstId {
            /// The null instruction id.
            pub const NONE: InstId = InstId(0);
            $(
                #[doc = concat!("`", $name, "`")]
                pub const $id: InstId = InstId(Idx::$id as u16);
            )*
        }

        /// Number of instruction ids, the null id included.
        pub(crate) const INST_COUNT: usize = ["" $(, $name)*].len();

        /// Zero-separated mnemonic blob. The null id owns the leading empty
        /// name.
        pub(crate) const NAME_BLOB: &str = concat!("\0" $(, $name, "\0")*);

        const RAW: [InstRecord; INST_COUNT] = [
            InstRecord::null(),
            $(
                InstRecord {
                    encoding: EncodingKind::$enc,
                    sig_group: SigGroup::$sg,
                    opcode: $opc,
                    alt_opcode: $alt,
                    flags: f!($($fl)|*),
                    features: cpu!($($cf)|+),
                    eflags: ef($ef),
                    write_index: $wi,
                    write_size: $ws,
                    family: fam!($fam),
                    name_offset: 0,
                }
            ),*
        ];
    };
}

inst_db! {
    ADC => "adc", X86Arith, Arith, (o(0x10), o(0x80).modo(2)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWWWX__", (0, 0), N;
    ADD => "add", X86Arith, Arith, (o(0x00), o(0x80).modo(0)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWWWW__", (0, 0), N;
    ADDPD => "addpd", ExtRm, SimdRm128, (o66(0x58), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    ADDPS => "addps", ExtRm, SimdRm128, (o0f(0x58), NO), [RW], [SSE], "________", (0, 0), SSE;
    ADDSD => "addsd", ExtRm, SimdRm64, (of2(0x58), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    ADDSS => "addss", ExtRm, SimdRm32, (of3(0x58), NO), [RW], [SSE], "________", (0, 0), SSE;
    AND => "and", X86Arith, Arith, (o(0x20), o(0x80).modo(4)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWUWW__", (0, 0), N;
    ANDNPD => "andnpd", ExtRm, SimdRm128, (o66(0x55), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    ANDNPS => "andnps", ExtRm, SimdRm128, (o0f(0x55), NO), [RW], [SSE], "________", (0, 0), SSE;
    ANDPD => "andpd", ExtRm, SimdRm128, (o66(0x54), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    ANDPS => "andps", ExtRm, SimdRm128, (o0f(0x54), NO), [RW], [SSE], "________", (0, 0), SSE;
    BSF => "bsf", X86RegRm, RegRm, (o0f(0xBC), NO), [WO], [BASE], "UUWUUU__", (0, 0), N;
    BSR => "bsr", X86RegRm, RegRm, (o0f(0xBD), NO), [WO], [BASE], "UUWUUU__", (0, 0), N;
    BSWAP => "bswap", X86Bswap, Bswap, (o0f(0xC8), NO), [RW], [I486], "________", (0, 0), N;
    BT => "bt", X86BTest, Bt, (o0f(0xA3), o0f(0xBA).modo(4)), [RO], [BASE], "_____W__", (0, 0), N;
    BTC => "btc", X86BTest, Bt, (o0f(0xBB), o0f(0xBA).modo(7)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "_____W__", (0, 0), N;
    BTR => "btr", X86BTest, Bt, (o0f(0xB3), o0f(0xBA).modo(6)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "_____W__", (0, 0), N;
    BTS => "bts", X86BTest, Bt, (o0f(0xAB), o0f(0xBA).modo(5)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "_____W__", (0, 0), N;
    CALL => "call", X86Call, Call, (o(0xE8), o(0xFF).modo(2)), [FLOW|VOLATILE], [BASE], "________", (0, 0), N;
    CBW => "cbw", X86Op, NoOp, (o66_1(0x98), NO), [SPECIAL], [BASE], "________", (0, 0), N;
    CDQ => "cdq", X86Op, NoOp, (o(0x99), NO), [SPECIAL], [BASE], "________", (0, 0), N;
    CDQE => "cdqe", X86Op, NoOpX64, (o(0x98).w1(), NO), [SPECIAL], [BASE], "________", (0, 0), N;
    CLC => "clc", X86Op, NoOp, (o(0xF8), NO), [], [BASE], "_____W__", (0, 0), N;
    CLD => "cld", X86Op, NoOp, (o(0xFC), NO), [], [BASE], "______W_", (0, 0), N;
    CLI => "cli", X86Op, NoOp, (o(0xFA), NO), [VOLATILE], [BASE], "_______W", (0, 0), N;
    CMC => "cmc", X86Op, NoOp, (o(0xF5), NO), [], [BASE], "_____X__", (0, 0), N;
    CMOVA => "cmova", X86Cmov, RegRm, (o0f(0x47), NO), [RW], [CMOV], "__R__R__", (0, 0), N;
    CMOVAE => "cmovae", X86Cmov, RegRm, (o0f(0x43), NO), [RW], [CMOV], "_____R__", (0, 0), N;
    CMOVB => "cmovb", X86Cmov, RegRm, (o0f(0x42), NO), [RW], [CMOV], "_____R__", (0, 0), N;
    CMOVBE => "cmovbe", X86Cmov, RegRm, (o0f(0x46), NO), [RW], [CMOV], "__R__R__", (0, 0), N;
    CMOVE => "cmove", X86Cmov, RegRm, (o0f(0x44), NO), [RW], [CMOV], "__R_____", (0, 0), N;
    CMOVG => "cmovg", X86Cmov, RegRm, (o0f(0x4F), NO), [RW], [CMOV], "RRR_____", (0, 0), N;
    CMOVGE => "cmovge", X86Cmov, RegRm, (o0f(0x4D), NO), [RW], [CMOV], "RR______", (0, 0), N;
    CMOVL => "cmovl", X86Cmov, RegRm, (o0f(0x4C), NO), [RW], [CMOV], "RR______", (0, 0), N;
    CMOVLE => "cmovle", X86Cmov, RegRm, (o0f(0x4E), NO), [RW], [CMOV], "RRR_____", (0, 0), N;
    CMOVNE => "cmovne", X86Cmov, RegRm, (o0f(0x45), NO), [RW], [CMOV], "__R_____", (0, 0), N;
    CMOVNO => "cmovno", X86Cmov, RegRm, (o0f(0x41), NO), [RW], [CMOV], "R_______", (0, 0), N;
    CMOVNP => "cmovnp", X86Cmov, RegRm, (o0f(0x4B), NO), [RW], [CMOV], "____R___", (0, 0), N;
    CMOVNS => "cmovns", X86Cmov, RegRm, (o0f(0x49), NO), [RW], [CMOV], "_R______", (0, 0), N;
    CMOVO => "cmovo", X86Cmov, RegRm, (o0f(0x40), NO), [RW], [CMOV], "R_______", (0, 0), N;
    CMOVP => "cmovp", X86Cmov, RegRm, (o0f(0x4A), NO), [RW], [CMOV], "____R___", (0, 0), N;
    CMOVS => "cmovs", X86Cmov, RegRm, (o0f(0x48), NO), [RW], [CMOV], "_R______", (0, 0), N;
    CMP => "cmp", X86Arith, Arith, (o(0x38), o(0x80).modo(7)), [RO], [BASE], "WWWWWW__", (0, 0), N;
    CMPPD => "cmppd", ExtRmi, SimdRmI128, (o66(0xC2), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    CMPPS => "cmpps", ExtRmi, SimdRmI128, (o0f(0xC2), NO), [RW], [SSE], "________", (0, 0), SSE;
    CMPSD => "cmpsd", ExtRmi, SimdRmI64, (of2(0xC2), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    CMPSS => "cmpss", ExtRmi, SimdRmI32, (of3(0xC2), NO), [RW], [SSE], "________", (0, 0), SSE;
    CMPXCHG => "cmpxchg", X86Cmpxchg, Cmpxchg, (o0f(0xB0), NO), [RW|LOCK|XACQUIRE|XRELEASE|SPECIAL], [I486], "WWWWWW__", (0, 0), N;
    COMISD => "comisd", ExtRm, SimdRm64, (o66(0x2F), NO), [RO], [SSE2], "WWWWWW__", (0, 0), SSE2;
    COMISS => "comiss", ExtRm, SimdRm32, (o0f(0x2F), NO), [RO], [SSE], "WWWWWW__", (0, 0), SSE;
    CPUID => "cpuid", X86Op, NoOp, (o0f(0xA2), NO), [VOLATILE|SPECIAL], [I486], "________", (0, 0), N;
    CQO => "cqo", X86Op, NoOpX64, (o(0x99).w1(), NO), [SPECIAL], [BASE], "________", (0, 0), N;
    CVTDQ2PD => "cvtdq2pd", ExtRm, SimdRm64, (of3(0xE6), NO), [WO], [SSE2], "________", (0, 16), SSE2;
    CVTDQ2PS => "cvtdq2ps", ExtRm, SimdRm128, (o0f(0x5B), NO), [WO], [SSE2], "________", (0, 16), SSE2;
    CVTPD2PS => "cvtpd2ps", ExtRm, SimdRm128, (o66(0x5A), NO), [WO], [SSE2], "________", (0, 16), SSE2;
    CVTPS2PD => "cvtps2pd", ExtRm, SimdRm64, (o0f(0x5A), NO), [WO], [SSE2], "________", (0, 16), SSE2;
    CVTSD2SS => "cvtsd2ss", ExtRm, SimdRm64, (of2(0x5A), NO), [WO], [SSE2], "________", (0, 4), SSE2;
    CVTSI2SD => "cvtsi2sd", ExtCvtSi, CvtSi2S, (of2(0x2A), NO), [WO], [SSE2], "________", (0, 8), SSE2;
    CVTSI2SS => "cvtsi2ss", ExtCvtSi, CvtSi2S, (of3(0x2A), NO), [WO], [SSE], "________", (0, 4), SSE;
    CVTSS2SD => "cvtss2sd", ExtRm, SimdRm32, (of3(0x5A), NO), [WO], [SSE2], "________", (0, 8), SSE2;
    CVTTSD2SI => "cvttsd2si", ExtCvtGp, CvtS2Si64, (of2(0x2C), NO), [WO], [SSE2], "________", (0, 8), SSE2;
    CVTTSS2SI => "cvttss2si", ExtCvtGp, CvtS2Si32, (of3(0x2C), NO), [WO], [SSE], "________", (0, 8), SSE;
    CWD => "cwd", X86Op, NoOp, (o66_1(0x99), NO), [SPECIAL], [BASE], "________", (0, 0), N;
    CWDE => "cwde", X86Op, NoOp, (o(0x98), NO), [SPECIAL], [BASE], "________", (0, 0), N;
    DEC => "dec", X86IncDec, Rm, (o(0xFE).modo(1), o(0x48)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWWW___", (0, 0), N;
    DIV => "div", X86Rm, Rm, (o(0xF6).modo(6), NO), [RW|SPECIAL], [BASE], "UUUUUU__", (0, 0), N;
    DIVPD => "divpd", ExtRm, SimdRm128, (o66(0x5E), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    DIVPS => "divps", ExtRm, SimdRm128, (o0f(0x5E), NO), [RW], [SSE], "________", (0, 0), SSE;
    DIVSD => "divsd", ExtRm, SimdRm64, (of2(0x5E), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    DIVSS => "divss", ExtRm, SimdRm32, (of3(0x5E), NO), [RW], [SSE], "________", (0, 0), SSE;
    EMMS => "emms", X86Op, NoOp, (o0f(0x77), NO), [], [MMX], "________", (0, 0), N;
    ENTER => "enter", X86Enter, Enter, (o(0xC8), NO), [VOLATILE|SPECIAL], [BASE], "________", (0, 0), N;
    F2XM1 => "f2xm1", FpuOp, NoOp, (o(0xF0).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FABS => "fabs", FpuOp, NoOp, (o(0xE1).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FADD => "fadd", FpuArith, FpuArith, (o(0xD8).modo(0), o(0xDC).modo(0)), [RW], [FPU], "________", (0, 0), FPU;
    FADDP => "faddp", FpuArithP, FpuArithP, (o(0xDE).modo(0), NO), [RW], [FPU], "________", (0, 0), FPU;
    FCHS => "fchs", FpuOp, NoOp, (o(0xE0).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FCOM => "fcom", FpuCom, FpuCom, (o(0xD8).modo(2), o(0xDC).modo(2)), [RO], [FPU], "________", (0, 0), FPU;
    FCOMP => "fcomp", FpuCom, FpuCom, (o(0xD8).modo(3), o(0xDC).modo(3)), [RO], [FPU], "________", (0, 0), FPU;
    FCOMPP => "fcompp", FpuOp, NoOp, (o(0xD9).modo(6), NO), [RO], [FPU], "________", (0, 0), FPU;
    FCOS => "fcos", FpuOp, NoOp, (o(0xFF).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FDECSTP => "fdecstp", FpuOp, NoOp, (o(0xF6).modo(1), NO), [SPECIAL], [FPU], "________", (0, 0), FPU;
    FDIV => "fdiv", FpuArith, FpuArith, (o(0xD8).modo(6), o(0xDC).modo(6)), [RW], [FPU], "________", (0, 0), FPU;
    FDIVP => "fdivp", FpuArithP, FpuArithP, (o(0xDE).modo(7), NO), [RW], [FPU], "________", (0, 0), FPU;
    FDIVR => "fdivr", FpuArith, FpuArith, (o(0xD8).modo(7), o(0xDC).modo(7)), [RW], [FPU], "________", (0, 0), FPU;
    FDIVRP => "fdivrp", FpuArithP, FpuArithP, (o(0xDE).modo(6), NO), [RW], [FPU], "________", (0, 0), FPU;
    FILD => "fild", FpuM, FpuIld, (o(0xDB).modo(0), o(0xDF).modo(5)), [WO], [FPU], "________", (0, 0), FPU;
    FINCSTP => "fincstp", FpuOp, NoOp, (o(0xF7).modo(1), NO), [SPECIAL], [FPU], "________", (0, 0), FPU;
    FIST => "fist", FpuM, FpuIst, (o(0xDB).modo(2), NO), [RO], [FPU], "________", (0, 0), FPU;
    FISTP => "fistp", FpuM, FpuIstp, (o(0xDB).modo(3), o(0xDF).modo(7)), [RO], [FPU], "________", (0, 0), FPU;
    FLD => "fld", FpuLdSt, FpuLd, (o(0xD9).modo(0), o(0xDB).modo(5)), [WO|SPECIAL], [FPU], "________", (0, 0), FPU;
    FLD1 => "fld1", FpuOp, NoOp, (o(0xE8).modo(1), NO), [WO|SPECIAL], [FPU], "________", (0, 0), FPU;
    FLDCW => "fldcw", FpuM, FpuMem16, (o(0xD9).modo(5), NO), [RO|VOLATILE], [FPU], "________", (0, 0), FPU;
    FLDZ => "fldz", FpuOp, NoOp, (o(0xEE).modo(1), NO), [WO|SPECIAL], [FPU], "________", (0, 0), FPU;
    FMUL => "fmul", FpuArith, FpuArith, (o(0xD8).modo(1), o(0xDC).modo(1)), [RW], [FPU], "________", (0, 0), FPU;
    FMULP => "fmulp", FpuArithP, FpuArithP, (o(0xDE).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FNOP => "fnop", FpuOp, NoOp, (o(0xD0).modo(1), NO), [], [FPU], "________", (0, 0), FPU;
    FNSTCW => "fnstcw", FpuM, FpuMem16, (o(0xD9).modo(7), NO), [WO|VOLATILE], [FPU], "________", (0, 0), FPU;
    FNSTSW => "fnstsw", FpuStsw, Fnstsw, (o(0xDD).modo(7), o(0xE0).modo(7)), [WO|SPECIAL], [FPU], "________", (0, 0), FPU;
    FPREM => "fprem", FpuOp, NoOp, (o(0xF8).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FPTAN => "fptan", FpuOp, NoOp, (o(0xF2).modo(1), NO), [RW|SPECIAL], [FPU], "________", (0, 0), FPU;
    FRNDINT => "frndint", FpuOp, NoOp, (o(0xFC).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FSIN => "fsin", FpuOp, NoOp, (o(0xFE).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FSINCOS => "fsincos", FpuOp, NoOp, (o(0xFB).modo(1), NO), [RW|SPECIAL], [FPU], "________", (0, 0), FPU;
    FSQRT => "fsqrt", FpuOp, NoOp, (o(0xFA).modo(1), NO), [RW], [FPU], "________", (0, 0), FPU;
    FST => "fst", FpuLdSt, FpuSt, (o(0xD9).modo(2), o(0xDD).modo(2)), [RO], [FPU], "________", (0, 0), FPU;
    FSTP => "fstp", FpuLdSt, FpuStp, (o(0xD9).modo(3), o(0xDB).modo(7)), [RO|SPECIAL], [FPU], "________", (0, 0), FPU;
    FSUB => "fsub", FpuArith, FpuArith, (o(0xD8).modo(4), o(0xDC).modo(4)), [RW], [FPU], "________", (0, 0), FPU;
    FSUBP => "fsubp", FpuArithP, FpuArithP, (o(0xDE).modo(5), NO), [RW], [FPU], "________", (0, 0), FPU;
    FSUBR => "fsubr", FpuArith, FpuArith, (o(0xD8).modo(5), o(0xDC).modo(5)), [RW], [FPU], "________", (0, 0), FPU;
    FSUBRP => "fsubrp", FpuArithP, FpuArithP, (o(0xDE).modo(4), NO), [RW], [FPU], "________", (0, 0), FPU;
    FTST => "ftst", FpuOp, NoOp, (o(0xE4).modo(1), NO), [RO], [FPU], "________", (0, 0), FPU;
    FUCOM => "fucom", FpuCom, FpuUcom, (o(0xE0).modo(5), NO), [RO], [FPU], "________", (0, 0), FPU;
    FUCOMP => "fucomp", FpuCom, FpuUcom, (o(0xE8).modo(5), NO), [RO], [FPU], "________", (0, 0), FPU;
    FUCOMPP => "fucompp", FpuOp, NoOp, (o(0xE9).modo(2), NO), [RO], [FPU], "________", (0, 0), FPU;
    FXAM => "fxam", FpuOp, NoOp, (o(0xE5).modo(1), NO), [RO], [FPU], "________", (0, 0), FPU;
    FXCH => "fxch", FpuXch, FpuXch, (o(0xC8).modo(1), NO), [RW|XCHG], [FPU], "________", (0, 0), FPU;
    FYL2X => "fyl2x", FpuOp, NoOp, (o(0xF1).modo(1), NO), [RW|SPECIAL], [FPU], "________", (0, 0), FPU;
    HLT => "hlt", X86Op, NoOp, (o(0xF4), NO), [VOLATILE], [BASE], "________", (0, 0), N;
    IDIV => "idiv", X86Rm, Rm, (o(0xF6).modo(7), NO), [RW|SPECIAL], [BASE], "UUUUUU__", (0, 0), N;
    IMUL => "imul", X86Imul, Imul, (o0f(0xAF), o(0x69)), [RW|SPECIAL], [BASE], "WUUUUW__", (0, 0), N;
    IN => "in", X86In, In, (o(0xE4), o(0xEC)), [WO|VOLATILE|SPECIAL], [BASE], "________", (0, 0), N;
    INC => "inc", X86IncDec, Rm, (o(0xFE).modo(0), o(0x40)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWWW___", (0, 0), N;
    INT => "int", X86Int, Int, (o(0xCD), NO), [FLOW|VOLATILE], [BASE], "________", (0, 0), N;
    INT3 => "int3", X86Op, NoOp, (o(0xCC), NO), [FLOW|VOLATILE], [BASE], "________", (0, 0), N;
    IRETD => "iretd", X86Op, NoOp, (o(0xCF), NO), [FLOW|VOLATILE|SPECIAL], [BASE], "WWWWWWWW", (0, 0), N;
    IRETQ => "iretq", X86Op, NoOpX64, (o(0xCF).w1(), NO), [FLOW|VOLATILE|SPECIAL], [BASE], "WWWWWWWW", (0, 0), N;
    JA => "ja", X86Jcc, Jcc, (o(0x77), o0f(0x87)), [FLOW|VOLATILE], [BASE], "__R__R__", (0, 0), N;
    JAE => "jae", X86Jcc, Jcc, (o(0x73), o0f(0x83)), [FLOW|VOLATILE], [BASE], "_____R__", (0, 0), N;
    JB => "jb", X86Jcc, Jcc, (o(0x72), o0f(0x82)), [FLOW|VOLATILE], [BASE], "_____R__", (0, 0), N;
    JBE => "jbe", X86Jcc, Jcc, (o(0x76), o0f(0x86)), [FLOW|VOLATILE], [BASE], "__R__R__", (0, 0), N;
    JE => "je", X86Jcc, Jcc, (o(0x74), o0f(0x84)), [FLOW|VOLATILE], [BASE], "__R_____", (0, 0), N;
    JG => "jg", X86Jcc, Jcc, (o(0x7F), o0f(0x8F)), [FLOW|VOLATILE], [BASE], "RRR_____", (0, 0), N;
    JGE => "jge", X86Jcc, Jcc, (o(0x7D), o0f(0x8D)), [FLOW|VOLATILE], [BASE], "RR______", (0, 0), N;
    JL => "jl", X86Jcc, Jcc, (o(0x7C), o0f(0x8C)), [FLOW|VOLATILE], [BASE], "RR______", (0, 0), N;
    JLE => "jle", X86Jcc, Jcc, (o(0x7E), o0f(0x8E)), [FLOW|VOLATILE], [BASE], "RRR_____", (0, 0), N;
    JNE => "jne", X86Jcc, Jcc, (o(0x75), o0f(0x85)), [FLOW|VOLATILE], [BASE], "__R_____", (0, 0), N;
    JNO => "jno", X86Jcc, Jcc, (o(0x71), o0f(0x81)), [FLOW|VOLATILE], [BASE], "R_______", (0, 0), N;
    JNP => "jnp", X86Jcc, Jcc, (o(0x7B), o0f(0x8B)), [FLOW|VOLATILE], [BASE], "____R___", (0, 0), N;
    JNS => "jns", X86Jcc, Jcc, (o(0x79), o0f(0x89)), [FLOW|VOLATILE], [BASE], "_R______", (0, 0), N;
    JO => "jo", X86Jcc, Jcc, (o(0x70), o0f(0x80)), [FLOW|VOLATILE], [BASE], "R_______", (0, 0), N;
    JP => "jp", X86Jcc, Jcc, (o(0x7A), o0f(0x8A)), [FLOW|VOLATILE], [BASE], "____R___", (0, 0), N;
    JS => "js", X86Jcc, Jcc, (o(0x78), o0f(0x88)), [FLOW|VOLATILE], [BASE], "_R______", (0, 0), N;
    JECXZ => "jecxz", X86Jcxz, Rel8, (o(0xE3), NO), [FLOW|VOLATILE|SPECIAL], [BASE], "________", (0, 0), N;
    JMP => "jmp", X86Jmp, Jmp, (o(0xE9), o(0xFF).modo(4)), [FLOW|VOLATILE], [BASE], "________", (0, 0), N;
    KANDW => "kandw", VexRvm, Kkk, (o0f(0x41).len(L256), NO), [WO|VEX], [AVX512_F], "________", (0, 0), N;
    KMOVB => "kmovb", VexKmov, KmovB, (o66(0x90), o66(0x92)), [WO|VEX], [AVX512_DQ], "________", (0, 0), N;
    KMOVD => "kmovd", VexKmov, KmovD, (o66(0x90).w1(), of2(0x92)), [WO|VEX], [AVX512_BW], "________", (0, 0), N;
    KMOVQ => "kmovq", VexKmov, KmovQ, (o0f(0x90).w1(), of2(0x92).w1()), [WO|VEX], [AVX512_BW], "________", (0, 0), N;
    KMOVW => "kmovw", VexKmov, KmovW, (o0f(0x90), o0f(0x92)), [WO|VEX], [AVX512_F], "________", (0, 0), N;
    KNOTW => "knotw", VexRm, Kk, (o0f(0x44), NO), [WO|VEX], [AVX512_F], "________", (0, 0), N;
    KORTESTW => "kortestw", VexRm, Kk, (o0f(0x98), NO), [RO|VEX], [AVX512_F], "__W__W__", (0, 0), N;
    KORW => "korw", VexRvm, Kkk, (o0f(0x45).len(L256), NO), [WO|VEX], [AVX512_F], "________", (0, 0), N;
    KXORW => "kxorw", VexRvm, Kkk, (o0f(0x47).len(L256), NO), [WO|VEX], [AVX512_F], "________", (0, 0), N;
    LAHF => "lahf", X86Op, NoOp, (o(0x9F), NO), [WO|SPECIAL], [BASE], "_RRRRR__", (0, 0), N;
    LEA => "lea", X86Lea, Lea, (o(0x8D), NO), [WO], [BASE], "________", (0, 0), N;
    LEAVE => "leave", X86Op, NoOp, (o(0xC9), NO), [VOLATILE|SPECIAL], [BASE], "________", (0, 0), N;
    LFENCE => "lfence", X86Fence, NoOp, (o0f(0xAE).modo(5), NO), [VOLATILE], [SSE2], "________", (0, 0), N;
    LODSB => "lodsb", X86StrLods, Lods8, (o(0xAC), NO), [WO|SPECIAL], [BASE], "______R_", (0, 0), N;
    LODSD => "lodsd", X86StrLods, Lods32, (o(0xAD), NO), [WO|SPECIAL], [BASE], "______R_", (0, 0), N;
    LODSQ => "lodsq", X86StrLods, Lods64, (o(0xAD).w1(), NO), [WO|SPECIAL], [BASE], "______R_", (0, 0), N;
    LODSW => "lodsw", X86StrLods, Lods16, (o66_1(0xAD), NO), [WO|SPECIAL], [BASE], "______R_", (0, 0), N;
    LOOP => "loop", X86Loop, Rel8, (o(0xE2), NO), [FLOW|VOLATILE|SPECIAL], [BASE], "________", (0, 0), N;
    LOOPE => "loope", X86Loop, Rel8, (o(0xE1), NO), [FLOW|VOLATILE|SPECIAL], [BASE], "__R_____", (0, 0), N;
    LOOPNE => "loopne", X86Loop, Rel8, (o(0xE0), NO), [FLOW|VOLATILE|SPECIAL], [BASE], "__R_____", (0, 0), N;
    MAXPD => "maxpd", ExtRm, SimdRm128, (o66(0x5F), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    MAXPS => "maxps", ExtRm, SimdRm128, (o0f(0x5F), NO), [RW], [SSE], "________", (0, 0), SSE;
    MAXSD => "maxsd", ExtRm, SimdRm64, (of2(0x5F), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    MAXSS => "maxss", ExtRm, SimdRm32, (of3(0x5F), NO), [RW], [SSE], "________", (0, 0), SSE;
    MFENCE => "mfence", X86Fence, NoOp, (o0f(0xAE).modo(6), NO), [VOLATILE], [SSE2], "________", (0, 0), N;
    MINPD => "minpd", ExtRm, SimdRm128, (o66(0x5D), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    MINPS => "minps", ExtRm, SimdRm128, (o0f(0x5D), NO), [RW], [SSE], "________", (0, 0), SSE;
    MINSD => "minsd", ExtRm, SimdRm64, (of2(0x5D), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    MINSS => "minss", ExtRm, SimdRm32, (of3(0x5D), NO), [RW], [SSE], "________", (0, 0), SSE;
    MOV => "mov", X86Mov, Mov, (o(0x88), o(0xC6).modo(0)), [WO], [BASE], "________", (0, 0), N;
    MOVAPD => "movapd", ExtMov, SimdMov128, (o66(0x28), o66(0x29)), [WO], [SSE2], "________", (0, 16), SSE2;
    MOVAPS => "movaps", ExtMov, SimdMov128, (o0f(0x28), o0f(0x29)), [WO], [SSE], "________", (0, 16), SSE;
    MOVD => "movd", ExtMovd, Movd, (o66(0x6E), o66(0x7E)), [WO], [MMX|SSE2], "________", (0, 16), SSE2;
    MOVDQA => "movdqa", ExtMov, SimdMov128, (o66(0x6F), o66(0x7F)), [WO], [SSE2], "________", (0, 16), SSE2;
    MOVDQU => "movdqu", ExtMov, SimdMov128, (of3(0x6F), of3(0x7F)), [WO], [SSE2], "________", (0, 16), SSE2;
    MOVHLPS => "movhlps", ExtRm, MovHl, (o0f(0x12), NO), [WO], [SSE], "________", (0, 8), SSE;
    MOVLHPS => "movlhps", ExtRm, MovHl, (o0f(0x16), NO), [WO], [SSE], "________", (8, 8), SSE;
    MOVMSKPD => "movmskpd", ExtRm_Gp, Movmsk, (o66(0x50), NO), [WO], [SSE2], "________", (0, 8), SSE2;
    MOVMSKPS => "movmskps", ExtRm_Gp, Movmsk, (o0f(0x50), NO), [WO], [SSE], "________", (0, 8), SSE;
    MOVQ => "movq", ExtMovq, Movq, (of3(0x7E), o66(0xD6)), [WO], [MMX|SSE2], "________", (0, 16), SSE2;
    MOVSD => "movsd", ExtMov, SimdMovSd, (of2(0x10), of2(0x11)), [WO|ZERO_IF_MEM], [SSE2], "________", (0, 8), SSE2;
    MOVSS => "movss", ExtMov, SimdMovSs, (of3(0x10), of3(0x11)), [WO|ZERO_IF_MEM], [SSE], "________", (0, 4), SSE;
    MOVSX => "movsx", X86MovsxMovzx, MovsxMovzx, (o0f(0xBE), NO), [WO], [BASE], "________", (0, 0), N;
    MOVSXD => "movsxd", X86Movsxd, Movsxd, (o(0x63), NO), [WO], [BASE], "________", (0, 0), N;
    MOVUPD => "movupd", ExtMov, SimdMov128, (o66(0x10), o66(0x11)), [WO], [SSE2], "________", (0, 16), SSE2;
    MOVUPS => "movups", ExtMov, SimdMov128, (o0f(0x10), o0f(0x11)), [WO], [SSE], "________", (0, 16), SSE;
    MOVZX => "movzx", X86MovsxMovzx, MovsxMovzx, (o0f(0xB6), NO), [WO], [BASE], "________", (0, 0), N;
    MUL => "mul", X86Rm, Rm, (o(0xF6).modo(4), NO), [RW|SPECIAL], [BASE], "WUUUUW__", (0, 0), N;
    MULPD => "mulpd", ExtRm, SimdRm128, (o66(0x59), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    MULPS => "mulps", ExtRm, SimdRm128, (o0f(0x59), NO), [RW], [SSE], "________", (0, 0), SSE;
    MULSD => "mulsd", ExtRm, SimdRm64, (of2(0x59), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    MULSS => "mulss", ExtRm, SimdRm32, (of3(0x59), NO), [RW], [SSE], "________", (0, 0), SSE;
    NEG => "neg", X86Rm, Rm, (o(0xF6).modo(3), NO), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWWWW__", (0, 0), N;
    NOP => "nop", X86Rm, Nop, (o(0x90), o0f(0x1F).modo(0)), [], [BASE], "________", (0, 0), N;
    NOT => "not", X86Rm, Rm, (o(0xF6).modo(2), NO), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "________", (0, 0), N;
    OR => "or", X86Arith, Arith, (o(0x08), o(0x80).modo(1)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWUWW__", (0, 0), N;
    ORPD => "orpd", ExtRm, SimdRm128, (o66(0x56), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    ORPS => "orps", ExtRm, SimdRm128, (o0f(0x56), NO), [RW], [SSE], "________", (0, 0), SSE;
    OUT => "out", X86Out, Out, (o(0xE6), o(0xEE)), [RO|VOLATILE|SPECIAL], [BASE], "________", (0, 0), N;
    PACKSSDW => "packssdw", ExtRm_P, MmxSse, (o66(0x6B), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PACKSSWB => "packsswb", ExtRm_P, MmxSse, (o66(0x63), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PACKUSWB => "packuswb", ExtRm_P, MmxSse, (o66(0x67), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PADDB => "paddb", ExtRm_P, MmxSse, (o66(0xFC), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PADDD => "paddd", ExtRm_P, MmxSse, (o66(0xFE), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PADDQ => "paddq", ExtRm_P, MmxSse, (o66(0xD4), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    PADDSB => "paddsb", ExtRm_P, MmxSse, (o66(0xEC), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PADDSW => "paddsw", ExtRm_P, MmxSse, (o66(0xED), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PADDUSB => "paddusb", ExtRm_P, MmxSse, (o66(0xDC), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PADDUSW => "paddusw", ExtRm_P, MmxSse, (o66(0xDD), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PADDW => "paddw", ExtRm_P, MmxSse, (o66(0xFD), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PAND => "pand", ExtRm_P, MmxSse, (o66(0xDB), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PANDN => "pandn", ExtRm_P, MmxSse, (o66(0xDF), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PAUSE => "pause", X86Op, NoOp, (of3(0x90), NO), [], [SSE2], "________", (0, 0), N;
    PAVGB => "pavgb", ExtRm_P, MmxSse, (o66(0xE0), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PAVGW => "pavgw", ExtRm_P, MmxSse, (o66(0xE3), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PCMPEQB => "pcmpeqb", ExtRm_P, MmxSse, (o66(0x74), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PCMPEQD => "pcmpeqd", ExtRm_P, MmxSse, (o66(0x76), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PCMPEQW => "pcmpeqw", ExtRm_P, MmxSse, (o66(0x75), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PCMPGTB => "pcmpgtb", ExtRm_P, MmxSse, (o66(0x64), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PCMPGTD => "pcmpgtd", ExtRm_P, MmxSse, (o66(0x66), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PCMPGTW => "pcmpgtw", ExtRm_P, MmxSse, (o66(0x65), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PEXTRW => "pextrw", ExtExtract, Pextrw, (o66(0xC5), o66_3a(0x15)), [WO], [MMX2|SSE2], "________", (0, 4), SSE2;
    PINSRW => "pinsrw", ExtInsert, Pinsrw, (o66(0xC4), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PMADDWD => "pmaddwd", ExtRm_P, MmxSse, (o66(0xF5), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PMAXSW => "pmaxsw", ExtRm_P, MmxSse, (o66(0xEE), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PMAXUB => "pmaxub", ExtRm_P, MmxSse, (o66(0xDE), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PMINSW => "pminsw", ExtRm_P, MmxSse, (o66(0xEA), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PMINUB => "pminub", ExtRm_P, MmxSse, (o66(0xDA), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PMOVMSKB => "pmovmskb", ExtRm_Gp, Pmovmskb, (o66(0xD7), NO), [WO], [MMX2|SSE2], "________", (0, 8), SSE2;
    PMULHUW => "pmulhuw", ExtRm_P, MmxSse, (o66(0xE4), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PMULHW => "pmulhw", ExtRm_P, MmxSse, (o66(0xE5), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PMULLW => "pmullw", ExtRm_P, MmxSse, (o66(0xD5), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PMULUDQ => "pmuludq", ExtRm_P, MmxSse, (o66(0xF4), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    POP => "pop", X86Pop, Pop, (o(0x58), o(0x8F).modo(0)), [WO|SPECIAL], [BASE], "________", (0, 0), N;
    POPFD => "popfd", X86Op, NoOpX86, (o(0x9D), NO), [VOLATILE|SPECIAL], [BASE], "WWWWWWWW", (0, 0), N;
    POPFQ => "popfq", X86Op, NoOpX64, (o(0x9D), NO), [VOLATILE|SPECIAL], [BASE], "WWWWWWWW", (0, 0), N;
    POR => "por", ExtRm_P, MmxSse, (o66(0xEB), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PREFETCHNTA => "prefetchnta", X86Prefetch, Prefetch, (o0f(0x18).modo(0), NO), [RO|VOLATILE], [MMX2], "________", (0, 0), N;
    PREFETCHT0 => "prefetcht0", X86Prefetch, Prefetch, (o0f(0x18).modo(1), NO), [RO|VOLATILE], [MMX2], "________", (0, 0), N;
    PREFETCHT1 => "prefetcht1", X86Prefetch, Prefetch, (o0f(0x18).modo(2), NO), [RO|VOLATILE], [MMX2], "________", (0, 0), N;
    PREFETCHT2 => "prefetcht2", X86Prefetch, Prefetch, (o0f(0x18).modo(3), NO), [RO|VOLATILE], [MMX2], "________", (0, 0), N;
    PSADBW => "psadbw", ExtRm_P, MmxSse, (o66(0xF6), NO), [RW], [MMX2|SSE2], "________", (0, 0), SSE2;
    PSHUFD => "pshufd", ExtRmi, SimdRmI128, (o66(0x70), NO), [WO], [SSE2], "________", (0, 16), SSE2;
    PSHUFHW => "pshufhw", ExtRmi, SimdRmI128, (of3(0x70), NO), [WO], [SSE2], "________", (0, 16), SSE2;
    PSHUFLW => "pshuflw", ExtRmi, SimdRmI128, (of2(0x70), NO), [WO], [SSE2], "________", (0, 16), SSE2;
    PSLLD => "pslld", ExtRmRi_P, SimdShift, (o66(0xF2), o66(0x72).modo(6)), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSLLQ => "psllq", ExtRmRi_P, SimdShift, (o66(0xF3), o66(0x73).modo(6)), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSLLW => "psllw", ExtRmRi_P, SimdShift, (o66(0xF1), o66(0x71).modo(6)), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSRAD => "psrad", ExtRmRi_P, SimdShift, (o66(0xE2), o66(0x72).modo(4)), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSRAW => "psraw", ExtRmRi_P, SimdShift, (o66(0xE1), o66(0x71).modo(4)), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSRLD => "psrld", ExtRmRi_P, SimdShift, (o66(0xD2), o66(0x72).modo(2)), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSRLQ => "psrlq", ExtRmRi_P, SimdShift, (o66(0xD3), o66(0x73).modo(2)), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSRLW => "psrlw", ExtRmRi_P, SimdShift, (o66(0xD1), o66(0x71).modo(2)), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSUBB => "psubb", ExtRm_P, MmxSse, (o66(0xF8), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSUBD => "psubd", ExtRm_P, MmxSse, (o66(0xFA), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSUBQ => "psubq", ExtRm_P, MmxSse, (o66(0xFB), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    PSUBSB => "psubsb", ExtRm_P, MmxSse, (o66(0xE8), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSUBSW => "psubsw", ExtRm_P, MmxSse, (o66(0xE9), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSUBUSB => "psubusb", ExtRm_P, MmxSse, (o66(0xD8), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSUBUSW => "psubusw", ExtRm_P, MmxSse, (o66(0xD9), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PSUBW => "psubw", ExtRm_P, MmxSse, (o66(0xF9), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PUNPCKHBW => "punpckhbw", ExtRm_P, MmxSse, (o66(0x68), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PUNPCKHDQ => "punpckhdq", ExtRm_P, MmxSse, (o66(0x6A), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PUNPCKHQDQ => "punpckhqdq", ExtRm, SimdRm128, (o66(0x6D), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    PUNPCKHWD => "punpckhwd", ExtRm_P, MmxSse, (o66(0x69), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PUNPCKLBW => "punpcklbw", ExtRm_P, MmxSse, (o66(0x60), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PUNPCKLDQ => "punpckldq", ExtRm_P, MmxSse, (o66(0x62), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PUNPCKLQDQ => "punpcklqdq", ExtRm, SimdRm128, (o66(0x6C), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    PUNPCKLWD => "punpcklwd", ExtRm_P, MmxSse, (o66(0x61), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    PUSH => "push", X86Push, Push, (o(0x50), o(0xFF).modo(6)), [RO|SPECIAL], [BASE], "________", (0, 0), N;
    PUSHFD => "pushfd", X86Op, NoOpX86, (o(0x9C), NO), [VOLATILE|SPECIAL], [BASE], "RRRRRRRR", (0, 0), N;
    PUSHFQ => "pushfq", X86Op, NoOpX64, (o(0x9C), NO), [VOLATILE|SPECIAL], [BASE], "RRRRRRRR", (0, 0), N;
    PXOR => "pxor", ExtRm_P, MmxSse, (o66(0xEF), NO), [RW], [MMX|SSE2], "________", (0, 0), SSE2;
    RCL => "rcl", X86Rot, Shift, (o(0xD2).modo(2), o(0xC0).modo(2)), [RW], [BASE], "W____X__", (0, 0), N;
    RCR => "rcr", X86Rot, Shift, (o(0xD2).modo(3), o(0xC0).modo(3)), [RW], [BASE], "W____X__", (0, 0), N;
    RDMSR => "rdmsr", X86Op, NoOp, (o0f(0x32), NO), [WO|VOLATILE|SPECIAL], [MSR], "________", (0, 0), N;
    RDTSC => "rdtsc", X86Op, NoOp, (o0f(0x31), NO), [WO|VOLATILE|SPECIAL], [TSC], "________", (0, 0), N;
    RDTSCP => "rdtscp", X86Op, NoOp, (o0f01(0xF9), NO), [WO|VOLATILE|SPECIAL], [TSC], "________", (0, 0), N;
    RET => "ret", X86Ret, Ret, (o(0xC3), o(0xC2)), [FLOW|VOLATILE], [BASE], "________", (0, 0), N;
    ROL => "rol", X86Rot, Shift, (o(0xD2).modo(0), o(0xC0).modo(0)), [RW], [BASE], "W____W__", (0, 0), N;
    ROR => "ror", X86Rot, Shift, (o(0xD2).modo(1), o(0xC0).modo(1)), [RW], [BASE], "W____W__", (0, 0), N;
    SAHF => "sahf", X86Op, NoOp, (o(0x9E), NO), [RO|SPECIAL], [BASE], "_WWWWW__", (0, 0), N;
    SAR => "sar", X86Rot, Shift, (o(0xD2).modo(7), o(0xC0).modo(7)), [RW], [BASE], "WWWUWW__", (0, 0), N;
    SBB => "sbb", X86Arith, Arith, (o(0x18), o(0x80).modo(3)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWWWX__", (0, 0), N;
    SETA => "seta", X86Set, Setcc, (o0f(0x97).modo(0), NO), [WO], [BASE], "__R__R__", (0, 1), N;
    SETAE => "setae", X86Set, Setcc, (o0f(0x93).modo(0), NO), [WO], [BASE], "_____R__", (0, 1), N;
    SETB => "setb", X86Set, Setcc, (o0f(0x92).modo(0), NO), [WO], [BASE], "_____R__", (0, 1), N;
    SETBE => "setbe", X86Set, Setcc, (o0f(0x96).modo(0), NO), [WO], [BASE], "__R__R__", (0, 1), N;
    SETE => "sete", X86Set, Setcc, (o0f(0x94).modo(0), NO), [WO], [BASE], "__R_____", (0, 1), N;
    SETG => "setg", X86Set, Setcc, (o0f(0x9F).modo(0), NO), [WO], [BASE], "RRR_____", (0, 1), N;
    SETGE => "setge", X86Set, Setcc, (o0f(0x9D).modo(0), NO), [WO], [BASE], "RR______", (0, 1), N;
    SETL => "setl", X86Set, Setcc, (o0f(0x9C).modo(0), NO), [WO], [BASE], "RR______", (0, 1), N;
    SETLE => "setle", X86Set, Setcc, (o0f(0x9E).modo(0), NO), [WO], [BASE], "RRR_____", (0, 1), N;
    SETNE => "setne", X86Set, Setcc, (o0f(0x95).modo(0), NO), [WO], [BASE], "__R_____", (0, 1), N;
    SETNO => "setno", X86Set, Setcc, (o0f(0x91).modo(0), NO), [WO], [BASE], "R_______", (0, 1), N;
    SETNP => "setnp", X86Set, Setcc, (o0f(0x9B).modo(0), NO), [WO], [BASE], "____R___", (0, 1), N;
    SETNS => "setns", X86Set, Setcc, (o0f(0x99).modo(0), NO), [WO], [BASE], "_R______", (0, 1), N;
    SETO => "seto", X86Set, Setcc, (o0f(0x90).modo(0), NO), [WO], [BASE], "R_______", (0, 1), N;
    SETP => "setp", X86Set, Setcc, (o0f(0x9A).modo(0), NO), [WO], [BASE], "____R___", (0, 1), N;
    SETS => "sets", X86Set, Setcc, (o0f(0x98).modo(0), NO), [WO], [BASE], "_R______", (0, 1), N;
    SFENCE => "sfence", X86Fence, NoOp, (o0f(0xAE).modo(7), NO), [VOLATILE], [MMX2], "________", (0, 0), N;
    SHL => "shl", X86Rot, Shift, (o(0xD2).modo(4), o(0xC0).modo(4)), [RW], [BASE], "WWWUWW__", (0, 0), N;
    SHLD => "shld", X86ShldShrd, ShldShrd, (o0f(0xA4), o0f(0xA5)), [RW], [BASE], "WWWUWW__", (0, 0), N;
    SHR => "shr", X86Rot, Shift, (o(0xD2).modo(5), o(0xC0).modo(5)), [RW], [BASE], "WWWUWW__", (0, 0), N;
    SHRD => "shrd", X86ShldShrd, ShldShrd, (o0f(0xAC), o0f(0xAD)), [RW], [BASE], "WWWUWW__", (0, 0), N;
    SHUFPD => "shufpd", ExtRmi, SimdRmI128, (o66(0xC6), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    SHUFPS => "shufps", ExtRmi, SimdRmI128, (o0f(0xC6), NO), [RW], [SSE], "________", (0, 0), SSE;
    SQRTPD => "sqrtpd", ExtRm, SimdRm128, (o66(0x51), NO), [WO], [SSE2], "________", (0, 16), SSE2;
    SQRTPS => "sqrtps", ExtRm, SimdRm128, (o0f(0x51), NO), [WO], [SSE], "________", (0, 16), SSE;
    SQRTSD => "sqrtsd", ExtRm, SimdRm64, (of2(0x51), NO), [WO], [SSE2], "________", (0, 8), SSE2;
    SQRTSS => "sqrtss", ExtRm, SimdRm32, (of3(0x51), NO), [WO], [SSE], "________", (0, 4), SSE;
    STC => "stc", X86Op, NoOp, (o(0xF9), NO), [], [BASE], "_____W__", (0, 0), N;
    STD => "std", X86Op, NoOp, (o(0xFD), NO), [], [BASE], "______W_", (0, 0), N;
    STI => "sti", X86Op, NoOp, (o(0xFB), NO), [VOLATILE], [BASE], "_______W", (0, 0), N;
    STOSB => "stosb", X86StrStos, Stos8, (o(0xAA), NO), [WO|SPECIAL], [BASE], "______R_", (0, 0), N;
    STOSD => "stosd", X86StrStos, Stos32, (o(0xAB), NO), [WO|SPECIAL], [BASE], "______R_", (0, 0), N;
    STOSQ => "stosq", X86StrStos, Stos64, (o(0xAB).w1(), NO), [WO|SPECIAL], [BASE], "______R_", (0, 0), N;
    STOSW => "stosw", X86StrStos, Stos16, (o66_1(0xAB), NO), [WO|SPECIAL], [BASE], "______R_", (0, 0), N;
    SUB => "sub", X86Arith, Arith, (o(0x28), o(0x80).modo(5)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWWWW__", (0, 0), N;
    SUBPD => "subpd", ExtRm, SimdRm128, (o66(0x5C), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    SUBPS => "subps", ExtRm, SimdRm128, (o0f(0x5C), NO), [RW], [SSE], "________", (0, 0), SSE;
    SUBSD => "subsd", ExtRm, SimdRm64, (of2(0x5C), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    SUBSS => "subss", ExtRm, SimdRm32, (of3(0x5C), NO), [RW], [SSE], "________", (0, 0), SSE;
    SYSCALL => "syscall", X86Op, NoOpX64, (o0f(0x05), NO), [FLOW|VOLATILE|SPECIAL], [BASE], "________", (0, 0), N;
    SYSENTER => "sysenter", X86Op, NoOp, (o0f(0x34), NO), [FLOW|VOLATILE|SPECIAL], [SEP], "________", (0, 0), N;
    SYSEXIT => "sysexit", X86Op, NoOp, (o0f(0x35), NO), [FLOW|VOLATILE|SPECIAL], [SEP], "________", (0, 0), N;
    SYSRET => "sysret", X86Op, NoOpX64, (o0f(0x07), NO), [FLOW|VOLATILE|SPECIAL], [BASE], "________", (0, 0), N;
    TEST => "test", X86Test, Test, (o(0x84), o(0xF6).modo(0)), [RO], [BASE], "WWWUWW__", (0, 0), N;
    UCOMISD => "ucomisd", ExtRm, SimdRm64, (o66(0x2E), NO), [RO], [SSE2], "WWWWWW__", (0, 0), SSE2;
    UCOMISS => "ucomiss", ExtRm, SimdRm32, (o0f(0x2E), NO), [RO], [SSE], "WWWWWW__", (0, 0), SSE;
    UD2 => "ud2", X86Op, NoOp, (o0f(0x0B), NO), [VOLATILE], [BASE], "________", (0, 0), N;
    UNPCKHPD => "unpckhpd", ExtRm, SimdRm128, (o66(0x15), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    UNPCKHPS => "unpckhps", ExtRm, SimdRm128, (o0f(0x15), NO), [RW], [SSE], "________", (0, 0), SSE;
    UNPCKLPD => "unpcklpd", ExtRm, SimdRm128, (o66(0x14), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    UNPCKLPS => "unpcklps", ExtRm, SimdRm128, (o0f(0x14), NO), [RW], [SSE], "________", (0, 0), SSE;
    VADDPD => "vaddpd", VexRvm, Avx3B64, (o66(0x58).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VADDPS => "vaddps", VexRvm, Avx3B32, (o0f(0x58).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VADDSD => "vaddsd", VexRvm, AvxScalar64, (of2(0x58).evex_w1().tuple(T1S, 3), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_ER|EVEX_SAE], [AVX|AVX512_F], "________", (0, 0), N;
    VADDSS => "vaddss", VexRvm, AvxScalar32, (of3(0x58).tuple(T1S, 2), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_ER|EVEX_SAE], [AVX|AVX512_F], "________", (0, 0), N;
    VANDNPD => "vandnpd", VexRvm, Avx3B64, (o66(0x55).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8], [AVX|AVX512_DQ|AVX512_VL], "________", (0, 0), N;
    VANDNPS => "vandnps", VexRvm, Avx3B32, (o0f(0x55).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4], [AVX|AVX512_DQ|AVX512_VL], "________", (0, 0), N;
    VANDPD => "vandpd", VexRvm, Avx3B64, (o66(0x54).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8], [AVX|AVX512_DQ|AVX512_VL], "________", (0, 0), N;
    VANDPS => "vandps", VexRvm, Avx3B32, (o0f(0x54).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4], [AVX|AVX512_DQ|AVX512_VL], "________", (0, 0), N;
    VCMPPD => "vcmppd", VexRvmi, Avx3I, (o66(0xC2), NO), [WO|VEX], [AVX], "________", (0, 0), N;
    VCMPPS => "vcmpps", VexRvmi, Avx3I, (o0f(0xC2), NO), [WO|VEX], [AVX], "________", (0, 0), N;
    VDIVPD => "vdivpd", VexRvm, Avx3B64, (o66(0x5E).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VDIVPS => "vdivps", VexRvm, Avx3B32, (o0f(0x5E).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VGATHERDPD => "vgatherdpd", VexGather, GatherDpd, (o66_38(0x92).w1(), NO), [RW|VEX|SPECIAL], [AVX2], "________", (0, 0), N;
    VGATHERDPS => "vgatherdps", VexGather, GatherDps, (o66_38(0x92), NO), [RW|VEX|SPECIAL], [AVX2], "________", (0, 0), N;
    VMAXPD => "vmaxpd", VexRvm, Avx3B64, (o66(0x5F).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMAXPS => "vmaxps", VexRvm, Avx3B32, (o0f(0x5F).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMINPD => "vminpd", VexRvm, Avx3B64, (o66(0x5D).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMINPS => "vminps", VexRvm, Avx3B32, (o0f(0x5D).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMOVAPD => "vmovapd", VexMov, AvxMov, (o66(0x28).evex_w1().tuple(FVM, 4), o66(0x29).evex_w1().tuple(FVM, 4)), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMOVAPS => "vmovaps", VexMov, AvxMov, (o0f(0x28).tuple(FVM, 4), o0f(0x29).tuple(FVM, 4)), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMOVD => "vmovd", VexMovd, VMovd, (o66(0x6E).tuple(T1S, 2), o66(0x7E).tuple(T1S, 2)), [WO|VEX|EVEX], [AVX|AVX512_F], "________", (0, 16), N;
    VMOVDQA => "vmovdqa", VexMov, AvxMovVl, (o66(0x6F), o66(0x7F)), [WO|VEX], [AVX], "________", (0, 0), N;
    VMOVDQU => "vmovdqu", VexMov, AvxMovVl, (of3(0x6F), of3(0x7F)), [WO|VEX], [AVX], "________", (0, 0), N;
    VMOVQ => "vmovq", VexMovq, VMovq, (of3(0x7E).evex_w1().tuple(T1S, 3), o66(0xD6).evex_w1().tuple(T1S, 3)), [WO|VEX|EVEX], [AVX|AVX512_F], "________", (0, 16), N;
    VMOVUPD => "vmovupd", VexMov, AvxMov, (o66(0x10).evex_w1().tuple(FVM, 4), o66(0x11).evex_w1().tuple(FVM, 4)), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMOVUPS => "vmovups", VexMov, AvxMov, (o0f(0x10).tuple(FVM, 4), o0f(0x11).tuple(FVM, 4)), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMULPD => "vmulpd", VexRvm, Avx3B64, (o66(0x59).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VMULPS => "vmulps", VexRvm, Avx3B32, (o0f(0x59).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VORPD => "vorpd", VexRvm, Avx3B64, (o66(0x56).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8], [AVX|AVX512_DQ|AVX512_VL], "________", (0, 0), N;
    VORPS => "vorps", VexRvm, Avx3B32, (o0f(0x56).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4], [AVX|AVX512_DQ|AVX512_VL], "________", (0, 0), N;
    VPADDB => "vpaddb", VexRvm, Avx3, (o66(0xFC).tuple(FVM, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX2|AVX512_BW|AVX512_VL], "________", (0, 0), N;
    VPADDD => "vpaddd", VexRvm, Avx3B32, (o66(0xFE).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4], [AVX|AVX2|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VPADDQ => "vpaddq", VexRvm, Avx3B64, (o66(0xD4).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8], [AVX|AVX2|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VPADDW => "vpaddw", VexRvm, Avx3, (o66(0xFD).tuple(FVM, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX2|AVX512_BW|AVX512_VL], "________", (0, 0), N;
    VPAND => "vpand", VexRvm, Avx3Vl, (o66(0xDB), NO), [WO|VEX], [AVX|AVX2], "________", (0, 0), N;
    VPANDN => "vpandn", VexRvm, Avx3Vl, (o66(0xDF), NO), [WO|VEX], [AVX|AVX2], "________", (0, 0), N;
    VPCMPEQB => "vpcmpeqb", VexRvm, Avx3Vl, (o66(0x74), NO), [WO|VEX], [AVX|AVX2], "________", (0, 0), N;
    VPCMPEQD => "vpcmpeqd", VexRvm, Avx3Vl, (o66(0x76), NO), [WO|VEX], [AVX|AVX2], "________", (0, 0), N;
    VPCMPEQW => "vpcmpeqw", VexRvm, Avx3Vl, (o66(0x75), NO), [WO|VEX], [AVX|AVX2], "________", (0, 0), N;
    VPMULLW => "vpmullw", VexRvm, Avx3, (o66(0xD5).tuple(FVM, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX2|AVX512_BW|AVX512_VL], "________", (0, 0), N;
    VPOR => "vpor", VexRvm, Avx3Vl, (o66(0xEB), NO), [WO|VEX], [AVX|AVX2], "________", (0, 0), N;
    VPSUBB => "vpsubb", VexRvm, Avx3, (o66(0xF8).tuple(FVM, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX2|AVX512_BW|AVX512_VL], "________", (0, 0), N;
    VPSUBD => "vpsubd", VexRvm, Avx3B32, (o66(0xFA).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4], [AVX|AVX2|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VPSUBQ => "vpsubq", VexRvm, Avx3B64, (o66(0xFB).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8], [AVX|AVX2|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VPSUBW => "vpsubw", VexRvm, Avx3, (o66(0xF9).tuple(FVM, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ], [AVX|AVX2|AVX512_BW|AVX512_VL], "________", (0, 0), N;
    VPXOR => "vpxor", VexRvm, Avx3Vl, (o66(0xEF), NO), [WO|VEX], [AVX|AVX2], "________", (0, 0), N;
    VSQRTPD => "vsqrtpd", VexRm, AvxRmB64, (o66(0x51).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VSQRTPS => "vsqrtps", VexRm, AvxRmB32, (o0f(0x51).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VSUBPD => "vsubpd", VexRvm, Avx3B64, (o66(0x5C).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VSUBPS => "vsubps", VexRvm, Avx3B32, (o0f(0x5C).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4|EVEX_ER|EVEX_SAE], [AVX|AVX512_F|AVX512_VL], "________", (0, 0), N;
    VXORPD => "vxorpd", VexRvm, Avx3B64, (o66(0x57).evex_w1().tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B8], [AVX|AVX512_DQ|AVX512_VL], "________", (0, 0), N;
    VXORPS => "vxorps", VexRvm, Avx3B32, (o0f(0x57).tuple(FV, 4), NO), [WO|VEX|EVEX|EVEX_K|EVEX_KZ|EVEX_B4], [AVX|AVX512_DQ|AVX512_VL], "________", (0, 0), N;
    VZEROALL => "vzeroall", VexOp, NoOp, (o0f(0x77).len(L256), NO), [VOLATILE|VEX|SPECIAL], [AVX], "________", (0, 0), N;
    VZEROUPPER => "vzeroupper", VexOp, NoOp, (o0f(0x77).len(L128), NO), [VOLATILE|VEX|SPECIAL], [AVX], "________", (0, 0), N;
    WBINVD => "wbinvd", X86Op, NoOp, (o0f(0x09), NO), [VOLATILE], [I486], "________", (0, 0), N;
    WRMSR => "wrmsr", X86Op, NoOp, (o0f(0x30), NO), [RO|VOLATILE|SPECIAL], [MSR], "________", (0, 0), N;
    XADD => "xadd", X86Xadd, Xadd, (o0f(0xC0), NO), [RW|XCHG|LOCK|XACQUIRE|XRELEASE], [I486], "WWWWWW__", (0, 0), N;
    XCHG => "xchg", X86Xchg, Xchg, (o(0x86), NO), [RW|XCHG|LOCK|XACQUIRE|XRELEASE], [BASE], "________", (0, 0), N;
    XOR => "xor", X86Arith, Arith, (o(0x30), o(0x80).modo(6)), [RW|LOCK|XACQUIRE|XRELEASE], [BASE], "WWWUWW__", (0, 0), N;
    XORPD => "xorpd", ExtRm, SimdRm128, (o66(0x57), NO), [RW], [SSE2], "________", (0, 0), SSE2;
    XORPS => "xorps", ExtRm, SimdRm128, (o0f(0x57), NO), [RW], [SSE], "________", (0, 0), SSE;
}

const fn build_table() -> [InstRecord; INST_COUNT] {
    let mut table = RAW;
    let mut i = 0;
    while i < INST_COUNT {
        table[i].name_offset = crate::name::NAME_OFFSETS[i];
        i += 1;
    }
    table
}

pub(crate) static INST_TABLE: [InstRecord; INST_COUNT] = build_table();

/// Number of instruction ids, the null id included.
#[must_use]
pub fn count() -> usize {
    INST_COUNT
}

/// The record of `id`, in constant time.
///
/// # Errors
///
/// [`Error::InvalidInstructionId`] when `id` is out of range.
pub fn record(id: InstId) -> Result<&'static InstRecord, Error> {
    INST_TABLE
        .get(id.index())
        .ok_or(Error::InvalidInstructionId)
}

/// Iterates every real instruction id (the null id excluded).
pub fn ids() -> impl Iterator<Item = InstId> {
    (1..INST_COUNT as u16).map(InstId::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::signature_row_count;

    #[test]
    fn null_record_is_empty() {
        let rec = record(InstId::NONE).unwrap();
        assert_eq!(rec.encoding(), EncodingKind::None);
        assert!(rec.opcode().is_none());
        assert_eq!(InstId::NONE.name(), "");
    }

    #[test]
    fn out_of_range_id_is_rejected() {
        let bogus = InstId::from_raw(u16::MAX);
        assert_eq!(record(bogus), Err(Error::InvalidInstructionId));
        assert!(InstId::from_u16(u16::MAX).is_none());
        assert!(InstId::from_u16(1).is_some());
    }

    #[test]
    fn signature_ranges_are_in_bounds() {
        let total = signature_row_count();
        for id in ids() {
            let rec = record(id).unwrap();
            assert!(
                rec.signature_group_index() + rec.signature_group_count() <= total,
                "{id}: signature range out of bounds"
            );
            assert_eq!(rec.signature_group_count(), rec.signatures().len());
        }
    }

    #[test]
    fn eflags_unpacking() {
        let adc = record(InstId::ADC).unwrap();
        assert_eq!(adc.eflags_effect(EFlag::O), FlagEffect::Written);
        assert_eq!(adc.eflags_effect(EFlag::C), FlagEffect::ReadWritten);
        assert_eq!(adc.eflags_effect(EFlag::D), FlagEffect::Unchanged);

        let cld = record(InstId::CLD).unwrap();
        assert_eq!(cld.eflags_effect(EFlag::D), FlagEffect::Written);

        let je = record(InstId::JE).unwrap();
        assert_eq!(je.eflags_effect(EFlag::Z), FlagEffect::Read);
    }

    #[test]
    fn families() {
        let fadd = record(InstId::FADD).unwrap();
        assert_eq!(fadd.family_kind(), FamilyKind::Fpu);
        assert_eq!(fadd.sse_generation(), None);

        let addps = record(InstId::ADDPS).unwrap();
        assert_eq!(addps.sse_generation(), Some(SseGeneration::Sse));
        let addpd = record(InstId::ADDPD).unwrap();
        assert_eq!(addpd.sse_generation(), Some(SseGeneration::Sse2));
    }

    #[test]
    fn evex_flags_line_up() {
        let vaddpd = record(InstId::VADDPD).unwrap();
        assert!(vaddpd.is_vex());
        assert!(vaddpd.is_evex());
        assert!(vaddpd.flags().contains(InstFlags::EVEX_B8));
        assert!(vaddpd.opcode().is_evex_w1());
        assert_eq!(vaddpd.opcode().tuple_type(), TupleType::Fv);

        let vpand = record(InstId::VPAND).unwrap();
        assert!(vpand.is_vex());
        assert!(!vpand.is_evex());
    }

    #[test]
    fn lock_flags() {
        assert!(record(InstId::ADD).unwrap().is_lockable());
        assert!(!record(InstId::CMP).unwrap().is_lockable());
        assert!(record(InstId::XCHG).unwrap().flags().contains(InstFlags::XCHG));
    }

    #[test]
    fn alt_opcode_is_kept_for_the_encoder() {
        let mov = record(InstId::MOV).unwrap();
        assert_eq!(mov.alt_opcode().byte(), 0xC6);
        assert_eq!(mov.alt_opcode().mod_ext(), Some(0));
        let shl = record(InstId::SHL).unwrap();
        assert_eq!(shl.alt_opcode().byte(), 0xC0);
    }
}
