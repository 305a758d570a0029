//! Operand and instruction signatures.
//!
//! Two parallel tables describe every legal operand tuple:
//!
//! - [`OP_SIGNATURES`] holds deduplicated per-operand rows — which register
//!   classes, memory sizes, and immediate widths one position accepts, plus
//!   an optional physical-index mask.
//! - Signature groups hold per-form rows referencing the operand rows by
//!   index, with an operand count, an implicit-operand count, and an
//!   architecture mask.
//!
//! Deduplication matters beyond memory: shapes like `xmm, xmm|m128` appear
//! hundreds of times, and collapsing equal rows to one identity lets tooling
//! compare operand polymorphism by index.

use bitflags::bitflags;

bitflags! {
    /// Operand-class flags of one signature row (and of one translated
    /// caller operand during validation).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OpFlags: u32 {
        /// 8-bit GP, low byte.
        const GPB_LO = 1 << 0;
        /// 8-bit GP, high byte (AH/CH/DH/BH).
        const GPB_HI = 1 << 1;
        /// 16-bit GP.
        const GPW = 1 << 2;
        /// 32-bit GP.
        const GPD = 1 << 3;
        /// 64-bit GP.
        const GPQ = 1 << 4;
        /// Segment register.
        const SEG = 1 << 5;
        /// FPU stack register.
        const ST = 1 << 6;
        /// MMX register.
        const MM = 1 << 7;
        /// Opmask register.
        const K = 1 << 8;
        /// 128-bit vector.
        const XMM = 1 << 9;
        /// 256-bit vector.
        const YMM = 1 << 10;
        /// 512-bit vector.
        const ZMM = 1 << 11;
        /// Bound register.
        const BND = 1 << 12;
        /// Control register.
        const CR = 1 << 13;
        /// Debug register.
        const DR = 1 << 14;
        /// Memory operand; element constraints in [`MemFlags`].
        const MEM = 1 << 15;
        /// Vector-index memory (gather/scatter).
        const VM = 1 << 16;
        /// 4-bit immediate.
        const I4 = 1 << 17;
        /// 8-bit immediate.
        const I8 = 1 << 18;
        /// 16-bit immediate.
        const I16 = 1 << 19;
        /// 32-bit immediate.
        const I32 = 1 << 20;
        /// 64-bit immediate.
        const I64 = 1 << 21;
        /// 8-bit relative displacement.
        const REL8 = 1 << 22;
        /// 32-bit relative displacement.
        const REL32 = 1 << 23;
        /// Implicit operand: matched positionally when present, skippable
        /// when the caller passes the shortened form.
        const IMPLICIT = 1 << 24;
    }
}

bitflags! {
    /// Memory-kind flags: permitted element sizes and vector-index shapes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemFlags: u16 {
        /// 8-bit element.
        const M8 = 1 << 0;
        /// 16-bit element.
        const M16 = 1 << 1;
        /// 32-bit element.
        const M32 = 1 << 2;
        /// 48-bit element (far pointer).
        const M48 = 1 << 3;
        /// 64-bit element.
        const M64 = 1 << 4;
        /// 80-bit element (FPU extended).
        const M80 = 1 << 5;
        /// 128-bit element.
        const M128 = 1 << 6;
        /// 256-bit element.
        const M256 = 1 << 7;
        /// 512-bit element.
        const M512 = 1 << 8;
        /// 1024-bit element.
        const M1024 = 1 << 9;
        /// 32-bit indices in an XMM index register.
        const VM32X = 1 << 10;
        /// 32-bit indices in a YMM index register.
        const VM32Y = 1 << 11;
        /// 32-bit indices in a ZMM index register.
        const VM32Z = 1 << 12;
        /// 64-bit indices in an XMM index register.
        const VM64X = 1 << 13;
        /// 64-bit indices in a YMM index register.
        const VM64Y = 1 << 14;
        /// 64-bit indices in a ZMM index register.
        const VM64Z = 1 << 15;

        /// Any element size (unsized memory operand).
        const ANY = Self::M8.bits() | Self::M16.bits() | Self::M32.bits()
            | Self::M48.bits() | Self::M64.bits() | Self::M80.bits()
            | Self::M128.bits() | Self::M256.bits() | Self::M512.bits()
            | Self::M1024.bits();
    }
}

bitflags! {
    /// Architectures a signature row is legal on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ArchMask: u8 {
        /// 32-bit x86.
        const X86 = 1 << 0;
        /// 64-bit x86.
        const X64 = 1 << 1;
        /// Both.
        const ANY = Self::X86.bits() | Self::X64.bits();
    }
}

/// One deduplicated operand-signature row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpSignature {
    /// Accepted operand classes.
    pub op_flags: OpFlags,
    /// Accepted memory kinds when [`OpFlags::MEM`] or [`OpFlags::VM`] is set.
    pub mem_flags: MemFlags,
    /// Bitmask over physical indices 0..8; zero accepts any register of the
    /// class. A one-bit mask pins a fixed register (AL, CL, DX, ST0, ...),
    /// a wider mask admits a subset (segment writes exclude CS).
    pub reg_mask: u8,
}

impl OpSignature {
    const NONE: OpSignature = OpSignature {
        op_flags: OpFlags::empty(),
        mem_flags: MemFlags::empty(),
        reg_mask: 0,
    };
}

/// One legal instruction form: operand-signature indices plus counts and the
/// architecture mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstSignature {
    /// Number of operands, implicit ones included.
    pub op_count: u8,
    /// How many of the operands are implicit (skippable on match).
    pub implicit_count: u8,
    /// Architectures this form encodes on.
    pub arch_mask: ArchMask,
    /// Indices into [`OP_SIGNATURES`]; slots past `op_count` are zero.
    pub operands: [u8; 6],
}

impl InstSignature {
    pub(crate) const fn new(arch_mask: ArchMask, implicit_count: u8, ops: &[u8]) -> Self {
        let mut operands = [0u8; 6];
        let mut i = 0;
        while i < ops.len() {
            operands[i] = ops[i];
            i += 1;
        }
        Self {
            op_count: ops.len() as u8,
            implicit_count,
            arch_mask,
            operands,
        }
    }

    /// Operand-signature row of position `i`.
    #[must_use]
    pub fn operand(&self, i: usize) -> &'static OpSignature {
        &OP_SIGNATURES[self.operands[i] as usize]
    }
}

macro_rules! of {
    () => { OpFlags::empty() };
    ($($f:ident)|+) => { OpFlags::from_bits_retain(0 $( | OpFlags::$f.bits() )+) };
}

macro_rules! mf {
    () => { MemFlags::empty() };
    ($($f:ident)|+) => { MemFlags::from_bits_retain(0 $( | MemFlags::$f.bits() )+) };
}

macro_rules! op_signatures {
    ($( $name:ident => ($flags:expr, $mem:expr, $mask:expr) ),* $(,)?) => {
        /// Index names for [`OP_SIGNATURES`].
        #[allow(dead_code, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy)]
        #[repr(u8)]
        pub(crate) enum OpSigId {
            /// The reserved all-zero row for "absent operand".
            None = 0,
            $($name),*
        }

        /// Deduplicated operand-signature rows. Row 0 is reserved for the
        /// absent operand and is the only all-zero row.
        pub const OP_SIGNATURES: &[OpSignature] = &[
            OpSignature::NONE,
            $(OpSignature { op_flags: $flags, mem_flags: $mem, reg_mask: $mask }),*
        ];
    };
}

op_signatures! {
    GpbLoHi => (of!(GPB_LO | GPB_HI), mf!(), 0),
    GpbLoHiMem8 => (of!(GPB_LO | GPB_HI | MEM), mf!(M8), 0),
    Gpw => (of!(GPW), mf!(), 0),
    GpwMem16 => (of!(GPW | MEM), mf!(M16), 0),
    Gpd => (of!(GPD), mf!(), 0),
    GpdMem32 => (of!(GPD | MEM), mf!(M32), 0),
    GpdMem16 => (of!(GPD | MEM), mf!(M16), 0),
    Gpq => (of!(GPQ), mf!(), 0),
    GpqMem64 => (of!(GPQ | MEM), mf!(M64), 0),
    GpwGpdGpqMem16 => (of!(GPW | GPD | GPQ | MEM), mf!(M16), 0),
    Mem8 => (of!(MEM), mf!(M8), 0),
    Mem16 => (of!(MEM), mf!(M16), 0),
    Mem32 => (of!(MEM), mf!(M32), 0),
    Mem64 => (of!(MEM), mf!(M64), 0),
    Mem80 => (of!(MEM), mf!(M80), 0),
    Mem128 => (of!(MEM), mf!(M128), 0),
    Mem256 => (of!(MEM), mf!(M256), 0),
    Mem512 => (of!(MEM), mf!(M512), 0),
    MemAny => (of!(MEM), mf!(ANY), 0),
    Imm8 => (of!(I8), mf!(), 0),
    Imm16 => (of!(I8 | I16), mf!(), 0),
    Imm32 => (of!(I8 | I32), mf!(), 0),
    Imm64 => (of!(I8 | I32 | I64), mf!(), 0),
    Rel => (of!(REL8 | REL32), mf!(), 0),
    Rel8 => (of!(REL8), mf!(), 0),
    Rel32 => (of!(REL32), mf!(), 0),
    Al => (of!(GPB_LO), mf!(), 0x01),
    Cl => (of!(GPB_LO), mf!(), 0x02),
    Ax => (of!(GPW), mf!(), 0x01),
    Dx => (of!(GPW), mf!(), 0x04),
    Eax => (of!(GPD), mf!(), 0x01),
    ImplAl => (of!(GPB_LO | IMPLICIT), mf!(), 0x01),
    ImplAx => (of!(GPW | IMPLICIT), mf!(), 0x01),
    ImplEax => (of!(GPD | IMPLICIT), mf!(), 0x01),
    ImplRax => (of!(GPQ | IMPLICIT), mf!(), 0x01),
    ImplMem8 => (of!(MEM | IMPLICIT), mf!(M8), 0),
    ImplMem16 => (of!(MEM | IMPLICIT), mf!(M16), 0),
    ImplMem32 => (of!(MEM | IMPLICIT), mf!(M32), 0),
    ImplMem64 => (of!(MEM | IMPLICIT), mf!(M64), 0),
    // MOV never takes CS: writing it is undefined at the ISA level and the
    // read direction goes through the same row.
    Sreg => (of!(SEG), mf!(), 0x3D),
    Cr => (of!(CR), mf!(), 0),
    Dr => (of!(DR), mf!(), 0),
    St => (of!(ST), mf!(), 0),
    St0 => (of!(ST), mf!(), 0x01),
    ImplSt0 => (of!(ST | IMPLICIT), mf!(), 0x01),
    ImplSt1 => (of!(ST | IMPLICIT), mf!(), 0x02),
    Mm => (of!(MM), mf!(), 0),
    MmMem64 => (of!(MM | MEM), mf!(M64), 0),
    Xmm => (of!(XMM), mf!(), 0),
    XmmMem32 => (of!(XMM | MEM), mf!(M32), 0),
    XmmMem64 => (of!(XMM | MEM), mf!(M64), 0),
    XmmMem128 => (of!(XMM | MEM), mf!(M128), 0),
    // Broadcast-capable memory positions also admit the element size
    // (`m128|m32bcst` in manual notation).
    XmmMem128B32 => (of!(XMM | MEM), mf!(M128 | M32), 0),
    XmmMem128B64 => (of!(XMM | MEM), mf!(M128 | M64), 0),
    Ymm => (of!(YMM), mf!(), 0),
    YmmMem256 => (of!(YMM | MEM), mf!(M256), 0),
    YmmMem256B32 => (of!(YMM | MEM), mf!(M256 | M32), 0),
    YmmMem256B64 => (of!(YMM | MEM), mf!(M256 | M64), 0),
    Zmm => (of!(ZMM), mf!(), 0),
    ZmmMem512 => (of!(ZMM | MEM), mf!(M512), 0),
    ZmmMem512B32 => (of!(ZMM | MEM), mf!(M512 | M32), 0),
    ZmmMem512B64 => (of!(ZMM | MEM), mf!(M512 | M64), 0),
    KReg => (of!(K), mf!(), 0),
    KMem8 => (of!(K | MEM), mf!(M8), 0),
    KMem16 => (of!(K | MEM), mf!(M16), 0),
    KMem32 => (of!(K | MEM), mf!(M32), 0),
    KMem64 => (of!(K | MEM), mf!(M64), 0),
    Vm32x => (of!(MEM | VM), mf!(VM32X), 0),
    Vm32y => (of!(MEM | VM), mf!(VM32Y), 0),
}

macro_rules! isig {
    ($arch:ident, $imp:expr, [$($op:ident),* $(,)?]) => {
        InstSignature::new(ArchMask::$arch, $imp, &[$(OpSigId::$op as u8),*])
    };
}

const ROWS_NO_OP: &[InstSignature] = &[isig!(ANY, 0, [])];
const ROWS_NO_OP_X86: &[InstSignature] = &[isig!(X86, 0, [])];
const ROWS_NO_OP_X64: &[InstSignature] = &[isig!(X64, 0, [])];

const ROWS_ARITH: &[InstSignature] = &[
    isig!(ANY, 0, [GpbLoHiMem8, GpbLoHi]),
    isig!(ANY, 0, [GpbLoHi, Mem8]),
    isig!(ANY, 0, [GpbLoHiMem8, Imm8]),
    isig!(ANY, 0, [GpwMem16, Gpw]),
    isig!(ANY, 0, [Gpw, Mem16]),
    isig!(ANY, 0, [GpwMem16, Imm16]),
    isig!(ANY, 0, [GpdMem32, Gpd]),
    isig!(ANY, 0, [Gpd, Mem32]),
    isig!(ANY, 0, [GpdMem32, Imm32]),
    isig!(X64, 0, [GpqMem64, Gpq]),
    isig!(X64, 0, [Gpq, Mem64]),
    isig!(X64, 0, [GpqMem64, Imm32]),
];

const ROWS_MOV: &[InstSignature] = &[
    isig!(ANY, 0, [GpbLoHiMem8, GpbLoHi]),
    isig!(ANY, 0, [GpbLoHi, Mem8]),
    isig!(ANY, 0, [GpwMem16, Gpw]),
    isig!(ANY, 0, [Gpw, Mem16]),
    isig!(ANY, 0, [GpdMem32, Gpd]),
    isig!(ANY, 0, [Gpd, Mem32]),
    isig!(X64, 0, [GpqMem64, Gpq]),
    isig!(X64, 0, [Gpq, Mem64]),
    isig!(ANY, 0, [GpbLoHiMem8, Imm8]),
    isig!(ANY, 0, [GpwMem16, Imm16]),
    isig!(ANY, 0, [GpdMem32, Imm32]),
    isig!(X64, 0, [Gpq, Imm64]),
    isig!(X64, 0, [GpqMem64, Imm32]),
    isig!(ANY, 0, [GpwGpdGpqMem16, Sreg]),
    isig!(ANY, 0, [Sreg, GpwGpdGpqMem16]),
    isig!(X86, 0, [Gpd, Cr]),
    isig!(X86, 0, [Cr, Gpd]),
    isig!(X64, 0, [Gpq, Cr]),
    isig!(X64, 0, [Cr, Gpq]),
    isig!(X86, 0, [Gpd, Dr]),
    isig!(X86, 0, [Dr, Gpd]),
    isig!(X64, 0, [Gpq, Dr]),
    isig!(X64, 0, [Dr, Gpq]),
];

const ROWS_MOVSX_MOVZX: &[InstSignature] = &[
    isig!(ANY, 0, [Gpw, GpbLoHiMem8]),
    isig!(ANY, 0, [Gpd, GpbLoHiMem8]),
    isig!(X64, 0, [Gpq, GpbLoHiMem8]),
    isig!(ANY, 0, [Gpd, GpwMem16]),
    isig!(X64, 0, [Gpq, GpwMem16]),
];

const ROWS_MOVSXD: &[InstSignature] = &[
    isig!(X64, 0, [Gpd, GpdMem32]),
    isig!(X64, 0, [Gpq, GpdMem32]),
];

const ROWS_LEA: &[InstSignature] = &[
    isig!(ANY, 0, [Gpw, MemAny]),
    isig!(ANY, 0, [Gpd, MemAny]),
    isig!(X64, 0, [Gpq, MemAny]),
];

const ROWS_SHIFT: &[InstSignature] = &[
    isig!(ANY, 0, [GpbLoHiMem8, Cl]),
    isig!(ANY, 0, [GpbLoHiMem8, Imm8]),
    isig!(ANY, 0, [GpwMem16, Cl]),
    isig!(ANY, 0, [GpwMem16, Imm8]),
    isig!(ANY, 0, [GpdMem32, Cl]),
    isig!(ANY, 0, [GpdMem32, Imm8]),
    isig!(X64, 0, [GpqMem64, Cl]),
    isig!(X64, 0, [GpqMem64, Imm8]),
];

const ROWS_SHLD_SHRD: &[InstSignature] = &[
    isig!(ANY, 0, [GpwMem16, Gpw, Imm8]),
    isig!(ANY, 0, [GpwMem16, Gpw, Cl]),
    isig!(ANY, 0, [GpdMem32, Gpd, Imm8]),
    isig!(ANY, 0, [GpdMem32, Gpd, Cl]),
    isig!(X64, 0, [GpqMem64, Gpq, Imm8]),
    isig!(X64, 0, [GpqMem64, Gpq, Cl]),
];

const ROWS_TEST: &[InstSignature] = &[
    isig!(ANY, 0, [GpbLoHiMem8, GpbLoHi]),
    isig!(ANY, 0, [GpbLoHiMem8, Imm8]),
    isig!(ANY, 0, [GpwMem16, Gpw]),
    isig!(ANY, 0, [GpwMem16, Imm16]),
    isig!(ANY, 0, [GpdMem32, Gpd]),
    isig!(ANY, 0, [GpdMem32, Imm32]),
    isig!(X64, 0, [GpqMem64, Gpq]),
    isig!(X64, 0, [GpqMem64, Imm32]),
];

const ROWS_RM: &[InstSignature] = &[
    isig!(ANY, 0, [GpbLoHiMem8]),
    isig!(ANY, 0, [GpwMem16]),
    isig!(ANY, 0, [GpdMem32]),
    isig!(X64, 0, [GpqMem64]),
];

const ROWS_IMUL: &[InstSignature] = &[
    isig!(ANY, 0, [GpbLoHiMem8]),
    isig!(ANY, 0, [GpwMem16]),
    isig!(ANY, 0, [GpdMem32]),
    isig!(X64, 0, [GpqMem64]),
    isig!(ANY, 0, [Gpw, GpwMem16]),
    isig!(ANY, 0, [Gpd, GpdMem32]),
    isig!(X64, 0, [Gpq, GpqMem64]),
    isig!(ANY, 0, [Gpw, GpwMem16, Imm16]),
    isig!(ANY, 0, [Gpd, GpdMem32, Imm32]),
    isig!(X64, 0, [Gpq, GpqMem64, Imm32]),
];

const ROWS_BSWAP: &[InstSignature] = &[isig!(ANY, 0, [Gpd]), isig!(X64, 0, [Gpq])];

const ROWS_BT: &[InstSignature] = &[
    isig!(ANY, 0, [GpwMem16, Gpw]),
    isig!(ANY, 0, [GpdMem32, Gpd]),
    isig!(X64, 0, [GpqMem64, Gpq]),
    isig!(ANY, 0, [GpwMem16, Imm8]),
    isig!(ANY, 0, [GpdMem32, Imm8]),
    isig!(X64, 0, [GpqMem64, Imm8]),
];

const ROWS_REG_RM: &[InstSignature] = &[
    isig!(ANY, 0, [Gpw, GpwMem16]),
    isig!(ANY, 0, [Gpd, GpdMem32]),
    isig!(X64, 0, [Gpq, GpqMem64]),
];

const ROWS_NOP: &[InstSignature] = &[
    isig!(ANY, 0, []),
    isig!(ANY, 0, [GpwMem16]),
    isig!(ANY, 0, [GpdMem32]),
    isig!(X64, 0, [GpqMem64]),
];

const ROWS_JCC: &[InstSignature] = &[isig!(ANY, 0, [Rel])];
const ROWS_REL8: &[InstSignature] = &[isig!(ANY, 0, [Rel8])];

const ROWS_JMP: &[InstSignature] = &[
    isig!(ANY, 0, [Rel]),
    isig!(X86, 0, [GpwMem16]),
    isig!(X86, 0, [GpdMem32]),
    isig!(X64, 0, [GpqMem64]),
];

const ROWS_CALL: &[InstSignature] = &[
    isig!(ANY, 0, [Rel32]),
    isig!(X86, 0, [GpdMem32]),
    isig!(X64, 0, [GpqMem64]),
];

const ROWS_RET: &[InstSignature] = &[isig!(ANY, 0, []), isig!(ANY, 0, [Imm16])];
const ROWS_INT: &[InstSignature] = &[isig!(ANY, 0, [Imm8])];
const ROWS_SETCC: &[InstSignature] = &[isig!(ANY, 0, [GpbLoHiMem8])];

const ROWS_XCHG: &[InstSignature] = &[
    isig!(ANY, 0, [GpbLoHiMem8, GpbLoHi]),
    isig!(ANY, 0, [GpbLoHi, Mem8]),
    isig!(ANY, 0, [GpwMem16, Gpw]),
    isig!(ANY, 0, [Gpw, Mem16]),
    isig!(ANY, 0, [GpdMem32, Gpd]),
    isig!(ANY, 0, [Gpd, Mem32]),
    isig!(X64, 0, [GpqMem64, Gpq]),
    isig!(X64, 0, [Gpq, Mem64]),
];

const ROWS_XADD: &[InstSignature] = &[
    isig!(ANY, 0, [GpbLoHiMem8, GpbLoHi]),
    isig!(ANY, 0, [GpwMem16, Gpw]),
    isig!(ANY, 0, [GpdMem32, Gpd]),
    isig!(X64, 0, [GpqMem64, Gpq]),
];

const ROWS_CMPXCHG: &[InstSignature] = &[
    isig!(ANY, 1, [GpbLoHiMem8, GpbLoHi, ImplAl]),
    isig!(ANY, 1, [GpwMem16, Gpw, ImplAx]),
    isig!(ANY, 1, [GpdMem32, Gpd, ImplEax]),
    isig!(X64, 1, [GpqMem64, Gpq, ImplRax]),
];

const ROWS_PUSH: &[InstSignature] = &[
    isig!(ANY, 0, [GpwMem16]),
    isig!(X86, 0, [GpdMem32]),
    isig!(X64, 0, [GpqMem64]),
    isig!(ANY, 0, [Imm32]),
];

const ROWS_POP: &[InstSignature] = &[
    isig!(ANY, 0, [GpwMem16]),
    isig!(X86, 0, [GpdMem32]),
    isig!(X64, 0, [GpqMem64]),
];

const ROWS_IN: &[InstSignature] = &[
    isig!(ANY, 0, [Al, Imm8]),
    isig!(ANY, 0, [Ax, Imm8]),
    isig!(ANY, 0, [Eax, Imm8]),
    isig!(ANY, 0, [Al, Dx]),
    isig!(ANY, 0, [Ax, Dx]),
    isig!(ANY, 0, [Eax, Dx]),
];

const ROWS_OUT: &[InstSignature] = &[
    isig!(ANY, 0, [Imm8, Al]),
    isig!(ANY, 0, [Imm8, Ax]),
    isig!(ANY, 0, [Imm8, Eax]),
    isig!(ANY, 0, [Dx, Al]),
    isig!(ANY, 0, [Dx, Ax]),
    isig!(ANY, 0, [Dx, Eax]),
];

const ROWS_ENTER: &[InstSignature] = &[isig!(ANY, 0, [Imm16, Imm8])];

const ROWS_LODS_8: &[InstSignature] = &[isig!(ANY, 2, [ImplAl, ImplMem8])];
const ROWS_LODS_16: &[InstSignature] = &[isig!(ANY, 2, [ImplAx, ImplMem16])];
const ROWS_LODS_32: &[InstSignature] = &[isig!(ANY, 2, [ImplEax, ImplMem32])];
const ROWS_LODS_64: &[InstSignature] = &[isig!(X64, 2, [ImplRax, ImplMem64])];
const ROWS_STOS_8: &[InstSignature] = &[isig!(ANY, 2, [ImplMem8, ImplAl])];
const ROWS_STOS_16: &[InstSignature] = &[isig!(ANY, 2, [ImplMem16, ImplAx])];
const ROWS_STOS_32: &[InstSignature] = &[isig!(ANY, 2, [ImplMem32, ImplEax])];
const ROWS_STOS_64: &[InstSignature] = &[isig!(X64, 2, [ImplMem64, ImplRax])];

const ROWS_FPU_ARITH: &[InstSignature] = &[
    isig!(ANY, 0, [St0, St]),
    isig!(ANY, 0, [St, St0]),
    isig!(ANY, 0, [Mem32]),
    isig!(ANY, 0, [Mem64]),
];

const ROWS_FPU_ARITH_P: &[InstSignature] = &[
    isig!(ANY, 2, [ImplSt1, ImplSt0]),
    isig!(ANY, 0, [St, St0]),
];

const ROWS_FPU_COM: &[InstSignature] = &[
    isig!(ANY, 0, []),
    isig!(ANY, 0, [St]),
    isig!(ANY, 0, [Mem32]),
    isig!(ANY, 0, [Mem64]),
];

const ROWS_FPU_UCOM: &[InstSignature] = &[isig!(ANY, 0, []), isig!(ANY, 0, [St])];

const ROWS_FPU_LD: &[InstSignature] = &[
    isig!(ANY, 0, [St]),
    isig!(ANY, 0, [Mem32]),
    isig!(ANY, 0, [Mem64]),
    isig!(ANY, 0, [Mem80]),
];

const ROWS_FPU_ST: &[InstSignature] = &[
    isig!(ANY, 0, [St]),
    isig!(ANY, 0, [Mem32]),
    isig!(ANY, 0, [Mem64]),
];

const ROWS_FPU_STP: &[InstSignature] = &[
    isig!(ANY, 0, [St]),
    isig!(ANY, 0, [Mem32]),
    isig!(ANY, 0, [Mem64]),
    isig!(ANY, 0, [Mem80]),
];

const ROWS_FPU_ILD: &[InstSignature] = &[
    isig!(ANY, 0, [Mem16]),
    isig!(ANY, 0, [Mem32]),
    isig!(ANY, 0, [Mem64]),
];

const ROWS_FPU_IST: &[InstSignature] = &[isig!(ANY, 0, [Mem16]), isig!(ANY, 0, [Mem32])];

const ROWS_FPU_ISTP: &[InstSignature] = &[
    isig!(ANY, 0, [Mem16]),
    isig!(ANY, 0, [Mem32]),
    isig!(ANY, 0, [Mem64]),
];

const ROWS_FPU_MEM16: &[InstSignature] = &[isig!(ANY, 0, [Mem16])];
const ROWS_FNSTSW: &[InstSignature] = &[isig!(ANY, 0, [Ax]), isig!(ANY, 0, [Mem16])];
const ROWS_FPU_XCH: &[InstSignature] = &[isig!(ANY, 0, []), isig!(ANY, 0, [St])];

const ROWS_MMX_SSE: &[InstSignature] = &[
    isig!(ANY, 0, [Mm, MmMem64]),
    isig!(ANY, 0, [Xmm, XmmMem128]),
];

const ROWS_SIMD_RM128: &[InstSignature] = &[isig!(ANY, 0, [Xmm, XmmMem128])];

const ROWS_SIMD_MOV128: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem128]),
    isig!(ANY, 0, [Mem128, Xmm]),
];

const ROWS_SIMD_RM32: &[InstSignature] = &[isig!(ANY, 0, [Xmm, XmmMem32])];
const ROWS_SIMD_RM64: &[InstSignature] = &[isig!(ANY, 0, [Xmm, XmmMem64])];

const ROWS_SIMD_MOV_SS: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem32]),
    isig!(ANY, 0, [Mem32, Xmm]),
];

const ROWS_SIMD_MOV_SD: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem64]),
    isig!(ANY, 0, [Mem64, Xmm]),
];

const ROWS_SIMD_RMI128: &[InstSignature] = &[isig!(ANY, 0, [Xmm, XmmMem128, Imm8])];
const ROWS_SIMD_RMI32: &[InstSignature] = &[isig!(ANY, 0, [Xmm, XmmMem32, Imm8])];
const ROWS_SIMD_RMI64: &[InstSignature] = &[isig!(ANY, 0, [Xmm, XmmMem64, Imm8])];

const ROWS_MOVD: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, GpdMem32]),
    isig!(ANY, 0, [GpdMem32, Xmm]),
    isig!(ANY, 0, [Mm, GpdMem32]),
    isig!(ANY, 0, [GpdMem32, Mm]),
];

const ROWS_MOVQ: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem64]),
    isig!(ANY, 0, [Mem64, Xmm]),
    isig!(X64, 0, [Xmm, Gpq]),
    isig!(X64, 0, [Gpq, Xmm]),
    isig!(ANY, 0, [Mm, MmMem64]),
    isig!(ANY, 0, [Mem64, Mm]),
    isig!(X64, 0, [Mm, Gpq]),
    isig!(X64, 0, [Gpq, Mm]),
];

const ROWS_MOVHL: &[InstSignature] = &[isig!(ANY, 0, [Xmm, Xmm])];

const ROWS_PEXTRW: &[InstSignature] = &[
    isig!(ANY, 0, [Gpd, Xmm, Imm8]),
    isig!(X64, 0, [Gpq, Xmm, Imm8]),
    isig!(ANY, 0, [Gpd, Mm, Imm8]),
    isig!(ANY, 0, [Mem16, Xmm, Imm8]),
];

const ROWS_PINSRW: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, GpdMem16, Imm8]),
    isig!(ANY, 0, [Mm, GpdMem16, Imm8]),
];

const ROWS_PMOVMSKB: &[InstSignature] = &[
    isig!(ANY, 0, [Gpd, Xmm]),
    isig!(X64, 0, [Gpq, Xmm]),
    isig!(ANY, 0, [Gpd, Mm]),
    isig!(X64, 0, [Gpq, Mm]),
];

const ROWS_MOVMSK: &[InstSignature] = &[isig!(ANY, 0, [Gpd, Xmm]), isig!(X64, 0, [Gpq, Xmm])];

const ROWS_SIMD_SHIFT: &[InstSignature] = &[
    isig!(ANY, 0, [Mm, MmMem64]),
    isig!(ANY, 0, [Mm, Imm8]),
    isig!(ANY, 0, [Xmm, XmmMem128]),
    isig!(ANY, 0, [Xmm, Imm8]),
];

const ROWS_CVT_SI2S: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, GpdMem32]),
    isig!(X64, 0, [Xmm, GpqMem64]),
];

const ROWS_CVT_S2SI_32: &[InstSignature] = &[
    isig!(ANY, 0, [Gpd, XmmMem32]),
    isig!(X64, 0, [Gpq, XmmMem32]),
];

const ROWS_CVT_S2SI_64: &[InstSignature] = &[
    isig!(ANY, 0, [Gpd, XmmMem64]),
    isig!(X64, 0, [Gpq, XmmMem64]),
];

const ROWS_PREFETCH: &[InstSignature] = &[isig!(ANY, 0, [Mem8])];

const ROWS_KMOV_B: &[InstSignature] = &[
    isig!(ANY, 0, [KReg, KMem8]),
    isig!(ANY, 0, [Mem8, KReg]),
    isig!(ANY, 0, [KReg, Gpd]),
    isig!(ANY, 0, [Gpd, KReg]),
];

const ROWS_KMOV_W: &[InstSignature] = &[
    isig!(ANY, 0, [KReg, KMem16]),
    isig!(ANY, 0, [Mem16, KReg]),
    isig!(ANY, 0, [KReg, Gpd]),
    isig!(ANY, 0, [Gpd, KReg]),
];

const ROWS_KMOV_D: &[InstSignature] = &[
    isig!(ANY, 0, [KReg, KMem32]),
    isig!(ANY, 0, [Mem32, KReg]),
    isig!(ANY, 0, [KReg, Gpd]),
    isig!(ANY, 0, [Gpd, KReg]),
];

const ROWS_KMOV_Q: &[InstSignature] = &[
    isig!(ANY, 0, [KReg, KMem64]),
    isig!(ANY, 0, [Mem64, KReg]),
    isig!(X64, 0, [KReg, Gpq]),
    isig!(X64, 0, [Gpq, KReg]),
];

const ROWS_KK: &[InstSignature] = &[isig!(ANY, 0, [KReg, KReg])];
const ROWS_KKK: &[InstSignature] = &[isig!(ANY, 0, [KReg, KReg, KReg])];

const ROWS_AVX3: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, Xmm, XmmMem128]),
    isig!(ANY, 0, [Ymm, Ymm, YmmMem256]),
    isig!(ANY, 0, [Zmm, Zmm, ZmmMem512]),
];

const ROWS_AVX3_B32: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, Xmm, XmmMem128B32]),
    isig!(ANY, 0, [Ymm, Ymm, YmmMem256B32]),
    isig!(ANY, 0, [Zmm, Zmm, ZmmMem512B32]),
];

const ROWS_AVX3_B64: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, Xmm, XmmMem128B64]),
    isig!(ANY, 0, [Ymm, Ymm, YmmMem256B64]),
    isig!(ANY, 0, [Zmm, Zmm, ZmmMem512B64]),
];

const ROWS_AVX3_VL: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, Xmm, XmmMem128]),
    isig!(ANY, 0, [Ymm, Ymm, YmmMem256]),
];

const ROWS_AVX3_I: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, Xmm, XmmMem128, Imm8]),
    isig!(ANY, 0, [Ymm, Ymm, YmmMem256, Imm8]),
];

const ROWS_AVX_RM_B32: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem128B32]),
    isig!(ANY, 0, [Ymm, YmmMem256B32]),
    isig!(ANY, 0, [Zmm, ZmmMem512B32]),
];

const ROWS_AVX_RM_B64: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem128B64]),
    isig!(ANY, 0, [Ymm, YmmMem256B64]),
    isig!(ANY, 0, [Zmm, ZmmMem512B64]),
];

const ROWS_AVX_MOV: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem128]),
    isig!(ANY, 0, [Mem128, Xmm]),
    isig!(ANY, 0, [Ymm, YmmMem256]),
    isig!(ANY, 0, [Mem256, Ymm]),
    isig!(ANY, 0, [Zmm, ZmmMem512]),
    isig!(ANY, 0, [Mem512, Zmm]),
];

const ROWS_AVX_MOV_VL: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem128]),
    isig!(ANY, 0, [Mem128, Xmm]),
    isig!(ANY, 0, [Ymm, YmmMem256]),
    isig!(ANY, 0, [Mem256, Ymm]),
];

const ROWS_AVX_SCALAR_32: &[InstSignature] = &[isig!(ANY, 0, [Xmm, Xmm, XmmMem32])];
const ROWS_AVX_SCALAR_64: &[InstSignature] = &[isig!(ANY, 0, [Xmm, Xmm, XmmMem64])];

const ROWS_VMOVD: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, GpdMem32]),
    isig!(ANY, 0, [GpdMem32, Xmm]),
];

const ROWS_VMOVQ: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, XmmMem64]),
    isig!(ANY, 0, [Mem64, Xmm]),
    isig!(X64, 0, [Xmm, Gpq]),
    isig!(X64, 0, [Gpq, Xmm]),
];

const ROWS_GATHER_DPS: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, Vm32x, Xmm]),
    isig!(ANY, 0, [Ymm, Vm32y, Ymm]),
];

const ROWS_GATHER_DPD: &[InstSignature] = &[
    isig!(ANY, 0, [Xmm, Vm32x, Xmm]),
    isig!(ANY, 0, [Ymm, Vm32x, Ymm]),
];

macro_rules! sig_groups {
    ($( $name:ident => $rows:ident ),* $(,)?) => {
        /// Signature-group selector stored in instruction records.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(u8)]
        pub(crate) enum SigGroup { $($name),* }

        /// One slice of legal forms per group, in [`SigGroup`] order.
        pub(crate) const SIG_GROUPS: &[&[InstSignature]] = &[$($rows),*];
    };
}

sig_groups! {
    NoOp => ROWS_NO_OP,
    NoOpX86 => ROWS_NO_OP_X86,
    NoOpX64 => ROWS_NO_OP_X64,
    Arith => ROWS_ARITH,
    Mov => ROWS_MOV,
    MovsxMovzx => ROWS_MOVSX_MOVZX,
    Movsxd => ROWS_MOVSXD,
    Lea => ROWS_LEA,
    Shift => ROWS_SHIFT,
    ShldShrd => ROWS_SHLD_SHRD,
    Test => ROWS_TEST,
    Rm => ROWS_RM,
    Imul => ROWS_IMUL,
    Bswap => ROWS_BSWAP,
    Bt => ROWS_BT,
    RegRm => ROWS_REG_RM,
    Nop => ROWS_NOP,
    Jcc => ROWS_JCC,
    Rel8 => ROWS_REL8,
    Jmp => ROWS_JMP,
    Call => ROWS_CALL,
    Ret => ROWS_RET,
    Int => ROWS_INT,
    Setcc => ROWS_SETCC,
    Xchg => ROWS_XCHG,
    Xadd => ROWS_XADD,
    Cmpxchg => ROWS_CMPXCHG,
    Push => ROWS_PUSH,
    Pop => ROWS_POP,
    In => ROWS_IN,
    Out => ROWS_OUT,
    Enter => ROWS_ENTER,
    Lods8 => ROWS_LODS_8,
    Lods16 => ROWS_LODS_16,
    Lods32 => ROWS_LODS_32,
    Lods64 => ROWS_LODS_64,
    Stos8 => ROWS_STOS_8,
    Stos16 => ROWS_STOS_16,
    Stos32 => ROWS_STOS_32,
    Stos64 => ROWS_STOS_64,
    FpuArith => ROWS_FPU_ARITH,
    FpuArithP => ROWS_FPU_ARITH_P,
    FpuCom => ROWS_FPU_COM,
    FpuUcom => ROWS_FPU_UCOM,
    FpuLd => ROWS_FPU_LD,
    FpuSt => ROWS_FPU_ST,
    FpuStp => ROWS_FPU_STP,
    FpuIld => ROWS_FPU_ILD,
    FpuIst => ROWS_FPU_IST,
    FpuIstp => ROWS_FPU_ISTP,
    FpuMem16 => ROWS_FPU_MEM16,
    Fnstsw => ROWS_FNSTSW,
    FpuXch => ROWS_FPU_XCH,
    MmxSse => ROWS_MMX_SSE,
    SimdRm128 => ROWS_SIMD_RM128,
    SimdMov128 => ROWS_SIMD_MOV128,
    SimdRm32 => ROWS_SIMD_RM32,
    SimdRm64 => ROWS_SIMD_RM64,
    SimdMovSs => ROWS_SIMD_MOV_SS,
    SimdMovSd => ROWS_SIMD_MOV_SD,
    SimdRmI128 => ROWS_SIMD_RMI128,
    SimdRmI32 => ROWS_SIMD_RMI32,
    SimdRmI64 => ROWS_SIMD_RMI64,
    Movd => ROWS_MOVD,
    Movq => ROWS_MOVQ,
    MovHl => ROWS_MOVHL,
    Pextrw => ROWS_PEXTRW,
    Pinsrw => ROWS_PINSRW,
    Pmovmskb => ROWS_PMOVMSKB,
    Movmsk => ROWS_MOVMSK,
    SimdShift => ROWS_SIMD_SHIFT,
    CvtSi2S => ROWS_CVT_SI2S,
    CvtS2Si32 => ROWS_CVT_S2SI_32,
    CvtS2Si64 => ROWS_CVT_S2SI_64,
    Prefetch => ROWS_PREFETCH,
    KmovB => ROWS_KMOV_B,
    KmovW => ROWS_KMOV_W,
    KmovD => ROWS_KMOV_D,
    KmovQ => ROWS_KMOV_Q,
    Kk => ROWS_KK,
    Kkk => ROWS_KKK,
    Avx3 => ROWS_AVX3,
    Avx3B32 => ROWS_AVX3_B32,
    Avx3B64 => ROWS_AVX3_B64,
    Avx3Vl => ROWS_AVX3_VL,
    Avx3I => ROWS_AVX3_I,
    AvxRmB32 => ROWS_AVX_RM_B32,
    AvxRmB64 => ROWS_AVX_RM_B64,
    AvxMov => ROWS_AVX_MOV,
    AvxMovVl => ROWS_AVX_MOV_VL,
    AvxScalar32 => ROWS_AVX_SCALAR_32,
    AvxScalar64 => ROWS_AVX_SCALAR_64,
    VMovd => ROWS_VMOVD,
    VMovq => ROWS_VMOVQ,
    GatherDps => ROWS_GATHER_DPS,
    GatherDpd => ROWS_GATHER_DPD,
}

/// Number of signature groups.
pub(crate) const SIG_GROUP_COUNT: usize = SIG_GROUPS.len();

const fn group_offsets() -> [u32; SIG_GROUP_COUNT + 1] {
    let mut out = [0u32; SIG_GROUP_COUNT + 1];
    let mut i = 0;
    while i < SIG_GROUP_COUNT {
        out[i + 1] = out[i] + SIG_GROUPS[i].len() as u32;
        i += 1;
    }
    out
}

/// Flat offset of each group in the virtual concatenation of all groups;
/// the last entry is the total number of signature rows.
pub(crate) const SIG_GROUP_OFFSETS: [u32; SIG_GROUP_COUNT + 1] = group_offsets();

/// Total number of instruction-signature rows across all groups.
#[must_use]
pub fn signature_row_count() -> usize {
    SIG_GROUP_OFFSETS[SIG_GROUP_COUNT] as usize
}

impl SigGroup {
    /// The group's forms.
    pub(crate) fn rows(self) -> &'static [InstSignature] {
        SIG_GROUPS[self as usize]
    }

    /// Offset of the group in the flat signature table.
    pub(crate) fn flat_index(self) -> u32 {
        SIG_GROUP_OFFSETS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_row_is_reserved() {
        let zero = &OP_SIGNATURES[0];
        assert!(zero.op_flags.is_empty());
        assert!(zero.mem_flags.is_empty());
        assert_eq!(zero.reg_mask, 0);
        for row in &OP_SIGNATURES[1..] {
            assert!(
                !(row.op_flags.is_empty() && row.mem_flags.is_empty()),
                "non-reserved row with empty flags"
            );
        }
    }

    #[test]
    fn operand_indices_in_bounds() {
        for group in SIG_GROUPS {
            for sig in *group {
                assert!(sig.op_count as usize <= 6);
                assert!(sig.implicit_count <= sig.op_count);
                for i in 0..sig.op_count as usize {
                    assert!((sig.operands[i] as usize) < OP_SIGNATURES.len());
                }
                for i in sig.op_count as usize..6 {
                    assert_eq!(sig.operands[i], 0, "padding must reference the zero row");
                }
            }
        }
    }

    #[test]
    fn offsets_are_monotonic() {
        for w in SIG_GROUP_OFFSETS.windows(2) {
            assert!(w[0] <= w[1]);
        }
        assert_eq!(
            signature_row_count(),
            SIG_GROUPS.iter().map(|g| g.len()).sum::<usize>()
        );
    }

    #[test]
    fn implicit_rows_mark_the_flag() {
        for group in SIG_GROUPS {
            for sig in *group {
                let marked = (0..sig.op_count as usize)
                    .filter(|&i| sig.operand(i).op_flags.contains(OpFlags::IMPLICIT))
                    .count();
                assert_eq!(
                    marked,
                    sig.implicit_count as usize,
                    "implicit_count must agree with IMPLICIT-flagged operands"
                );
            }
        }
    }
}
