//! Operand model: registers, memory operands, immediates, and labels.
//!
//! Registers are an open `{type, id}` pair rather than a closed enum: the
//! validator must pass through *virtual* ids (>= [`Reg::VIRT_ID_MIN`]) that a
//! later register-allocation pass resolves, so the id space cannot be closed
//! over physical registers. Physical constants live in [`regs`].

use core::fmt;

/// Target architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arch {
    /// 32-bit x86 protected mode.
    X86,
    /// 64-bit x86 long mode.
    X64,
    /// ARMv8-A 64-bit (served by a different backend).
    Aarch64,
}

impl Arch {
    /// Whether this architecture belongs to the x86 family.
    #[must_use]
    pub fn is_x86_family(self) -> bool {
        matches!(self, Arch::X86 | Arch::X64)
    }

    /// Whether this is the 64-bit member of the x86 family.
    #[must_use]
    pub fn is_64bit(self) -> bool {
        matches!(self, Arch::X64)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::X86 => write!(f, "x86"),
            Arch::X64 => write!(f, "x86_64"),
            Arch::Aarch64 => write!(f, "AArch64"),
        }
    }
}

/// Register type (class plus access width where the class is width-split).
///
/// The discriminants are stable: architecture tables index by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RegType {
    /// Not a register.
    None = 0,
    /// 8-bit general purpose, low byte (AL, CL, ..., R15B; SPL-DIL need REX).
    GpbLo,
    /// 8-bit general purpose, high byte (AH, CH, DH, BH; REX-incompatible).
    GpbHi,
    /// 16-bit general purpose.
    Gpw,
    /// 32-bit general purpose.
    Gpd,
    /// 64-bit general purpose.
    Gpq,
    /// 64-bit MMX.
    Mm,
    /// AVX-512 opmask.
    K,
    /// 80-bit FPU stack register ST(i).
    St,
    /// Segment register.
    Seg,
    /// 128-bit SSE vector.
    Xmm,
    /// 256-bit AVX vector.
    Ymm,
    /// 512-bit AVX-512 vector.
    Zmm,
    /// MPX bound register.
    Bnd,
    /// Control register.
    Cr,
    /// Debug register.
    Dr,
    /// Instruction pointer (addressing only).
    Rip,
}

/// Number of register types; sizes the per-architecture index-mask tables.
pub(crate) const REG_TYPE_COUNT: usize = 17;

impl RegType {
    /// Size of one register of this type in bits, 0 when unsized (Seg/K
    /// width is model-specific, RIP is address-sized).
    #[must_use]
    pub fn size_bits(self) -> u16 {
        match self {
            RegType::GpbLo | RegType::GpbHi => 8,
            RegType::Gpw => 16,
            RegType::Gpd => 32,
            RegType::Gpq | RegType::Mm => 64,
            RegType::St => 80,
            RegType::Xmm | RegType::Bnd => 128,
            RegType::Ymm => 256,
            RegType::Zmm => 512,
            RegType::None | RegType::K | RegType::Seg | RegType::Cr | RegType::Dr | RegType::Rip => 0,
        }
    }

    /// Whether this is one of the general-purpose types.
    #[must_use]
    pub fn is_gp(self) -> bool {
        matches!(
            self,
            RegType::GpbLo | RegType::GpbHi | RegType::Gpw | RegType::Gpd | RegType::Gpq
        )
    }

    /// Whether this is one of the SIMD vector types.
    #[must_use]
    pub fn is_vec(self) -> bool {
        matches!(self, RegType::Xmm | RegType::Ymm | RegType::Zmm)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A register operand: type plus id.
///
/// Ids below [`Reg::VIRT_ID_MIN`] are physical indices and are checked
/// against the architecture's encodable-index mask; ids at or above it are
/// virtual and pass validation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reg {
    reg_type: RegType,
    id: u32,
}

impl Reg {
    /// First id that denotes a virtual (unallocated) register.
    pub const VIRT_ID_MIN: u32 = 0x100;

    /// Create a register operand from type and id.
    #[must_use]
    pub const fn new(reg_type: RegType, id: u32) -> Self {
        Self { reg_type, id }
    }

    /// Register type.
    #[must_use]
    pub const fn reg_type(self) -> RegType {
        self.reg_type
    }

    /// Register id (physical index or virtual id).
    #[must_use]
    pub const fn id(self) -> u32 {
        self.id
    }

    /// Whether the id is a physical index.
    #[must_use]
    pub const fn is_phys(self) -> bool {
        self.id < Self::VIRT_ID_MIN
    }

    /// Whether this is AH, CH, DH, or BH (incompatible with a REX prefix).
    #[must_use]
    pub fn is_high_byte(self) -> bool {
        self.reg_type == RegType::GpbHi
    }

    /// Register size in bits (see [`RegType::size_bits`]).
    #[must_use]
    pub fn size_bits(self) -> u16 {
        self.reg_type.size_bits()
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_phys() {
            return write!(f, "v{}", self.id);
        }
        let id = self.id as usize;
        match self.reg_type {
            RegType::None => write!(f, "<none>"),
            RegType::GpbLo => match id {
                0..=7 => f.write_str(["al", "cl", "dl", "bl", "spl", "bpl", "sil", "dil"][id]),
                _ => write!(f, "r{id}b"),
            },
            RegType::GpbHi => match id {
                4..=7 => f.write_str(["ah", "ch", "dh", "bh"][id - 4]),
                _ => write!(f, "<gpbhi{id}>"),
            },
            RegType::Gpw => match id {
                0..=7 => f.write_str(["ax", "cx", "dx", "bx", "sp", "bp", "si", "di"][id]),
                _ => write!(f, "r{id}w"),
            },
            RegType::Gpd => match id {
                0..=7 => f.write_str(["eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi"][id]),
                _ => write!(f, "r{id}d"),
            },
            RegType::Gpq => match id {
                0..=7 => f.write_str(["rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi"][id]),
                _ => write!(f, "r{id}"),
            },
            RegType::Mm => write!(f, "mm{id}"),
            RegType::K => write!(f, "k{id}"),
            RegType::St => write!(f, "st{id}"),
            RegType::Seg => match id {
                0..=5 => f.write_str(["es", "cs", "ss", "ds", "fs", "gs"][id]),
                _ => write!(f, "<seg{id}>"),
            },
            RegType::Xmm => write!(f, "xmm{id}"),
            RegType::Ymm => write!(f, "ymm{id}"),
            RegType::Zmm => write!(f, "zmm{id}"),
            RegType::Bnd => write!(f, "bnd{id}"),
            RegType::Cr => write!(f, "cr{id}"),
            RegType::Dr => write!(f, "dr{id}"),
            RegType::Rip => f.write_str("rip"),
        }
    }
}

/// Memory operand size qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperandSize {
    /// 8-bit (`byte ptr`).
    Byte,
    /// 16-bit (`word ptr`).
    Word,
    /// 32-bit (`dword ptr`).
    Dword,
    /// 48-bit far pointer (`fword ptr`).
    Fword,
    /// 64-bit (`qword ptr`).
    Qword,
    /// 80-bit extended float (`tbyte ptr`).
    Tbyte,
    /// 128-bit (`xmmword ptr`).
    Xmmword,
    /// 256-bit (`ymmword ptr`).
    Ymmword,
    /// 512-bit (`zmmword ptr`).
    Zmmword,
}

impl OperandSize {
    /// Size in bytes.
    #[must_use]
    pub fn bytes(self) -> u32 {
        match self {
            OperandSize::Byte => 1,
            OperandSize::Word => 2,
            OperandSize::Dword => 4,
            OperandSize::Fword => 6,
            OperandSize::Qword => 8,
            OperandSize::Tbyte => 10,
            OperandSize::Xmmword => 16,
            OperandSize::Ymmword => 32,
            OperandSize::Zmmword => 64,
        }
    }
}

impl fmt::Display for OperandSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperandSize::Byte => "byte",
            OperandSize::Word => "word",
            OperandSize::Dword => "dword",
            OperandSize::Fword => "fword",
            OperandSize::Qword => "qword",
            OperandSize::Tbyte => "tbyte",
            OperandSize::Xmmword => "xmmword",
            OperandSize::Ymmword => "ymmword",
            OperandSize::Zmmword => "zmmword",
        };
        f.write_str(s)
    }
}

/// A memory (indirect) operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mem {
    /// Size qualifier (`byte ptr`, `qword ptr`, ...) or `None` to leave the
    /// element size to the instruction.
    pub size: Option<OperandSize>,
    /// Base register (e.g. `rbp` in `[rbp+8]`).
    pub base: Option<Reg>,
    /// Index register; a vector register selects a gather/scatter form.
    pub index: Option<Reg>,
    /// SIB scale factor: 1, 2, 4, or 8.
    pub scale: u8,
    /// Constant displacement in bytes.
    pub disp: i64,
    /// Segment override, if any.
    pub segment: Option<Reg>,
}

impl Default for Mem {
    fn default() -> Self {
        Self {
            size: None,
            base: None,
            index: None,
            scale: 1,
            disp: 0,
            segment: None,
        }
    }
}

impl Mem {
    /// Attach an index register and scale.
    #[must_use]
    pub fn index(mut self, index: Reg, scale: u8) -> Self {
        self.index = Some(index);
        self.scale = scale;
        self
    }

    /// Attach a displacement.
    #[must_use]
    pub fn disp(mut self, disp: i64) -> Self {
        self.disp = disp;
        self
    }

    /// Attach a segment override.
    #[must_use]
    pub fn segment(mut self, segment: Reg) -> Self {
        self.segment = Some(segment);
        self
    }

    /// Attach an explicit size qualifier.
    #[must_use]
    pub fn size(mut self, size: OperandSize) -> Self {
        self.size = Some(size);
        self
    }
}

impl fmt::Display for Mem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(size) = self.size {
            write!(f, "{size} ptr ")?;
        }
        if let Some(seg) = self.segment {
            write!(f, "{seg}:")?;
        }
        f.write_str("[")?;
        let mut wrote = false;
        if let Some(base) = self.base {
            write!(f, "{base}")?;
            wrote = true;
        }
        if let Some(index) = self.index {
            if wrote {
                f.write_str("+")?;
            }
            write!(f, "{index}*{}", self.scale)?;
            wrote = true;
        }
        if self.disp != 0 || !wrote {
            if self.disp < 0 {
                write!(f, "-{:#x}", self.disp.unsigned_abs())?;
            } else {
                if wrote {
                    f.write_str("+")?;
                }
                write!(f, "{:#x}", self.disp)?;
            }
        }
        f.write_str("]")
    }
}

/// An unbound code label (relative branch target).
///
/// Label creation and binding live in the emitter layer; validation only
/// needs the operand kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label(pub u32);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// One positional instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Absent operand. The operand vector must be gap-free: once a `None`
    /// appears, every following slot must also be `None`.
    #[default]
    None,
    /// Register.
    Reg(Reg),
    /// Memory.
    Mem(Mem),
    /// Immediate.
    Imm(i64),
    /// Relative branch target.
    Label(Label),
}

impl Operand {
    /// Whether the operand is absent.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Operand::None)
    }

    /// The register, if this is a register operand.
    #[must_use]
    pub fn as_reg(&self) -> Option<Reg> {
        match self {
            Operand::Reg(r) => Some(*r),
            _ => None,
        }
    }
}

impl From<Reg> for Operand {
    fn from(r: Reg) -> Self {
        Operand::Reg(r)
    }
}

impl From<Mem> for Operand {
    fn from(m: Mem) -> Self {
        Operand::Mem(m)
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Imm(v)
    }
}

impl From<Label> for Operand {
    fn from(l: Label) -> Self {
        Operand::Label(l)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::None => f.write_str("<none>"),
            Operand::Reg(r) => write!(f, "{r}"),
            Operand::Mem(m) => write!(f, "{m}"),
            Operand::Imm(v) => {
                if *v < 0 {
                    write!(f, "-{:#x}", v.unsigned_abs())
                } else {
                    write!(f, "{:#x}", v)
                }
            }
            Operand::Label(l) => write!(f, "{l}"),
        }
    }
}

/// Memory operand with no qualifier; element size left to the instruction.
#[must_use]
pub fn ptr(base: Reg) -> Mem {
    Mem {
        base: Some(base),
        ..Mem::default()
    }
}

/// `byte ptr [base]`.
#[must_use]
pub fn byte_ptr(base: Reg) -> Mem {
    ptr(base).size(OperandSize::Byte)
}

/// `word ptr [base]`.
#[must_use]
pub fn word_ptr(base: Reg) -> Mem {
    ptr(base).size(OperandSize::Word)
}

/// `dword ptr [base]`.
#[must_use]
pub fn dword_ptr(base: Reg) -> Mem {
    ptr(base).size(OperandSize::Dword)
}

/// `qword ptr [base]`.
#[must_use]
pub fn qword_ptr(base: Reg) -> Mem {
    ptr(base).size(OperandSize::Qword)
}

/// `tbyte ptr [base]` (FPU extended precision).
#[must_use]
pub fn tbyte_ptr(base: Reg) -> Mem {
    ptr(base).size(OperandSize::Tbyte)
}

/// `xmmword ptr [base]`.
#[must_use]
pub fn xmmword_ptr(base: Reg) -> Mem {
    ptr(base).size(OperandSize::Xmmword)
}

/// `ymmword ptr [base]`.
#[must_use]
pub fn ymmword_ptr(base: Reg) -> Mem {
    ptr(base).size(OperandSize::Ymmword)
}

/// `zmmword ptr [base]`.
#[must_use]
pub fn zmmword_ptr(base: Reg) -> Mem {
    ptr(base).size(OperandSize::Zmmword)
}

/// Absolute memory operand (displacement only, no base).
#[must_use]
pub fn ptr_abs(disp: i64) -> Mem {
    Mem {
        disp,
        ..Mem::default()
    }
}

/// Physical register constants.
pub mod regs {
    use super::{Reg, RegType};

    macro_rules! reg_consts {
        ($ty:ident: $($name:ident = $id:expr),* $(,)?) => {
            $(
                #[doc = concat!("The `", stringify!($name), "` register.")]
                pub const $name: Reg = Reg::new(RegType::$ty, $id);
            )*
        };
    }

    reg_consts!(GpbLo:
        AL = 0, CL = 1, DL = 2, BL = 3, SPL = 4, BPL = 5, SIL = 6, DIL = 7,
        R8B = 8, R9B = 9, R10B = 10, R11B = 11, R12B = 12, R13B = 13, R14B = 14, R15B = 15,
    );
    reg_consts!(GpbHi: AH = 4, CH = 5, DH = 6, BH = 7);
    reg_consts!(Gpw:
        AX = 0, CX = 1, DX = 2, BX = 3, SP = 4, BP = 5, SI = 6, DI = 7,
        R8W = 8, R9W = 9, R10W = 10, R11W = 11, R12W = 12, R13W = 13, R14W = 14, R15W = 15,
    );
    reg_consts!(Gpd:
        EAX = 0, ECX = 1, EDX = 2, EBX = 3, ESP = 4, EBP = 5, ESI = 6, EDI = 7,
        R8D = 8, R9D = 9, R10D = 10, R11D = 11, R12D = 12, R13D = 13, R14D = 14, R15D = 15,
    );
    reg_consts!(Gpq:
        RAX = 0, RCX = 1, RDX = 2, RBX = 3, RSP = 4, RBP = 5, RSI = 6, RDI = 7,
        R8 = 8, R9 = 9, R10 = 10, R11 = 11, R12 = 12, R13 = 13, R14 = 14, R15 = 15,
    );
    reg_consts!(Mm:
        MM0 = 0, MM1 = 1, MM2 = 2, MM3 = 3, MM4 = 4, MM5 = 5, MM6 = 6, MM7 = 7,
    );
    reg_consts!(K:
        K0 = 0, K1 = 1, K2 = 2, K3 = 3, K4 = 4, K5 = 5, K6 = 6, K7 = 7,
    );
    reg_consts!(St:
        ST0 = 0, ST1 = 1, ST2 = 2, ST3 = 3, ST4 = 4, ST5 = 5, ST6 = 6, ST7 = 7,
    );
    reg_consts!(Seg: ES = 0, CS = 1, SS = 2, DS = 3, FS = 4, GS = 5);
    reg_consts!(Xmm:
        XMM0 = 0, XMM1 = 1, XMM2 = 2, XMM3 = 3, XMM4 = 4, XMM5 = 5, XMM6 = 6, XMM7 = 7,
        XMM8 = 8, XMM9 = 9, XMM10 = 10, XMM11 = 11, XMM12 = 12, XMM13 = 13, XMM14 = 14,
        XMM15 = 15, XMM16 = 16, XMM17 = 17, XMM18 = 18, XMM19 = 19, XMM20 = 20, XMM21 = 21,
        XMM22 = 22, XMM23 = 23, XMM24 = 24, XMM25 = 25, XMM26 = 26, XMM27 = 27, XMM28 = 28,
        XMM29 = 29, XMM30 = 30, XMM31 = 31,
    );
    reg_consts!(Ymm:
        YMM0 = 0, YMM1 = 1, YMM2 = 2, YMM3 = 3, YMM4 = 4, YMM5 = 5, YMM6 = 6, YMM7 = 7,
        YMM8 = 8, YMM9 = 9, YMM10 = 10, YMM11 = 11, YMM12 = 12, YMM13 = 13, YMM14 = 14,
        YMM15 = 15, YMM16 = 16, YMM17 = 17, YMM18 = 18, YMM19 = 19, YMM20 = 20, YMM21 = 21,
        YMM22 = 22, YMM23 = 23, YMM24 = 24, YMM25 = 25, YMM26 = 26, YMM27 = 27, YMM28 = 28,
        YMM29 = 29, YMM30 = 30, YMM31 = 31,
    );
    reg_consts!(Zmm:
        ZMM0 = 0, ZMM1 = 1, ZMM2 = 2, ZMM3 = 3, ZMM4 = 4, ZMM5 = 5, ZMM6 = 6, ZMM7 = 7,
        ZMM8 = 8, ZMM9 = 9, ZMM10 = 10, ZMM11 = 11, ZMM12 = 12, ZMM13 = 13, ZMM14 = 14,
        ZMM15 = 15, ZMM16 = 16, ZMM17 = 17, ZMM18 = 18, ZMM19 = 19, ZMM20 = 20, ZMM21 = 21,
        ZMM22 = 22, ZMM23 = 23, ZMM24 = 24, ZMM25 = 25, ZMM26 = 26, ZMM27 = 27, ZMM28 = 28,
        ZMM29 = 29, ZMM30 = 30, ZMM31 = 31,
    );
    reg_consts!(Bnd: BND0 = 0, BND1 = 1, BND2 = 2, BND3 = 3);
    reg_consts!(Cr:
        CR0 = 0, CR1 = 1, CR2 = 2, CR3 = 3, CR4 = 4, CR5 = 5, CR6 = 6, CR7 = 7,
        CR8 = 8, CR9 = 9, CR10 = 10, CR11 = 11, CR12 = 12, CR13 = 13, CR14 = 14, CR15 = 15,
    );
    reg_consts!(Dr:
        DR0 = 0, DR1 = 1, DR2 = 2, DR3 = 3, DR4 = 4, DR5 = 5, DR6 = 6, DR7 = 7,
    );
    reg_consts!(Rip: RIP = 0);
}
