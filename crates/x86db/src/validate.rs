//! Operand validation.
//!
//! [`validate`] decides whether an (architecture, instruction, options,
//! operands) combination is encodable, against the instruction table and the
//! per-architecture register data. It is a pure function: immutable tables
//! in, first error (or `Ok`) out, no allocation, stack storage only.
//!
//! The phases, in order:
//!
//! 1. preconditions (architecture family, id range);
//! 2. operand translation — each caller operand becomes an operand-signature
//!    row, while two aggregates accumulate (the union of operand flags and
//!    the set of referenced physical indices);
//! 3. cross-cutting architecture checks (64-bit registers in 32-bit mode,
//!    high-byte registers against REX-extended indices);
//! 4. signature matching over the instruction's group — exact count first,
//!    then the implicit-skipping pass;
//! 5. AVX-512 option checks (writemask, zeroing, broadcast, SAE/rounding).

use bitflags::bitflags;

use crate::error::Error;
use crate::instdb::{InstFlags, InstId, InstRecord, INST_TABLE};
use crate::operand::{Arch, Mem, Operand, Reg, RegType, REG_TYPE_COUNT};
use crate::signature::{ArchMask, InstSignature, MemFlags, OpFlags, OpSignature, OP_SIGNATURES};

bitflags! {
    /// Emission options attached to a single instruction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InstOptions: u32 {
        /// Force a REX prefix (x64 only).
        const REX = 1 << 0;
        /// Force the 3-byte VEX form when the 2-byte form would suffice.
        const VEX3 = 1 << 1;
        /// Force EVEX even when VEX would encode.
        const EVEX = 1 << 2;
        /// Caller-supplied REX.B (validation-transparent).
        const OPCODE_B = 1 << 3;
        /// Caller-supplied REX.X (validation-transparent).
        const OPCODE_X = 1 << 4;
        /// Caller-supplied REX.R (validation-transparent).
        const OPCODE_R = 1 << 5;
        /// Caller-supplied REX.W (validation-transparent).
        const OPCODE_W = 1 << 6;
        /// A writemask is attached as the extra operand.
        const KMASK = 1 << 7;
        /// The writemask zeroes instead of merging.
        const KZ = 1 << 8;
        /// Suppress all exceptions (EVEX).
        const SAE = 1 << 9;
        /// Embedded rounding (EVEX, implies SAE).
        const ER = 1 << 10;
        /// Broadcast the memory operand (`{1toX}`).
        const BROADCAST = 1 << 11;
    }
}

/// Per-architecture validation data: which physical indices each register
/// type can encode, and which types may address memory.
struct ArchData {
    reg_masks: [u32; REG_TYPE_COUNT],
    base_types: u32,
    index_types: u32,
}

const fn type_bit(t: RegType) -> u32 {
    1 << (t as u32)
}

const fn reg_masks(
    gpb_lo: u32,
    gp: u32,
    vec: u32,
    cr_dr: u32,
) -> [u32; REG_TYPE_COUNT] {
    let mut m = [0u32; REG_TYPE_COUNT];
    m[RegType::GpbLo as usize] = gpb_lo;
    m[RegType::GpbHi as usize] = 0x0000_00F0;
    m[RegType::Gpw as usize] = gp;
    m[RegType::Gpd as usize] = gp;
    // 64-bit ids always translate; 32-bit mode rejects the *type* later so
    // the caller sees the use-of-gpq error rather than a bad-index error.
    m[RegType::Gpq as usize] = 0x0000_FFFF;
    m[RegType::Mm as usize] = 0x0000_00FF;
    m[RegType::K as usize] = 0x0000_00FF;
    m[RegType::St as usize] = 0x0000_00FF;
    m[RegType::Seg as usize] = 0x0000_003F;
    m[RegType::Xmm as usize] = vec;
    m[RegType::Ymm as usize] = vec;
    m[RegType::Zmm as usize] = vec;
    m[RegType::Bnd as usize] = 0x0000_000F;
    m[RegType::Cr as usize] = cr_dr;
    m[RegType::Dr as usize] = cr_dr;
    m[RegType::Rip as usize] = 0x0000_0001;
    m
}

static X86_DATA: ArchData = ArchData {
    reg_masks: reg_masks(0x0000_000F, 0x0000_00FF, 0x0000_00FF, 0x0000_00FF),
    base_types: type_bit(RegType::Gpw) | type_bit(RegType::Gpd),
    index_types: type_bit(RegType::Gpw)
        | type_bit(RegType::Gpd)
        | type_bit(RegType::Xmm)
        | type_bit(RegType::Ymm)
        | type_bit(RegType::Zmm),
};

static X64_DATA: ArchData = ArchData {
    reg_masks: reg_masks(0x0000_FFFF, 0x0000_FFFF, 0xFFFF_FFFF, 0x0000_FFFF),
    base_types: type_bit(RegType::Gpd) | type_bit(RegType::Gpq) | type_bit(RegType::Rip),
    index_types: type_bit(RegType::Gpd)
        | type_bit(RegType::Gpq)
        | type_bit(RegType::Xmm)
        | type_bit(RegType::Ymm)
        | type_bit(RegType::Zmm),
};

fn reg_type_flag(t: RegType) -> OpFlags {
    match t {
        RegType::GpbLo => OpFlags::GPB_LO,
        RegType::GpbHi => OpFlags::GPB_HI,
        RegType::Gpw => OpFlags::GPW,
        RegType::Gpd => OpFlags::GPD,
        RegType::Gpq => OpFlags::GPQ,
        RegType::Seg => OpFlags::SEG,
        RegType::St => OpFlags::ST,
        RegType::Mm => OpFlags::MM,
        RegType::K => OpFlags::K,
        RegType::Xmm => OpFlags::XMM,
        RegType::Ymm => OpFlags::YMM,
        RegType::Zmm => OpFlags::ZMM,
        RegType::Bnd => OpFlags::BND,
        RegType::Cr => OpFlags::CR,
        RegType::Dr => OpFlags::DR,
        RegType::None | RegType::Rip => OpFlags::empty(),
    }
}

/// Sentinel for "any register satisfies a pinned-register row".
const ANY_REG: u32 = u32::MAX;

#[derive(Clone, Copy)]
struct TranslatedOp {
    flags: OpFlags,
    mem_flags: MemFlags,
    reg_id: u32,
}

impl TranslatedOp {
    const EMPTY: TranslatedOp = TranslatedOp {
        flags: OpFlags::empty(),
        mem_flags: MemFlags::empty(),
        reg_id: ANY_REG,
    };
}

struct Translation {
    ops: [TranslatedOp; 6],
    count: usize,
    combined_flags: OpFlags,
    combined_reg_mask: u32,
    /// Explicit size of the first memory operand in bytes, 0 when unsized.
    mem_size: u32,
    has_mem: bool,
}

fn check_phys(reg: Reg, data: &ArchData, err: Error) -> Result<(), Error> {
    if !reg.is_phys() {
        return Ok(());
    }
    let id = reg.id();
    let mask = data.reg_masks[reg.reg_type().index()];
    if id >= 32 || mask & (1 << id) == 0 {
        return Err(err);
    }
    Ok(())
}

fn translate_reg(
    reg: Reg,
    data: &ArchData,
    out: &mut Translation,
) -> Result<TranslatedOp, Error> {
    let flags = reg_type_flag(reg.reg_type());
    if flags.is_empty() {
        return Err(Error::InvalidRegType);
    }
    check_phys(reg, data, Error::InvalidPhysId)?;
    let reg_id = if reg.is_phys() {
        out.combined_reg_mask |= 1 << reg.id();
        reg.id()
    } else {
        ANY_REG
    };
    Ok(TranslatedOp {
        flags,
        mem_flags: MemFlags::empty(),
        reg_id,
    })
}

fn translate_mem(
    mem: &Mem,
    data: &ArchData,
    options: InstOptions,
    out: &mut Translation,
) -> Result<TranslatedOp, Error> {
    let mut flags = OpFlags::MEM;
    let mut mem_flags = MemFlags::empty();

    if let Some(base) = mem.base {
        if data.base_types & type_bit(base.reg_type()) == 0 {
            return Err(Error::InvalidAddress);
        }
        check_phys(base, data, Error::InvalidPhysId)?;
        if base.is_phys() {
            out.combined_reg_mask |= 1 << base.id();
        }
    }

    if let Some(index) = mem.index {
        let ty = index.reg_type();
        if data.index_types & type_bit(ty) == 0 {
            return Err(Error::InvalidAddress);
        }
        check_phys(index, data, Error::InvalidPhysId)?;
        if index.is_phys() {
            out.combined_reg_mask |= 1 << index.id();
        }
        match ty {
            RegType::Xmm => {
                flags |= OpFlags::VM;
                mem_flags |= MemFlags::VM32X | MemFlags::VM64X;
            }
            RegType::Ymm => {
                flags |= OpFlags::VM;
                mem_flags |= MemFlags::VM32Y | MemFlags::VM64Y;
            }
            RegType::Zmm => {
                flags |= OpFlags::VM;
                mem_flags |= MemFlags::VM32Z | MemFlags::VM64Z;
            }
            _ => {}
        }
    }

    let size = mem.size.map_or(0, |s| s.bytes());
    if !out.has_mem {
        out.has_mem = true;
        out.mem_size = size;
    }

    if options.contains(InstOptions::BROADCAST) {
        // The element size of a broadcast load is checked against the
        // instruction's declared element after matching, not here.
        mem_flags |= MemFlags::ANY;
    } else if size != 0 {
        mem_flags |= match size {
            1 => MemFlags::M8,
            2 => MemFlags::M16,
            4 => MemFlags::M32,
            6 => MemFlags::M48,
            8 => MemFlags::M64,
            10 => MemFlags::M80,
            16 => MemFlags::M128,
            32 => MemFlags::M256,
            _ => MemFlags::M512,
        };
    } else if !flags.contains(OpFlags::VM) {
        mem_flags |= MemFlags::ANY;
    }

    Ok(TranslatedOp {
        flags,
        mem_flags,
        reg_id: ANY_REG,
    })
}

fn translate(
    arch: Arch,
    options: InstOptions,
    operands: &[Operand],
    data: &ArchData,
) -> Result<Translation, Error> {
    let mut out = Translation {
        ops: [TranslatedOp::EMPTY; 6],
        count: 0,
        combined_flags: OpFlags::empty(),
        combined_reg_mask: 0,
        mem_size: 0,
        has_mem: false,
    };

    let mut ended = false;
    for operand in operands {
        if operand.is_none() {
            ended = true;
            continue;
        }
        if ended {
            return Err(Error::InvalidState);
        }
        if out.count == 6 {
            return Err(Error::InvalidInstruction);
        }
        let translated = match operand {
            Operand::Reg(reg) => translate_reg(*reg, data, &mut out)?,
            Operand::Mem(mem) => translate_mem(mem, data, options, &mut out)?,
            Operand::Imm(_) => TranslatedOp {
                flags: OpFlags::I4
                    | OpFlags::I8
                    | OpFlags::I16
                    | OpFlags::I32
                    | OpFlags::I64,
                mem_flags: MemFlags::empty(),
                reg_id: ANY_REG,
            },
            Operand::Label(_) => TranslatedOp {
                flags: OpFlags::REL8 | OpFlags::REL32,
                mem_flags: MemFlags::empty(),
                reg_id: ANY_REG,
            },
            Operand::None => unreachable!(),
        };
        out.combined_flags |= translated.flags;
        out.ops[out.count] = translated;
        out.count += 1;
    }

    match arch {
        Arch::X86 => {
            if out.combined_flags.contains(OpFlags::GPQ) {
                return Err(Error::InvalidUseOfGpq);
            }
        }
        _ => {
            // A high-byte register cannot be encoded next to anything that
            // needs REX; any index >= 8 does.
            if out.combined_flags.contains(OpFlags::GPB_HI)
                && out.combined_reg_mask & !0xFF != 0
            {
                return Err(Error::InvalidUseOfGpbHi);
            }
        }
    }

    Ok(out)
}

fn match_op(reference: &OpSignature, op: &TranslatedOp) -> bool {
    if (reference.op_flags & op.flags).is_empty() {
        return false;
    }
    if !op.mem_flags.is_empty() && (reference.mem_flags & op.mem_flags).is_empty() {
        return false;
    }
    if reference.reg_mask != 0 && op.reg_id != ANY_REG {
        if op.reg_id >= 8 || reference.reg_mask & (1 << op.reg_id) == 0 {
            return false;
        }
    }
    true
}

fn match_signature(sig: &InstSignature, t: &Translation) -> bool {
    let op_count = sig.op_count as usize;

    if op_count == t.count {
        for i in 0..op_count {
            if !match_op(&OP_SIGNATURES[sig.operands[i] as usize], &t.ops[i]) {
                return false;
            }
        }
        return true;
    }

    // The shortened form: implicit positions consume a reference slot but
    // no caller slot.
    if sig.implicit_count != 0 && op_count - (sig.implicit_count as usize) == t.count {
        let mut caller = 0;
        for i in 0..op_count {
            let reference = &OP_SIGNATURES[sig.operands[i] as usize];
            if reference.op_flags.contains(OpFlags::IMPLICIT) {
                continue;
            }
            if caller >= t.count || !match_op(reference, &t.ops[caller]) {
                return false;
            }
            caller += 1;
        }
        return caller == t.count;
    }

    false
}

fn check_avx512_options(
    record: &InstRecord,
    options: InstOptions,
    extra_operand: Option<&Operand>,
    operands: &[Operand],
    t: &Translation,
) -> Result<(), Error> {
    let flags = record.flags();

    if options.contains(InstOptions::KZ) && !options.contains(InstOptions::KMASK) {
        // Zeroing has no referent without a mask.
        return Err(Error::InvalidKZeroUse);
    }

    if options.contains(InstOptions::KMASK) {
        match extra_operand {
            Some(Operand::Reg(reg)) if reg.reg_type() == RegType::K => {}
            _ => return Err(Error::InvalidKMaskReg),
        }
        if !flags.contains(InstFlags::EVEX_K) {
            return Err(Error::InvalidKMaskUse);
        }
        if options.contains(InstOptions::KZ) && !flags.contains(InstFlags::EVEX_KZ) {
            return Err(Error::InvalidKZeroUse);
        }
    }

    if options.contains(InstOptions::BROADCAST) {
        if !t.has_mem {
            return Err(Error::InvalidBroadcast);
        }
        let element: u32 = if flags.contains(InstFlags::EVEX_B4) {
            4
        } else if flags.contains(InstFlags::EVEX_B8) {
            8
        } else {
            return Err(Error::InvalidBroadcast);
        };
        if t.mem_size != 0 && t.mem_size != element {
            return Err(Error::InvalidBroadcast);
        }
    }

    if options.intersects(InstOptions::SAE | InstOptions::ER) {
        // Both modifiers reuse the memory/length bits of the encoding, so
        // only register-to-register forms can carry them.
        if t.has_mem {
            return Err(Error::InvalidSaeOrEr);
        }
        if options.contains(InstOptions::ER) {
            if !flags.contains(InstFlags::EVEX_ER) {
                return Err(Error::InvalidSaeOrEr);
            }
            // Rounding on a vector instruction is only well-defined at the
            // 512-bit length, where L'L doubles as the rounding field.
            if flags.intersects(InstFlags::EVEX_B4 | InstFlags::EVEX_B8) {
                let zmm = operands.iter().take(2).any(|op| {
                    matches!(op, Operand::Reg(r) if r.reg_type() == RegType::Zmm)
                });
                if !zmm {
                    return Err(Error::InvalidSaeOrEr);
                }
            }
        } else if !flags.contains(InstFlags::EVEX_SAE) {
            return Err(Error::InvalidSaeOrEr);
        }
    }

    Ok(())
}

/// Validates one instruction against the database.
///
/// `extra_operand` carries the optional AVX-512 writemask register;
/// `operands` is the positional vector (at most six real operands, with no
/// gaps).
///
/// # Errors
///
/// The first failing check is reported; see [`Error`] for the catalogue.
pub fn validate(
    arch: Arch,
    inst_id: InstId,
    options: InstOptions,
    extra_operand: Option<&Operand>,
    operands: &[Operand],
) -> Result<(), Error> {
    if !arch.is_x86_family() {
        return Err(Error::InvalidArch);
    }
    let record = INST_TABLE
        .get(inst_id.index())
        .ok_or(Error::InvalidArgument)?;

    let data: &ArchData = if arch.is_64bit() { &X64_DATA } else { &X86_DATA };
    let arch_bit = if arch.is_64bit() {
        ArchMask::X64
    } else {
        ArchMask::X86
    };

    let translation = translate(arch, options, operands, data)?;

    let matched = record
        .signatures()
        .iter()
        .filter(|sig| sig.arch_mask.contains(arch_bit))
        .any(|sig| match_signature(sig, &translation));
    if !matched {
        return Err(Error::InvalidInstruction);
    }

    if options.intersects(
        InstOptions::KMASK
            | InstOptions::KZ
            | InstOptions::SAE
            | InstOptions::ER
            | InstOptions::BROADCAST,
    ) {
        check_avx512_options(record, options, extra_operand, operands, &translation)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::regs::*;
    use crate::operand::{dword_ptr, ptr, qword_ptr, Label};

    fn ok(arch: Arch, id: InstId, ops: &[Operand]) {
        assert_eq!(validate(arch, id, InstOptions::empty(), None, ops), Ok(()));
    }

    fn err(arch: Arch, id: InstId, ops: &[Operand], expected: Error) {
        assert_eq!(
            validate(arch, id, InstOptions::empty(), None, ops),
            Err(expected)
        );
    }

    #[test]
    fn arch_preconditions() {
        err(
            Arch::Aarch64,
            InstId::ADD,
            &[Operand::Reg(EAX), Operand::Reg(EDX)],
            Error::InvalidArch,
        );
        err(
            Arch::X64,
            InstId::from_raw(u16::MAX),
            &[],
            Error::InvalidArgument,
        );
    }

    #[test]
    fn operand_gap_is_rejected() {
        assert_eq!(
            validate(
                Arch::X64,
                InstId::ADD,
                InstOptions::empty(),
                None,
                &[Operand::Reg(EAX), Operand::None, Operand::Reg(EDX)],
            ),
            Err(Error::InvalidState)
        );
        // A trailing run of none operands is fine.
        assert_eq!(
            validate(
                Arch::X64,
                InstId::ADD,
                InstOptions::empty(),
                None,
                &[Operand::Reg(EAX), Operand::Reg(EDX), Operand::None, Operand::None],
            ),
            Ok(())
        );
    }

    #[test]
    fn width_mismatch_never_matches() {
        err(
            Arch::X64,
            InstId::CMP,
            &[Operand::Reg(RAX), Operand::Reg(AL)],
            Error::InvalidInstruction,
        );
        err(
            Arch::X64,
            InstId::ADD,
            &[Operand::Reg(AX), Operand::Reg(EDX)],
            Error::InvalidInstruction,
        );
    }

    #[test]
    fn gpq_needs_long_mode() {
        ok(Arch::X64, InstId::CMP, &[Operand::Reg(RAX), Operand::Reg(RDX)]);
        err(
            Arch::X86,
            InstId::CMP,
            &[Operand::Reg(RAX), Operand::Reg(RDX)],
            Error::InvalidUseOfGpq,
        );
    }

    #[test]
    fn high_byte_rex_conflict() {
        ok(Arch::X64, InstId::MOV, &[Operand::Reg(AH), Operand::Reg(BL)]);
        err(
            Arch::X64,
            InstId::MOV,
            &[Operand::Reg(AH), Operand::Reg(R9B)],
            Error::InvalidUseOfGpbHi,
        );
        // The same pair is fine with a low byte in place of AH.
        ok(Arch::X64, InstId::MOV, &[Operand::Reg(DL), Operand::Reg(R9B)]);
        // An extended base register forces REX just like an extended
        // register operand does.
        err(
            Arch::X64,
            InstId::MOV,
            &[Operand::Reg(AH), Operand::Mem(ptr(R8))],
            Error::InvalidUseOfGpbHi,
        );
    }

    #[test]
    fn virtual_ids_skip_phys_checks() {
        let v0 = Reg::new(RegType::Gpd, Reg::VIRT_ID_MIN);
        let v1 = Reg::new(RegType::Gpd, Reg::VIRT_ID_MIN + 1);
        ok(Arch::X86, InstId::ADD, &[Operand::Reg(v0), Operand::Reg(v1)]);
    }

    #[test]
    fn fixed_register_rows() {
        ok(Arch::X64, InstId::SHL, &[Operand::Reg(EAX), Operand::Reg(CL)]);
        err(
            Arch::X64,
            InstId::SHL,
            &[Operand::Reg(EAX), Operand::Reg(DL)],
            Error::InvalidInstruction,
        );
        ok(Arch::X86, InstId::IN, &[Operand::Reg(AL), Operand::Reg(DX)]);
        err(
            Arch::X86,
            InstId::IN,
            &[Operand::Reg(BL), Operand::Reg(DX)],
            Error::InvalidInstruction,
        );
    }

    #[test]
    fn implicit_rows_accept_both_forms() {
        ok(Arch::X64, InstId::LODSQ, &[]);
        err(Arch::X86, InstId::LODSQ, &[], Error::InvalidInstruction);
        ok(Arch::X86, InstId::LODSB, &[]);
        // cmpxchg validates with and without the implicit accumulator.
        ok(
            Arch::X64,
            InstId::CMPXCHG,
            &[Operand::Reg(RCX), Operand::Reg(RDX)],
        );
        ok(
            Arch::X64,
            InstId::CMPXCHG,
            &[Operand::Reg(RCX), Operand::Reg(RDX), Operand::Reg(RAX)],
        );
        err(
            Arch::X64,
            InstId::CMPXCHG,
            &[Operand::Reg(RCX), Operand::Reg(RDX), Operand::Reg(RBX)],
            Error::InvalidInstruction,
        );
    }

    #[test]
    fn memory_addressing_rules() {
        ok(
            Arch::X64,
            InstId::MOV,
            &[Operand::Reg(RAX), Operand::Mem(qword_ptr(RBX).index(RCX, 8))],
        );
        // A 16-bit base is not addressable in long mode.
        assert_eq!(
            validate(
                Arch::X64,
                InstId::MOV,
                InstOptions::empty(),
                None,
                &[Operand::Reg(EAX), Operand::Mem(dword_ptr(BX))],
            ),
            Err(Error::InvalidAddress)
        );
        // ... but is in 32-bit mode.
        ok(
            Arch::X86,
            InstId::MOV,
            &[Operand::Reg(AX), Operand::Mem(ptr(BX))],
        );
        // An FPU register can never address memory.
        assert_eq!(
            validate(
                Arch::X64,
                InstId::MOV,
                InstOptions::empty(),
                None,
                &[Operand::Reg(EAX), Operand::Mem(ptr(ST0))],
            ),
            Err(Error::InvalidAddress)
        );
    }

    #[test]
    fn gather_wants_a_vector_index() {
        let vm = ptr(RAX).index(XMM1, 4);
        ok(
            Arch::X64,
            InstId::VGATHERDPS,
            &[Operand::Reg(XMM0), Operand::Mem(vm), Operand::Reg(XMM2)],
        );
        err(
            Arch::X64,
            InstId::VGATHERDPS,
            &[
                Operand::Reg(XMM0),
                Operand::Mem(qword_ptr(RAX)),
                Operand::Reg(XMM2),
            ],
            Error::InvalidInstruction,
        );
    }

    #[test]
    fn labels_are_branch_targets() {
        ok(Arch::X64, InstId::JMP, &[Operand::Label(Label(0))]);
        ok(Arch::X86, InstId::JE, &[Operand::Label(Label(1))]);
        ok(Arch::X64, InstId::JECXZ, &[Operand::Label(Label(2))]);
        err(
            Arch::X64,
            InstId::JE,
            &[Operand::Reg(RAX)],
            Error::InvalidInstruction,
        );
    }
}
