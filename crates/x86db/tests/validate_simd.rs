//! Validation of FPU, MMX, SSE, and AVX forms.

use x86db::regs::*;
use x86db::{
    dword_ptr, ptr, qword_ptr, validate, xmmword_ptr, Arch, Error, InstId, InstOptions, Operand,
};

fn check(arch: Arch, id: InstId, ops: &[Operand]) -> Result<(), Error> {
    validate(arch, id, InstOptions::empty(), None, ops)
}

#[test]
fn fadd_st0_st7() {
    assert_eq!(
        check(Arch::X86, InstId::FADD, &[Operand::Reg(ST0), Operand::Reg(ST7)]),
        Ok(())
    );
}

#[test]
fn fadd_rejects_gp_operands() {
    assert_eq!(
        check(Arch::X86, InstId::FADD, &[Operand::Reg(ST0), Operand::Reg(EAX)]),
        Err(Error::InvalidInstruction)
    );
}

#[test]
fn fadd_memory_forms() {
    assert_eq!(
        check(Arch::X86, InstId::FADD, &[Operand::Mem(dword_ptr(EAX))]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X86, InstId::FADD, &[Operand::Mem(qword_ptr(EAX))]),
        Ok(())
    );
    // The second argument of the register form is pinned to st0.
    assert_eq!(
        check(Arch::X86, InstId::FADD, &[Operand::Reg(ST3), Operand::Reg(ST0)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X86, InstId::FADD, &[Operand::Reg(ST3), Operand::Reg(ST1)]),
        Err(Error::InvalidInstruction)
    );
}

#[test]
fn faddp_shortened_form() {
    assert_eq!(check(Arch::X86, InstId::FADDP, &[]), Ok(()));
    assert_eq!(
        check(Arch::X86, InstId::FADDP, &[Operand::Reg(ST3), Operand::Reg(ST0)]),
        Ok(())
    );
}

#[test]
fn pand_xmm() {
    assert_eq!(
        check(Arch::X86, InstId::PAND, &[Operand::Reg(XMM0), Operand::Reg(XMM1)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X64, InstId::PAND, &[Operand::Reg(XMM8), Operand::Reg(XMM9)]),
        Ok(())
    );
}

#[test]
fn pand_xmm8_needs_long_mode() {
    assert_eq!(
        check(Arch::X86, InstId::PAND, &[Operand::Reg(XMM8), Operand::Reg(XMM9)]),
        Err(Error::InvalidPhysId)
    );
}

#[test]
fn pand_mmx_form() {
    assert_eq!(
        check(Arch::X86, InstId::PAND, &[Operand::Reg(MM0), Operand::Reg(MM5)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X86, InstId::PAND, &[Operand::Reg(MM0), Operand::Reg(XMM1)]),
        Err(Error::InvalidInstruction)
    );
}

#[test]
fn vpaddw_zmm_works_in_32_bit_mode() {
    assert_eq!(
        check(
            Arch::X86,
            InstId::VPADDW,
            &[Operand::Reg(ZMM0), Operand::Reg(ZMM1), Operand::Reg(ZMM2)],
        ),
        Ok(())
    );
}

#[test]
fn vector_lengths_must_agree() {
    assert_eq!(
        check(
            Arch::X64,
            InstId::VADDPD,
            &[Operand::Reg(YMM0), Operand::Reg(YMM1), Operand::Reg(XMM2)],
        ),
        Err(Error::InvalidInstruction)
    );
}

#[test]
fn evex_only_registers_require_long_mode() {
    assert_eq!(
        check(
            Arch::X64,
            InstId::VADDPD,
            &[Operand::Reg(ZMM0), Operand::Reg(ZMM17), Operand::Reg(ZMM31)],
        ),
        Ok(())
    );
    assert_eq!(
        check(
            Arch::X86,
            InstId::VADDPD,
            &[Operand::Reg(ZMM0), Operand::Reg(ZMM17), Operand::Reg(ZMM1)],
        ),
        Err(Error::InvalidPhysId)
    );
}

#[test]
fn vex_only_forms_have_no_zmm_row() {
    assert_eq!(
        check(
            Arch::X64,
            InstId::VPAND,
            &[Operand::Reg(YMM0), Operand::Reg(YMM1), Operand::Reg(YMM2)],
        ),
        Ok(())
    );
    assert_eq!(
        check(
            Arch::X64,
            InstId::VPAND,
            &[Operand::Reg(ZMM0), Operand::Reg(ZMM1), Operand::Reg(ZMM2)],
        ),
        Err(Error::InvalidInstruction)
    );
}

#[test]
fn sse_memory_sizes_are_checked() {
    assert_eq!(
        check(
            Arch::X64,
            InstId::ADDPS,
            &[Operand::Reg(XMM0), Operand::Mem(xmmword_ptr(RAX))],
        ),
        Ok(())
    );
    assert_eq!(
        check(
            Arch::X64,
            InstId::ADDPS,
            &[Operand::Reg(XMM0), Operand::Mem(dword_ptr(RAX))],
        ),
        Err(Error::InvalidInstruction)
    );
    // Unsized memory matches any declared width.
    assert_eq!(
        check(
            Arch::X64,
            InstId::ADDPS,
            &[Operand::Reg(XMM0), Operand::Mem(ptr(RAX))],
        ),
        Ok(())
    );
    assert_eq!(
        check(
            Arch::X64,
            InstId::ADDSS,
            &[Operand::Reg(XMM0), Operand::Mem(dword_ptr(RAX))],
        ),
        Ok(())
    );
}

#[test]
fn movd_movq_crossings() {
    assert_eq!(
        check(Arch::X86, InstId::MOVD, &[Operand::Reg(XMM3), Operand::Reg(EAX)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X86, InstId::MOVD, &[Operand::Reg(MM1), Operand::Reg(EAX)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X64, InstId::MOVQ, &[Operand::Reg(XMM3), Operand::Reg(RAX)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X86, InstId::MOVQ, &[Operand::Reg(XMM3), Operand::Reg(EAX)]),
        Err(Error::InvalidInstruction)
    );
}

#[test]
fn pextrw_pinsrw() {
    assert_eq!(
        check(
            Arch::X64,
            InstId::PEXTRW,
            &[Operand::Reg(EAX), Operand::Reg(XMM2), Operand::Imm(3)],
        ),
        Ok(())
    );
    assert_eq!(
        check(
            Arch::X64,
            InstId::PINSRW,
            &[Operand::Reg(XMM2), Operand::Reg(EAX), Operand::Imm(3)],
        ),
        Ok(())
    );
    assert_eq!(
        check(
            Arch::X64,
            InstId::PEXTRW,
            &[Operand::Reg(EAX), Operand::Reg(XMM2)],
        ),
        Err(Error::InvalidInstruction)
    );
}

#[test]
fn simd_shift_forms() {
    assert_eq!(
        check(Arch::X64, InstId::PSLLW, &[Operand::Reg(XMM0), Operand::Imm(4)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X64, InstId::PSLLW, &[Operand::Reg(XMM0), Operand::Reg(XMM1)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X64, InstId::PSLLW, &[Operand::Reg(MM0), Operand::Imm(4)]),
        Ok(())
    );
}

#[test]
fn kmov_forms() {
    assert_eq!(
        check(Arch::X64, InstId::KMOVW, &[Operand::Reg(K1), Operand::Reg(K2)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X64, InstId::KMOVW, &[Operand::Reg(K1), Operand::Reg(EAX)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X64, InstId::KMOVQ, &[Operand::Reg(K1), Operand::Reg(RAX)]),
        Ok(())
    );
    assert_eq!(
        check(Arch::X86, InstId::KMOVQ, &[Operand::Reg(K1), Operand::Reg(RAX)]),
        Err(Error::InvalidUseOfGpq)
    );
    assert_eq!(
        check(
            Arch::X64,
            InstId::KANDW,
            &[Operand::Reg(K1), Operand::Reg(K2), Operand::Reg(K3)],
        ),
        Ok(())
    );
}
