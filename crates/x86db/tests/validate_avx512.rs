//! AVX-512 option validation: writemask, zeroing, broadcast, SAE, rounding.

use x86db::regs::*;
use x86db::{
    dword_ptr, qword_ptr, validate, zmmword_ptr, Arch, Error, InstId, InstOptions, Operand,
};

const K: InstOptions = InstOptions::KMASK;

const ZMM3: [Operand; 3] = [Operand::Reg(ZMM0), Operand::Reg(ZMM1), Operand::Reg(ZMM2)];

#[test]
fn masked_form_is_accepted() {
    let extra = Operand::Reg(K1);
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VADDPD,
            K,
            Some(&extra),
            &ZMM3,
        ),
        Ok(())
    );
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VADDPD,
            K | InstOptions::KZ,
            Some(&extra),
            &ZMM3,
        ),
        Ok(())
    );
}

#[test]
fn zeroing_without_mask() {
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VADDPD,
            InstOptions::KZ,
            None,
            &ZMM3,
        ),
        Err(Error::InvalidKZeroUse)
    );
}

#[test]
fn mask_operand_must_be_a_k_register() {
    let bogus = Operand::Reg(XMM0);
    assert_eq!(
        validate(Arch::X64, InstId::VADDPD, K, Some(&bogus), &ZMM3),
        Err(Error::InvalidKMaskReg)
    );
    assert_eq!(
        validate(Arch::X64, InstId::VADDPD, K, None, &ZMM3),
        Err(Error::InvalidKMaskReg)
    );
}

#[test]
fn masking_requires_an_evex_form() {
    let extra = Operand::Reg(K1);
    let ops = [Operand::Reg(YMM0), Operand::Reg(YMM1), Operand::Reg(YMM2)];
    assert_eq!(
        validate(Arch::X64, InstId::VPAND, K, Some(&extra), &ops),
        Err(Error::InvalidKMaskUse)
    );
}

#[test]
fn broadcast_element_size_must_match() {
    // vaddpd broadcasts 8-byte elements; a dword load cannot feed it.
    let ops = [
        Operand::Reg(XMM0),
        Operand::Reg(XMM1),
        Operand::Mem(dword_ptr(EAX)),
    ];
    assert_eq!(
        validate(Arch::X86, InstId::VADDPD, InstOptions::BROADCAST, None, &ops),
        Err(Error::InvalidBroadcast)
    );

    let ops = [
        Operand::Reg(XMM0),
        Operand::Reg(XMM1),
        Operand::Mem(qword_ptr(EAX)),
    ];
    assert_eq!(
        validate(Arch::X86, InstId::VADDPD, InstOptions::BROADCAST, None, &ops),
        Ok(())
    );
}

#[test]
fn broadcast_needs_memory() {
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VADDPD,
            InstOptions::BROADCAST,
            None,
            &ZMM3,
        ),
        Err(Error::InvalidBroadcast)
    );
}

#[test]
fn broadcast_needs_a_declared_element() {
    // vpaddw has no broadcast form (word elements).
    let ops = [
        Operand::Reg(ZMM0),
        Operand::Reg(ZMM1),
        Operand::Mem(zmmword_ptr(RAX)),
    ];
    assert_eq!(
        validate(Arch::X64, InstId::VPADDW, InstOptions::BROADCAST, None, &ops),
        Err(Error::InvalidBroadcast)
    );
}

#[test]
fn unsized_broadcast_memory_is_accepted() {
    let ops = [
        Operand::Reg(ZMM0),
        Operand::Reg(ZMM1),
        Operand::Mem(x86db::ptr(RAX)),
    ];
    assert_eq!(
        validate(Arch::X64, InstId::VADDPD, InstOptions::BROADCAST, None, &ops),
        Ok(())
    );
}

#[test]
fn rounding_requires_a_512_bit_form() {
    let ops = [Operand::Reg(XMM0), Operand::Reg(XMM1), Operand::Reg(XMM2)];
    assert_eq!(
        validate(Arch::X86, InstId::VADDPD, InstOptions::ER, None, &ops),
        Err(Error::InvalidSaeOrEr)
    );
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VADDPD,
            InstOptions::ER,
            None,
            &ZMM3,
        ),
        Ok(())
    );
}

#[test]
fn scalar_rounding_has_no_length_requirement() {
    let ops = [Operand::Reg(XMM0), Operand::Reg(XMM1), Operand::Reg(XMM2)];
    assert_eq!(
        validate(Arch::X64, InstId::VADDSD, InstOptions::ER, None, &ops),
        Ok(())
    );
}

#[test]
fn rounding_and_sae_reject_memory() {
    let ops = [
        Operand::Reg(ZMM0),
        Operand::Reg(ZMM1),
        Operand::Mem(zmmword_ptr(RAX)),
    ];
    assert_eq!(
        validate(Arch::X64, InstId::VADDPD, InstOptions::ER, None, &ops),
        Err(Error::InvalidSaeOrEr)
    );
    assert_eq!(
        validate(Arch::X64, InstId::VADDPD, InstOptions::SAE, None, &ops),
        Err(Error::InvalidSaeOrEr)
    );
}

#[test]
fn sae_needs_a_declaring_instruction() {
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VMAXPD,
            InstOptions::SAE,
            None,
            &ZMM3,
        ),
        Ok(())
    );
    // Integer adds declare neither.
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VPADDD,
            InstOptions::SAE,
            None,
            &ZMM3,
        ),
        Err(Error::InvalidSaeOrEr)
    );
}

#[test]
fn er_implies_support_check() {
    // vmaxpd supports SAE but not embedded rounding.
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VMAXPD,
            InstOptions::ER,
            None,
            &ZMM3,
        ),
        Err(Error::InvalidSaeOrEr)
    );
}

#[test]
fn options_do_not_leak_into_plain_validation() {
    assert_eq!(
        validate(
            Arch::X64,
            InstId::VADDPD,
            InstOptions::empty(),
            None,
            &ZMM3,
        ),
        Ok(())
    );
}
