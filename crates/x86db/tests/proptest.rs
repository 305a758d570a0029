//! Property-based tests using proptest.
//!
//! These check the database invariants across randomly generated inputs —
//! complementing the targeted integration tests and the libfuzzer targets.

use proptest::prelude::*;
use x86db::regs::*;
use x86db::{
    find_by_name, name_of, ptr, validate, Arch, InstId, InstOptions, Label, Mem, Operand, Reg,
    RegType,
};

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_arch() -> impl Strategy<Value = Arch> {
    prop_oneof![Just(Arch::X86), Just(Arch::X64)]
}

fn arb_reg_type() -> impl Strategy<Value = RegType> {
    prop::sample::select(vec![
        RegType::GpbLo,
        RegType::GpbHi,
        RegType::Gpw,
        RegType::Gpd,
        RegType::Gpq,
        RegType::Mm,
        RegType::K,
        RegType::St,
        RegType::Seg,
        RegType::Xmm,
        RegType::Ymm,
        RegType::Zmm,
        RegType::Cr,
        RegType::Dr,
    ])
}

fn arb_reg() -> impl Strategy<Value = Reg> {
    (arb_reg_type(), 0u32..40).prop_map(|(ty, id)| Reg::new(ty, id))
}

fn arb_mem() -> impl Strategy<Value = Mem> {
    (arb_reg(), any::<i32>()).prop_map(|(base, disp)| ptr(base).disp(i64::from(disp)))
}

fn arb_operand() -> impl Strategy<Value = Operand> {
    prop_oneof![
        Just(Operand::None),
        arb_reg().prop_map(Operand::Reg),
        arb_mem().prop_map(Operand::Mem),
        any::<i64>().prop_map(Operand::Imm),
        (0u32..16).prop_map(|l| Operand::Label(Label(l))),
    ]
}

fn arb_operands() -> impl Strategy<Value = Vec<Operand>> {
    prop::collection::vec(arb_operand(), 0..7)
}

fn arb_inst_id() -> impl Strategy<Value = InstId> {
    // Mostly in-range ids, with some garbage mixed in.
    prop_oneof![
        8 => (0u16..x86db::count() as u16).prop_map(InstId::from_raw),
        1 => any::<u16>().prop_map(InstId::from_raw),
    ]
}

fn arb_options() -> impl Strategy<Value = InstOptions> {
    any::<u16>().prop_map(|bits| InstOptions::from_bits_truncate(u32::from(bits)))
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn validate_never_panics(
        arch in arb_arch(),
        id in arb_inst_id(),
        options in arb_options(),
        ops in arb_operands(),
    ) {
        let extra = Operand::Reg(K1);
        let _ = validate(arch, id, options, None, &ops);
        let _ = validate(arch, id, options, Some(&extra), &ops);
    }

    #[test]
    fn validate_is_deterministic(
        arch in arb_arch(),
        id in arb_inst_id(),
        options in arb_options(),
        ops in arb_operands(),
    ) {
        let first = validate(arch, id, options, None, &ops);
        prop_assert_eq!(validate(arch, id, options, None, &ops), first);
    }

    #[test]
    fn lookup_never_panics(input in "\\PC{0,24}") {
        let _ = find_by_name(&input);
    }

    #[test]
    fn lookup_only_returns_real_ids(input in "[a-z0-9]{1,12}") {
        if let Ok(id) = find_by_name(&input) {
            prop_assert_eq!(name_of(id), input.as_str());
        }
    }

    #[test]
    fn valid_arith_pairs_validate(
        arch in arb_arch(),
        dst in 0u32..8,
        src in 0u32..8,
    ) {
        let ops = [
            Operand::Reg(Reg::new(RegType::Gpd, dst)),
            Operand::Reg(Reg::new(RegType::Gpd, src)),
        ];
        prop_assert_eq!(
            validate(arch, InstId::ADD, InstOptions::empty(), None, &ops),
            Ok(())
        );
    }

    #[test]
    fn name_round_trip_holds_for_random_ids(raw in 1u16..u16::MAX) {
        if let Some(id) = InstId::from_u16(raw) {
            let name = name_of(id);
            prop_assert_eq!(find_by_name(name), Ok(id));
        }
    }
}
