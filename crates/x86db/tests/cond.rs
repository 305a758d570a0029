//! Condition-code helper integration tests.

use x86db::{
    cmovcc_of, jcc_of, name_of, record, reverse_cond, setcc_of, CondCode, EncodingKind, InstId,
};

#[test]
fn reverse_cond_is_an_involution() {
    for cond in CondCode::ALL {
        assert_eq!(reverse_cond(reverse_cond(cond)), cond, "{cond} must invert back");
    }
}

#[test]
fn reverse_cond_swaps_the_expected_pairs() {
    assert_eq!(reverse_cond(CondCode::O), CondCode::No);
    assert_eq!(reverse_cond(CondCode::B), CondCode::Ae);
    assert_eq!(reverse_cond(CondCode::E), CondCode::Ne);
    assert_eq!(reverse_cond(CondCode::L), CondCode::Ge);
    assert_eq!(reverse_cond(CondCode::Le), CondCode::G);
    assert_eq!(
        reverse_cond(CondCode::FpuUnordered),
        CondCode::FpuNotUnordered
    );
}

#[test]
fn families_map_to_their_encoding_kinds() {
    for cond in CondCode::ALL {
        let jcc = record(jcc_of(cond)).unwrap();
        assert_eq!(jcc.encoding(), EncodingKind::X86Jcc);
        let setcc = record(setcc_of(cond)).unwrap();
        assert_eq!(setcc.encoding(), EncodingKind::X86Set);
        let cmovcc = record(cmovcc_of(cond)).unwrap();
        assert_eq!(cmovcc.encoding(), EncodingKind::X86Cmov);
    }
}

#[test]
fn family_names_carry_the_condition_suffix() {
    for cond in CondCode::ALL {
        let suffix = cond.to_string();
        assert_eq!(name_of(jcc_of(cond)), format!("j{suffix}"));
        assert_eq!(name_of(setcc_of(cond)), format!("set{suffix}"));
        assert_eq!(name_of(cmovcc_of(cond)), format!("cmov{suffix}"));
    }
}

#[test]
fn spot_check_the_maps() {
    assert_eq!(jcc_of(CondCode::E), InstId::JE);
    assert_eq!(jcc_of(CondCode::G), InstId::JG);
    assert_eq!(setcc_of(CondCode::Be), InstId::SETBE);
    assert_eq!(cmovcc_of(CondCode::Ns), InstId::CMOVNS);
}
