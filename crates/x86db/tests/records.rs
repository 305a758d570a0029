//! Instruction-record invariants over the whole table.

use x86db::signature::signature_row_count;
use x86db::{
    ids, record, CpuFeatures, EncodingKind, Error, InstFlags, InstId, OpFlags, OP_SIGNATURES,
};

#[test]
fn every_signature_range_is_in_bounds() {
    let total = signature_row_count();
    for id in ids() {
        let rec = record(id).unwrap();
        assert!(
            rec.signature_group_index() + rec.signature_group_count() <= total,
            "{id}: signature range exceeds the table"
        );
    }
}

#[test]
fn out_of_range_record_lookup() {
    assert_eq!(
        record(InstId::from_raw(u16::MAX)),
        Err(Error::InvalidInstructionId)
    );
}

#[test]
fn real_records_have_an_encoding_and_an_opcode() {
    for id in ids() {
        let rec = record(id).unwrap();
        assert_ne!(rec.encoding(), EncodingKind::None, "{id}");
        assert!(!rec.opcode().is_none(), "{id} lacks a primary opcode");
        assert!(!rec.features().is_empty(), "{id} lacks CPU features");
    }
}

#[test]
fn evex_subflags_imply_evex() {
    let sub = InstFlags::EVEX_K
        | InstFlags::EVEX_KZ
        | InstFlags::EVEX_SAE
        | InstFlags::EVEX_ER
        | InstFlags::EVEX_B4
        | InstFlags::EVEX_B8;
    for id in ids() {
        let rec = record(id).unwrap();
        if rec.flags().intersects(sub) {
            assert!(rec.is_evex(), "{id} has EVEX sub-flags without EVEX");
        }
        if rec.is_evex() {
            assert!(
                rec.features().intersects(
                    CpuFeatures::AVX512_F | CpuFeatures::AVX512_BW | CpuFeatures::AVX512_DQ
                ),
                "{id} is EVEX-capable but lists no AVX-512 feature"
            );
        }
    }
}

#[test]
fn broadcast_flags_are_exclusive() {
    for id in ids() {
        let rec = record(id).unwrap();
        assert!(
            !(rec.flags().contains(InstFlags::EVEX_B4)
                && rec.flags().contains(InstFlags::EVEX_B8)),
            "{id} declares both broadcast element sizes"
        );
    }
}

#[test]
fn pinned_registers_pin_a_single_class() {
    // A register mask is only meaningful when the row admits one register
    // class (plus optionally memory).
    let classes = [
        OpFlags::GPB_LO,
        OpFlags::GPB_HI,
        OpFlags::GPW,
        OpFlags::GPD,
        OpFlags::GPQ,
        OpFlags::SEG,
        OpFlags::ST,
        OpFlags::MM,
        OpFlags::K,
        OpFlags::XMM,
        OpFlags::YMM,
        OpFlags::ZMM,
        OpFlags::BND,
        OpFlags::CR,
        OpFlags::DR,
    ];
    for row in OP_SIGNATURES {
        if row.reg_mask != 0 {
            let populated = classes
                .iter()
                .filter(|&&c| row.op_flags.intersects(c))
                .count();
            assert_eq!(populated, 1, "register mask on a polymorphic row");
        }
    }
}

#[test]
fn lockable_instructions_write_their_first_operand() {
    for id in ids() {
        let rec = record(id).unwrap();
        if rec.is_lockable() {
            assert!(
                rec.flags().contains(InstFlags::WO),
                "{id} is lockable but does not write operand 0"
            );
        }
    }
}
