//! Mnemonic lookup integration tests.

use x86db::{count, find_by_name, ids, name_of, record, Error, InstId, MAX_NAME_LEN};

#[test]
fn lookup_add() {
    assert_eq!(find_by_name("add"), Ok(InstId::ADD));
}

#[test]
fn lookup_unknown() {
    assert_eq!(find_by_name("zzz"), Err(Error::InvalidInstructionId));
}

#[test]
fn lookup_rejects_degenerate_input() {
    assert_eq!(find_by_name(""), Err(Error::InvalidInstructionId));
    assert_eq!(find_by_name("_"), Err(Error::InvalidInstructionId));
    assert_eq!(find_by_name("123xyz"), Err(Error::InvalidInstructionId));
    let oversized = "a".repeat(MAX_NAME_LEN + 1);
    assert_eq!(find_by_name(&oversized), Err(Error::InvalidInstructionId));
}

#[test]
fn every_name_round_trips() {
    for id in ids() {
        let name = name_of(id);
        assert!(!name.is_empty(), "id {} has no name", id.as_u16());
        assert_eq!(find_by_name(name), Ok(id), "round-trip failed for `{name}`");
    }
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(find_by_name("ADD"), Ok(InstId::ADD));
    assert_eq!(find_by_name("VzeroUpper"), Ok(InstId::VZEROUPPER));
    assert_eq!(find_by_name("Jecxz"), Ok(InstId::JECXZ));
}

#[test]
fn null_id_has_no_name() {
    assert_eq!(name_of(InstId::NONE), "");
    assert_eq!(name_of(InstId::from_raw(u16::MAX)), "");
}

#[test]
fn ids_are_dense() {
    assert_eq!(ids().count(), count() - 1);
    for id in ids() {
        assert!(record(id).is_ok());
    }
    assert!(record(InstId::from_raw(count() as u16)).is_err());
}

#[test]
fn name_offsets_agree_with_resolved_names() {
    // The empty name of the null id sits at the start of the blob, so its
    // address is the blob base.
    let blob_base = name_of(InstId::NONE).as_ptr() as usize;
    for id in ids() {
        let rec = record(id).unwrap();
        let name = name_of(id);
        assert!(name.len() <= MAX_NAME_LEN);
        assert_eq!(rec.name_offset() as usize, name.as_ptr() as usize - blob_base);
    }
}
