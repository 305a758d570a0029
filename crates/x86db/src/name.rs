//! Mnemonic lookup.
//!
//! Every name lives once in a zero-separated blob; records store byte
//! offsets into it. A 26-entry table maps the first (lowercased) letter to
//! the first instruction id of that letter, bounding the binary search to
//! one bucket. The `j` bucket is the exception: the conditional-branch
//! family sorts before `jecxz`/`jmp` there, so that bucket is scanned
//! linearly.
//!
//! Lookup allocates nothing: input is case-folded into a fixed stack buffer
//! (no mnemonic is longer than [`MAX_NAME_LEN`] bytes).

use core::cmp::Ordering;

use crate::error::Error;
use crate::instdb::{InstId, INST_COUNT, NAME_BLOB};

/// Hard cap on mnemonic length; longer inputs cannot match anything.
pub const MAX_NAME_LEN: usize = 16;

const BLOB: &[u8] = NAME_BLOB.as_bytes();

const fn name_offsets() -> [u32; INST_COUNT] {
    let mut out = [0u32; INST_COUNT];
    // Offset 0 is the null id's empty name; every further name starts one
    // byte past the previous separator.
    let mut id = 1;
    let mut pos = 0;
    while id < INST_COUNT {
        while BLOB[pos] != 0 {
            pos += 1;
        }
        pos += 1;
        out[id] = pos as u32;
        id += 1;
    }
    out
}

/// Byte offset of each id's name in the blob.
pub(crate) const NAME_OFFSETS: [u32; INST_COUNT] = name_offsets();

const NO_LETTER: u16 = u16::MAX;

const fn alpha_index() -> [u16; 26] {
    let mut out = [NO_LETTER; 26];
    let mut id = 1;
    while id < INST_COUNT {
        let first = BLOB[NAME_OFFSETS[id] as usize];
        let letter = (first - b'a') as usize;
        if out[letter] == NO_LETTER {
            out[letter] = id as u16;
        }
        id += 1;
    }
    out
}

/// First instruction id per initial letter, [`NO_LETTER`] when unused.
const ALPHA_INDEX: [u16; 26] = alpha_index();

/// The mnemonic of `id`; empty for the null id and for out-of-range ids.
#[must_use]
pub fn name_of(id: InstId) -> &'static str {
    let Some(&offset) = NAME_OFFSETS.get(id.index()) else {
        return "";
    };
    let start = offset as usize;
    let mut end = start;
    while BLOB[end] != 0 {
        end += 1;
    }
    &NAME_BLOB[start..end]
}

/// Compares the stored name of `id` against already-lowercased `input`.
fn compare_name(id: usize, input: &[u8]) -> Ordering {
    let mut pos = NAME_OFFSETS[id] as usize;
    for &b in input {
        let stored = BLOB[pos];
        if stored == 0 {
            return Ordering::Less;
        }
        match stored.cmp(&b) {
            Ordering::Equal => pos += 1,
            other => return other,
        }
    }
    if BLOB[pos] == 0 {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}

/// Maps a mnemonic to its instruction id. Input is case-folded to
/// lowercase; no allocation, O(log n) within the letter bucket.
///
/// # Errors
///
/// [`Error::InvalidInstructionId`] when the input is empty, longer than
/// [`MAX_NAME_LEN`], does not start with a letter, or names no instruction.
pub fn find_by_name(name: &str) -> Result<InstId, Error> {
    let bytes = name.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_NAME_LEN {
        return Err(Error::InvalidInstructionId);
    }

    let mut buf = [0u8; MAX_NAME_LEN];
    for (dst, &b) in buf.iter_mut().zip(bytes) {
        *dst = if b.is_ascii_uppercase() { b | 0x20 } else { b };
    }
    let input = &buf[..bytes.len()];

    let first = input[0];
    if !first.is_ascii_lowercase() {
        return Err(Error::InvalidInstructionId);
    }
    let letter = (first - b'a') as usize;

    let start = ALPHA_INDEX[letter];
    if start == NO_LETTER {
        return Err(Error::InvalidInstructionId);
    }
    let start = start as usize;
    let end = ALPHA_INDEX[letter + 1..]
        .iter()
        .find(|&&v| v != NO_LETTER)
        .map_or(INST_COUNT, |&v| v as usize);

    if first == b'j' {
        // The jcc family precedes jecxz/jmp, so the bucket is not sorted.
        for id in start..end {
            if compare_name(id, input) == Ordering::Equal {
                return Ok(InstId::from_raw(id as u16));
            }
        }
        return Err(Error::InvalidInstructionId);
    }

    let mut lo = start;
    let mut hi = end;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare_name(mid, input) {
            Ordering::Equal => return Ok(InstId::from_raw(mid as u16)),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    Err(Error::InvalidInstructionId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_names() {
        assert_eq!(find_by_name("add"), Ok(InstId::ADD));
        assert_eq!(find_by_name("xorps"), Ok(InstId::XORPS));
        assert_eq!(find_by_name("f2xm1"), Ok(InstId::F2XM1));
        assert_eq!(find_by_name("vzeroupper"), Ok(InstId::VZEROUPPER));
    }

    #[test]
    fn folds_case() {
        assert_eq!(find_by_name("ADD"), Ok(InstId::ADD));
        assert_eq!(find_by_name("MovAps"), Ok(InstId::MOVAPS));
    }

    #[test]
    fn j_bucket_is_linear_but_complete() {
        assert_eq!(find_by_name("ja"), Ok(InstId::JA));
        assert_eq!(find_by_name("js"), Ok(InstId::JS));
        assert_eq!(find_by_name("jecxz"), Ok(InstId::JECXZ));
        assert_eq!(find_by_name("jmp"), Ok(InstId::JMP));
        assert_eq!(find_by_name("jzz"), Err(Error::InvalidInstructionId));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(find_by_name(""), Err(Error::InvalidInstructionId));
        assert_eq!(find_by_name("_"), Err(Error::InvalidInstructionId));
        assert_eq!(find_by_name("123xyz"), Err(Error::InvalidInstructionId));
        assert_eq!(find_by_name("zzz"), Err(Error::InvalidInstructionId));
        assert_eq!(
            find_by_name("averylongmnemonicthatcannotexist"),
            Err(Error::InvalidInstructionId)
        );
    }

    #[test]
    fn prefixes_do_not_match() {
        // The comparator requires the stored terminator, not just a shared
        // prefix.
        assert_eq!(find_by_name("mo"), Err(Error::InvalidInstructionId));
        assert_eq!(find_by_name("movap"), Err(Error::InvalidInstructionId));
        assert_eq!(find_by_name("addpss"), Err(Error::InvalidInstructionId));
    }

    #[test]
    fn buckets_are_sorted_except_j() {
        let mut prev_letter = 0u8;
        for id in 1..INST_COUNT {
            let name = name_of(InstId::from_raw(id as u16));
            let letter = name.as_bytes()[0];
            assert!(letter >= prev_letter, "letters must ascend at {name}");
            if letter == prev_letter && letter != b'j' {
                let prev = name_of(InstId::from_raw((id - 1) as u16));
                assert!(prev < name, "bucket '{}' unsorted: {prev} >= {name}", letter as char);
            }
            prev_letter = letter;
        }
    }

    #[test]
    fn every_name_round_trips() {
        for id in crate::instdb::ids() {
            let name = name_of(id);
            assert!(!name.is_empty());
            assert!(name.len() <= MAX_NAME_LEN);
            assert_eq!(find_by_name(name), Ok(id), "round-trip failed for {name}");
        }
    }
}
