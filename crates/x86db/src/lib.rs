//! # x86db — x86/x86-64 Instruction Database & Operand Validator
//!
//! `x86db` is the static, data-driven heart of a runtime assembler: the
//! per-mnemonic instruction table (encoding kind, packed opcode words,
//! flags, CPU features, EFLAGS effects, operand signatures) and the pure
//! validator that decides whether an operand combination is encodable on a
//! given architecture.
//!
//! ## Quick Start
//!
//! ```rust
//! use x86db::{find_by_name, validate, Arch, InstId, InstOptions, Operand};
//! use x86db::regs::{EAX, EDX};
//!
//! let id = find_by_name("cmp").unwrap();
//! assert_eq!(id, InstId::CMP);
//!
//! let ops = [Operand::Reg(EAX), Operand::Reg(EDX)];
//! validate(Arch::X86, id, InstOptions::empty(), None, &ops).unwrap();
//! ```
//!
//! ## Design
//!
//! - **Everything is a compile-time constant.** The tables are immutable for
//!   the lifetime of the process; concurrent readers need no locking.
//! - **No allocation.** Name lookup folds into a fixed stack buffer;
//!   validation translates into a fixed six-slot array.
//! - **Typed errors.** Every failure is a bare [`Error`] tag returned by
//!   value; nothing panics, nothing retries.
//!
//! Emitters (assembler, compiler, analyzers) are consumers of this crate;
//! byte emission itself lives upstream.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Lint policy ─────────────────────────────────────────────────────────
// An instruction table is dense data: long macro invocations, hex literals
// without separators (0x0F38, 0xC5), and narrowing casts between the index
// types are all expected here.
#![allow(
    clippy::cast_possible_truncation,
    clippy::unreadable_literal,
    clippy::too_many_lines,
    clippy::match_same_arms,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

/// Condition codes and the `jcc`/`setcc`/`cmovcc` maps.
pub mod cond;
/// Error type.
pub mod error;
/// The instruction table: records, flags, features, EFLAGS effects.
pub mod instdb;
/// Mnemonic lookup over the name blob.
pub mod name;
/// Packed opcode words.
pub mod opcode;
/// Registers, memory operands, immediates, labels.
pub mod operand;
/// Operand and instruction signatures.
pub mod signature;
/// The operand validator.
pub mod validate;

// Re-exports
pub use cond::{cmovcc_of, jcc_of, reverse_cond, setcc_of, CondCode, COND_COUNT};
pub use error::Error;
pub use instdb::{
    count, ids, record, CpuFeatures, EFlag, EncodingKind, FamilyKind, FlagEffect, InstFlags,
    InstId, InstRecord, SseGeneration,
};
pub use name::{find_by_name, name_of, MAX_NAME_LEN};
pub use opcode::{Map, Opcode, Prefix, TupleType, VecLen};
pub use operand::{
    byte_ptr, dword_ptr, ptr, ptr_abs, qword_ptr, regs, tbyte_ptr, word_ptr, xmmword_ptr,
    ymmword_ptr, zmmword_ptr, Arch, Label, Mem, Operand, OperandSize, Reg, RegType,
};
pub use signature::{ArchMask, InstSignature, MemFlags, OpFlags, OpSignature, OP_SIGNATURES};
pub use validate::{validate, InstOptions};
