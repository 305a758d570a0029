//! Error type for database queries and operand validation.

use core::fmt;

/// Validation / lookup error.
///
/// A flat enumeration: the tag is the entire observable. No messages, no
/// chaining — higher layers map tags to human strings if they need them.
/// Every failure is reported synchronously by return value and nothing is
/// retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Error {
    /// Architecture tag outside the x86 family.
    InvalidArch,
    /// Instruction id out of range.
    InvalidArgument,
    /// No signature of the instruction matches the operand vector.
    InvalidInstruction,
    /// Name lookup failed (empty, oversized, or unknown input), or a record
    /// was requested for an id the database does not contain.
    InvalidInstructionId,
    /// A register kind not representable on the target ISA.
    InvalidRegType,
    /// A concrete register index not encodable on this architecture.
    InvalidPhysId,
    /// 64-bit general-purpose register used in 32-bit mode.
    InvalidUseOfGpq,
    /// AH/BH/CH/DH combined with an operand that requires a REX prefix.
    InvalidUseOfGpbHi,
    /// Memory base or index register of a type not permitted for addressing.
    InvalidAddress,
    /// Gap in the operand vector (a real operand after a none operand).
    InvalidState,
    /// The extra operand attached as a writemask is not a K register.
    InvalidKMaskReg,
    /// The instruction does not support writemasking.
    InvalidKMaskUse,
    /// Zeroing requested without a writemask, or on an instruction that
    /// only supports merging.
    InvalidKZeroUse,
    /// Broadcast requested without a memory operand, or with a memory size
    /// that does not match the broadcast element.
    InvalidBroadcast,
    /// SAE or embedded rounding requested on a form that cannot carry it.
    InvalidSaeOrEr,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Error::InvalidArch => "invalid architecture",
            Error::InvalidArgument => "instruction id out of range",
            Error::InvalidInstruction => "no instruction signature matches the operands",
            Error::InvalidInstructionId => "unknown instruction",
            Error::InvalidRegType => "invalid register type",
            Error::InvalidPhysId => "register index not encodable on this architecture",
            Error::InvalidUseOfGpq => "64-bit register used in 32-bit mode",
            Error::InvalidUseOfGpbHi => "high-byte register combined with a REX-requiring operand",
            Error::InvalidAddress => "register type not permitted for addressing",
            Error::InvalidState => "gap in operand vector",
            Error::InvalidKMaskReg => "writemask operand is not a K register",
            Error::InvalidKMaskUse => "instruction does not support writemasking",
            Error::InvalidKZeroUse => "invalid use of zeroing-masking",
            Error::InvalidBroadcast => "invalid use of embedded broadcast",
            Error::InvalidSaeOrEr => "invalid use of SAE or embedded rounding",
        };
        f.write_str(s)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_stable() {
        assert_eq!(Error::InvalidArch.to_string(), "invalid architecture");
        assert_eq!(
            Error::InvalidPhysId.to_string(),
            "register index not encodable on this architecture"
        );
    }
}
