#![no_main]
use libfuzzer_sys::fuzz_target;

use x86db::regs::K1;
use x86db::{ptr, Arch, InstId, InstOptions, Label, Mem, Operand, OperandSize, Reg, RegType};

fn reg_type(b: u8) -> RegType {
    match b % 16 {
        0 => RegType::GpbLo,
        1 => RegType::GpbHi,
        2 => RegType::Gpw,
        3 => RegType::Gpd,
        4 => RegType::Gpq,
        5 => RegType::Mm,
        6 => RegType::K,
        7 => RegType::St,
        8 => RegType::Seg,
        9 => RegType::Xmm,
        10 => RegType::Ymm,
        11 => RegType::Zmm,
        12 => RegType::Bnd,
        13 => RegType::Cr,
        14 => RegType::Dr,
        _ => RegType::Rip,
    }
}

fn mem_size(b: u8) -> Option<OperandSize> {
    match b % 10 {
        0 => None,
        1 => Some(OperandSize::Byte),
        2 => Some(OperandSize::Word),
        3 => Some(OperandSize::Dword),
        4 => Some(OperandSize::Fword),
        5 => Some(OperandSize::Qword),
        6 => Some(OperandSize::Tbyte),
        7 => Some(OperandSize::Xmmword),
        8 => Some(OperandSize::Ymmword),
        _ => Some(OperandSize::Zmmword),
    }
}

fn operand(chunk: &[u8]) -> Operand {
    match chunk[0] % 5 {
        0 => Operand::None,
        1 => Operand::Reg(Reg::new(reg_type(chunk[1]), u32::from(chunk[2]))),
        2 => {
            let mut mem: Mem = ptr(Reg::new(reg_type(chunk[1]), u32::from(chunk[2] % 16)));
            mem = mem.index(Reg::new(reg_type(chunk[3]), u32::from(chunk[3] % 16)), 4);
            if let Some(size) = mem_size(chunk[2]) {
                mem = mem.size(size);
            }
            Operand::Mem(mem)
        }
        3 => Operand::Imm(i64::from(chunk[1]) - 128),
        _ => Operand::Label(Label(u32::from(chunk[1]))),
    }
}

fuzz_target!(|data: &[u8]| {
    // Validation must never panic for any (arch, id, options, operands)
    // combination, and must be deterministic.
    if data.len() < 28 {
        return;
    }
    let arch = if data[0] & 1 == 0 { Arch::X86 } else { Arch::X64 };
    let id = InstId::from_raw(u16::from_le_bytes([data[1], data[2]]));
    let options = InstOptions::from_bits_truncate(u32::from(data[3]) << 4 | u32::from(data[4]));

    let mut ops = [Operand::None; 6];
    for (i, op) in ops.iter_mut().enumerate() {
        *op = operand(&data[4 + i * 4..8 + i * 4]);
    }

    let extra = Operand::Reg(K1);
    let first = x86db::validate(arch, id, options, Some(&extra), &ops);
    assert_eq!(x86db::validate(arch, id, options, Some(&extra), &ops), first);
});
