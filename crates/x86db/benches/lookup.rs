//! Performance benchmarks for `x86db`.
//!
//! Measures:
//! - Name lookup latency (short names, long names, misses, the linear
//!   `j` bucket)
//! - Validation latency per form class (GP, SSE, EVEX with options)
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use x86db::regs::*;
use x86db::{
    dword_ptr, find_by_name, qword_ptr, validate, Arch, InstId, InstOptions, Operand,
};

// ─── Name Lookup ────────────────────────────────────────────────────────────

fn bench_name_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_lookup");

    group.bench_function("short_hit", |b| {
        b.iter(|| find_by_name(black_box("add")).unwrap())
    });

    group.bench_function("long_hit", |b| {
        b.iter(|| find_by_name(black_box("punpckhqdq")).unwrap())
    });

    group.bench_function("j_bucket_linear", |b| {
        b.iter(|| find_by_name(black_box("jmp")).unwrap())
    });

    group.bench_function("miss", |b| {
        b.iter(|| find_by_name(black_box("notaninsn")).unwrap_err())
    });

    group.finish();
}

// ─── Validation ─────────────────────────────────────────────────────────────

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let rr = [Operand::Reg(RAX), Operand::Reg(RDX)];
    group.bench_function("cmp_r64_r64", |b| {
        b.iter(|| {
            validate(
                Arch::X64,
                black_box(InstId::CMP),
                InstOptions::empty(),
                None,
                black_box(&rr),
            )
            .unwrap()
        })
    });

    let rm = [
        Operand::Reg(RCX),
        Operand::Mem(qword_ptr(RBP).index(RSI, 8).disp(0x40)),
    ];
    group.bench_function("mov_r64_mem", |b| {
        b.iter(|| {
            validate(
                Arch::X64,
                black_box(InstId::MOV),
                InstOptions::empty(),
                None,
                black_box(&rm),
            )
            .unwrap()
        })
    });

    let sse = [Operand::Reg(XMM0), Operand::Reg(XMM1)];
    group.bench_function("addps_xmm_xmm", |b| {
        b.iter(|| {
            validate(
                Arch::X64,
                black_box(InstId::ADDPS),
                InstOptions::empty(),
                None,
                black_box(&sse),
            )
            .unwrap()
        })
    });

    let evex = [Operand::Reg(ZMM0), Operand::Reg(ZMM1), Operand::Reg(ZMM2)];
    let mask = Operand::Reg(K1);
    group.bench_function("vaddpd_zmm_masked", |b| {
        b.iter(|| {
            validate(
                Arch::X64,
                black_box(InstId::VADDPD),
                InstOptions::KMASK | InstOptions::KZ,
                Some(&mask),
                black_box(&evex),
            )
            .unwrap()
        })
    });

    let bcast = [
        Operand::Reg(ZMM0),
        Operand::Reg(ZMM1),
        Operand::Mem(qword_ptr(RAX)),
    ];
    group.bench_function("vaddpd_zmm_broadcast", |b| {
        b.iter(|| {
            validate(
                Arch::X64,
                black_box(InstId::VADDPD),
                InstOptions::BROADCAST,
                None,
                black_box(&bcast),
            )
            .unwrap()
        })
    });

    let reject = [Operand::Reg(RAX), Operand::Reg(AL)];
    group.bench_function("cmp_width_mismatch_reject", |b| {
        b.iter(|| {
            validate(
                Arch::X64,
                black_box(InstId::CMP),
                InstOptions::empty(),
                None,
                black_box(&reject),
            )
            .unwrap_err()
        })
    });

    let x86_mem = [Operand::Reg(EAX), Operand::Mem(dword_ptr(EBX))];
    group.bench_function("add_r32_mem_x86", |b| {
        b.iter(|| {
            validate(
                Arch::X86,
                black_box(InstId::ADD),
                InstOptions::empty(),
                None,
                black_box(&x86_mem),
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_name_lookup, bench_validate);
criterion_main!(benches);
