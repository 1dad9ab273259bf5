// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for snapshot rendering and the session read path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fact_collector::{CpuInfo, FactSet, FixedFacts, HostInfo, MemoryInfo};
use kfetch_device::{DeviceConfig, InfoMask, KfetchDevice, RenderOptions, Renderer, UserSliceMut};

fn facts() -> FactSet {
    FactSet {
        host: HostInfo {
            hostname: "bench-host".into(),
            kernel_release: "6.6.31-generic".into(),
        },
        cpu: CpuInfo {
            model_name: "Intel(R) Xeon(R) CPU E5-2680 v4 @ 2.40GHz".into(),
            online: 28,
            total: 28,
        },
        memory: MemoryInfo {
            total_bytes: 64 << 30,
            free_bytes: 12 << 30,
        },
        num_procs: 512,
        uptime_mins: 86_400,
    }
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::new(RenderOptions::default());
    let facts = facts();

    let mut group = c.benchmark_group("render");
    group.bench_function("all", |b| {
        b.iter(|| renderer.render(black_box(InfoMask::ALL), &facts))
    });
    group.bench_function("none", |b| {
        b.iter(|| renderer.render(black_box(InfoMask::NONE), &facts))
    });
    group.finish();
}

fn bench_session_cycle(c: &mut Criterion) {
    let device = match KfetchDevice::load_with(DeviceConfig::default(), FixedFacts(facts())) {
        Ok(d) => d,
        Err(e) => panic!("device load failed: {e}"),
    };
    let mut out = vec![0u8; 1024];

    c.bench_function("open_read_close", |b| {
        b.iter(|| {
            let session = device.open().ok()?;
            let n = session.read(&mut UserSliceMut(&mut out)).ok()?;
            session.close().ok()?;
            Some(black_box(n))
        })
    });
}

criterion_group!(benches, bench_render, bench_session_cycle);
criterion_main!(benches);
