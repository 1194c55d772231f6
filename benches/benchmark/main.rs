use criterion::criterion_main;

mod common;
mod core;
mod rendering;

criterion_main!(core::core_benches, stamping::stamping_benches, rendering::rendering_benches);
