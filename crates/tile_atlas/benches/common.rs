use std::time::Duration;

use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub const TILE_SIZES: [u32; 3] = [16, 32, 64];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Throughput in pixels for a square of edge `size`.
pub fn pixel_throughput(size: u32) -> Throughput {
    Throughput::Elements(((size as u64) * (size as u64)).max(1))
}
