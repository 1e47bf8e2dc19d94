//! Scripted runs over `DynamicArray`

use crate::settings::RunnerSettings;
use anyhow::{ensure, Context, Result};
use fastlist_core::DynamicArray;
use tracing::info;

/// Walk through push, insert, remove_at, index_of, remove and remove_all,
/// checking the sequence after every step.
pub fn run_scenario() -> Result<DynamicArray<i32>> {
    let mut list = DynamicArray::new();
    for value in [10, 20, 30] {
        list.push(value);
    }
    ensure!(list == [10, 20, 30], "push produced {list:?}");
    info!(?list, "appended three values");

    list.insert(1, 15)?;
    ensure!(list == [10, 15, 20, 30], "insert produced {list:?}");
    info!(?list, "inserted 15 at index 1");

    let removed = list.remove_at(0)?;
    ensure!(removed == 10 && list == [15, 20, 30], "remove_at produced {list:?}");
    info!(removed, ?list, "removed index 0");

    let found = list.index_of(&20);
    ensure!(found == Some(1), "index_of(20) returned {found:?}");
    ensure!(!list.remove(&99), "remove(99) reported success");

    let dropped = list.remove_all(|&x| x >= 20);
    ensure!(dropped == 2 && list == [15], "remove_all produced {list:?}");
    info!(dropped, ?list, "removed values >= 20");

    Ok(list)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthReport {
    pub len: usize,
    pub capacity: usize,
    pub reallocations: usize,
    pub peak_reserved_bytes: usize,
}

/// Append `growth_samples` integers and report how the buffer grew.
///
/// Fails if `initial_capacity` cannot be allocated.
pub fn run_growth(settings: &RunnerSettings) -> Result<GrowthReport> {
    let mut list: DynamicArray<u64> = DynamicArray::new();
    list.set_capacity(settings.initial_capacity)
        .with_context(|| {
            format!("invalid initial_capacity {}", settings.initial_capacity)
        })?;
    for value in 0..settings.growth_samples as u64 {
        list.push(value);
    }
    let stats = list.allocations();
    Ok(GrowthReport {
        len: list.len(),
        capacity: list.capacity(),
        reallocations: stats.reallocations(),
        peak_reserved_bytes: stats.peak_reserved_bytes(),
    })
}
