//! The write, read, fail, rebuild, read scenario driven by `raid-cli simulate`.

use std::fmt;

use anyhow::Context;
use raid_sim::{RaidController, RaidLevel, build_controller};
use tracing::{error, info, warn};

use crate::cli::SimulateArgs;

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod simulation_tests;

/// Outcome of one simulation run.
#[derive(Debug, Default)]
pub struct Report {
    /// Bytes read right after the write.
    pub read_back: Option<Vec<u8>>,
    /// Disks that were cleared successfully.
    pub cleared: Vec<usize>,
    /// `(disk, chunks rebuilt)` for every successful rebuild.
    pub rebuilt: Vec<(usize, usize)>,
    /// Bytes read after the failures, if the array could still serve them.
    pub after_failure: Option<Vec<u8>>,
    pub status: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |bytes: &Option<Vec<u8>>| match bytes {
            Some(b) => format!("{:?}", String::from_utf8_lossy(b)),
            None => "unavailable".to_string(),
        };
        writeln!(f, "read back: {}", show(&self.read_back))?;
        writeln!(f, "cleared: {:?}", self.cleared)?;
        for (disk, chunks) in &self.rebuilt {
            writeln!(f, "rebuilt disk {disk}: {chunks} chunks")?;
        }
        writeln!(f, "after failure: {}", show(&self.after_failure))?;
        write!(f, "{}", self.status)
    }
}

/// `run` builds the array described by `args` and walks it through the scenario.
///
/// Only construction and the initial write abort the run; failures in later steps
/// are logged and leave the corresponding report field empty.
///
/// # Errors
/// Returns an error if the array cannot be built or the payload cannot be written.
pub fn run(args: &SimulateArgs) -> anyhow::Result<Report> {
    let level = RaidLevel::from(args.raid);
    let mut raid = build_controller(level, args.disks, args.stripe_size)
        .with_context(|| format!("failed to initialize {level} controller"))?;
    info!(
        %level,
        disks = args.disks,
        stripe_size = args.stripe_size,
        "{level} controller initialized"
    );

    let data = args.data.as_bytes();
    raid.write(data, args.offset).with_context(|| {
        format!(
            "{level} write of {} bytes at offset {} failed",
            data.len(),
            args.offset
        )
    })?;
    info!(%level, bytes = data.len(), offset = args.offset, "data written");

    let mut report = Report {
        read_back: read_step(&*raid, args.offset, data.len(), "initial read"),
        ..Report::default()
    };

    for &disk in &args.clear {
        match raid.clear_disk(disk) {
            Ok(()) => report.cleared.push(disk),
            Err(err) => error!(%level, disk, %err, "error clearing disk"),
        }
    }

    if args.rebuild {
        report.rebuilt = rebuild_step(&mut *raid, &report.cleared);
    }

    report.after_failure =
        read_step(&*raid, args.offset, data.len(), "read after failure");
    report.status = raid.status_string();
    Ok(report)
}

fn read_step(raid: &dyn RaidController, offset: u64, len: usize, step: &str) -> Option<Vec<u8>> {
    let level = raid.level();
    match raid.read(offset, len) {
        Ok(bytes) => {
            info!(%level, step, data = %String::from_utf8_lossy(&bytes), "read succeeded");
            Some(bytes)
        }
        Err(err) => {
            error!(%level, step, %err, "read failed");
            None
        }
    }
}

fn rebuild_step(raid: &mut dyn RaidController, disks: &[usize]) -> Vec<(usize, usize)> {
    let level = raid.level();
    let Some(restorer) = raid.as_restore_mut() else {
        warn!(%level, "level has no redundancy to rebuild from, skipping rebuild");
        return Vec::new();
    };

    let mut rebuilt = Vec::new();
    for &disk in disks {
        match restorer.rebuild_disk(disk) {
            Ok(chunks) => {
                info!(%level, disk, chunks, "disk rebuilt");
                rebuilt.push((disk, chunks));
            }
            Err(err) => error!(%level, disk, %err, "rebuild failed"),
        }
    }
    rebuilt
}
