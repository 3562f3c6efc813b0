use clap::{Args, Parser, Subcommand, ValueEnum};
use raid_sim::RaidLevel;

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;

#[derive(Parser, Debug)]
#[command(
    name = "raid-cli",
    author,
    version,
    about = "In-memory RAID layout and recovery simulator"
)]
pub struct Cli {
    /// Default log filter, overridden by RUST_LOG.
    #[arg(long, global = true, env = "RAID_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write data, read it back, fail disks, optionally rebuild, and read again.
    Simulate(SimulateArgs),

    /// Print the version and exit.
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[arg(long, value_enum, env = "RAID_LEVEL", default_value_t = RaidMode::Raid5)]
    pub raid: RaidMode,

    /// Payload written to the array.
    #[arg(long, env = "RAID_DATA")]
    pub data: String,

    #[arg(long, env = "RAID_DISKS", default_value_t = 4)]
    pub disks: usize,

    /// Chunk size in bytes on every disk.
    #[arg(long, env = "RAID_STRIPE_SIZE", default_value_t = 4)]
    pub stripe_size: usize,

    /// Logical byte offset of the write.
    #[arg(long, env = "RAID_OFFSET", default_value_t = 0)]
    pub offset: u64,

    /// Disk to clear after the first read. Repeat to fail several disks.
    #[arg(long = "clear", value_name = "INDEX")]
    pub clear: Vec<usize>,

    /// Rebuild the cleared disks before the final read.
    #[arg(long)]
    pub rebuild: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum RaidMode {
    Raid0,
    Raid1,
    Raid10,
    Raid5,
    Raid6,
}

impl From<RaidMode> for RaidLevel {
    fn from(mode: RaidMode) -> Self {
        match mode {
            RaidMode::Raid0 => Self::Raid0,
            RaidMode::Raid1 => Self::Raid1,
            RaidMode::Raid10 => Self::Raid10,
            RaidMode::Raid5 => Self::Raid5,
            RaidMode::Raid6 => Self::Raid6,
        }
    }
}
