use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::OrgSize;
use crate::formatting::Currency;
use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "govroi")]
#[command(about = "Meeting management ROI and compliance risk estimator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate annual savings and compliance risk reduction
    Estimate {
        /// Organization size preset supplying defaults for unset fields
        #[arg(short, long, value_enum, default_value = "medium")]
        size: OrgSize,

        /// Committee meetings per year
        #[arg(long)]
        committee_meetings: Option<u32>,

        /// Council meetings per year
        #[arg(long)]
        council_meetings: Option<u32>,

        /// Staff involved in meeting preparation
        #[arg(long)]
        staff: Option<u32>,

        /// Manual preparation hours per meeting
        #[arg(long)]
        hours_per_meeting: Option<f64>,

        /// Fully loaded hourly rate for preparation staff
        #[arg(long)]
        hourly_rate: Option<f64>,

        /// Pages per agenda packet
        #[arg(long)]
        packet_pages: Option<u32>,

        /// Printed copies per meeting
        #[arg(long)]
        printed_copies: Option<u32>,

        /// Agendas and notices are posted within statutory deadlines
        #[arg(long)]
        agenda_posting: bool,

        /// Published documents meet accessibility requirements
        #[arg(long)]
        accessible_publishing: bool,

        /// A record retention schedule is in place and followed
        #[arg(long)]
        retention_schedule: bool,

        /// Meeting decisions carry an audit trail
        #[arg(long)]
        audit_trail: bool,

        /// Public records requests follow a documented workflow
        #[arg(long)]
        records_workflow: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Display currency for rendered amounts
        #[arg(long, value_enum)]
        currency: Option<Currency>,

        /// Plain output: no colors
        #[arg(long)]
        plain: bool,

        /// Path to a govroi config file (defaults to discovering .govroi.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the sizing defaults for an organization size
    Defaults {
        /// Organization size preset
        #[arg(value_enum)]
        size: OrgSize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Create a .govroi.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
