use anyhow::Result;
use clap::Parser;
use govroi::cli::{Cli, Commands};
use govroi::commands;
use govroi::core::ComplianceChecklist;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            size,
            committee_meetings,
            council_meetings,
            staff,
            hours_per_meeting,
            hourly_rate,
            packet_pages,
            printed_copies,
            agenda_posting,
            accessible_publishing,
            retention_schedule,
            audit_trail,
            records_workflow,
            format,
            output,
            currency,
            plain,
            config,
        } => {
            let estimate_config = commands::estimate::EstimateConfig {
                size,
                committee_meetings,
                council_meetings,
                staff,
                hours_per_meeting,
                hourly_rate,
                packet_pages,
                printed_copies,
                checklist: ComplianceChecklist {
                    agenda_posting,
                    accessible_publishing,
                    retention_schedule,
                    audit_trail,
                    records_workflow,
                },
                format,
                output,
                currency,
                plain,
                config,
            };
            commands::estimate::run(estimate_config)
        }
        Commands::Defaults { size, format } => commands::defaults::run(size, format),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
