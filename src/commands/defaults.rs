use anyhow::Result;
use comfy_table::{presets::UTF8_BORDERS_ONLY, ContentArrangement, Table};

use crate::core::OrgSize;
use crate::estimator::apply_org_size_defaults;
use crate::io::output::OutputFormat;

/// Print the sizing defaults the presenter would push into editable
/// fields for the given organization size.
pub fn run(size: OrgSize, format: OutputFormat) -> Result<()> {
    let profile = apply_org_size_defaults(size);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(profile)?);
        }
        OutputFormat::Markdown => {
            println!("# Sizing defaults: {}", size.as_str());
            println!();
            println!("| Field | Value |");
            println!("|-------|-------|");
            println!("| Committee meetings | {} |", profile.committee_meetings);
            println!("| Council meetings | {} |", profile.council_meetings);
            println!("| Staff | {} |", profile.staff_count);
            println!("| Hours per meeting | {} |", profile.hours_per_meeting);
            println!("| Hourly rate | {} |", profile.hourly_rate);
            println!("| Packet pages | {} |", profile.packet_pages);
            println!("| Printed copies | {} |", profile.printed_copies);
        }
        OutputFormat::Terminal => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_BORDERS_ONLY)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Field", "Value"]);
            table.add_row(vec![
                "Committee meetings".to_string(),
                profile.committee_meetings.to_string(),
            ]);
            table.add_row(vec![
                "Council meetings".to_string(),
                profile.council_meetings.to_string(),
            ]);
            table.add_row(vec!["Staff".to_string(), profile.staff_count.to_string()]);
            table.add_row(vec![
                "Hours per meeting".to_string(),
                profile.hours_per_meeting.to_string(),
            ]);
            table.add_row(vec![
                "Hourly rate".to_string(),
                profile.hourly_rate.to_string(),
            ]);
            table.add_row(vec![
                "Packet pages".to_string(),
                profile.packet_pages.to_string(),
            ]);
            table.add_row(vec![
                "Printed copies".to_string(),
                profile.printed_copies.to_string(),
            ]);
            println!("Sizing defaults: {}", size.as_str());
            println!("{table}");
        }
    }

    Ok(())
}
