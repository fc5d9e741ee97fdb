//! Output writers: the results panel rendered as terminal text, JSON, or
//! markdown. Writers receive computed values and never recompute; the
//! display currency is applied here and nowhere earlier.

use crate::core::{CalculationInput, CalculationResult};
use crate::formatting::{self, Currency, FormattingConfig};
use crate::risk;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_BORDERS_ONLY, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Bar width for the time comparison; the denominator never drops below
/// this many manual hours so short meetings still render in proportion.
const TIME_BAR_HOURS_FLOOR: f64 = 50.0;
const BAR_WIDTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// One estimate run, ready for rendering. JSON output serializes this
/// whole record; dollar amounts stay in the reference unit (USD).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub input: CalculationInput,
    pub result: CalculationResult,
}

impl Report {
    pub fn new(input: CalculationInput, result: CalculationResult) -> Self {
        Self {
            generated_at: Utc::now(),
            input,
            result,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
    fmt: FormattingConfig,
) -> Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(boxed_writer(format, file, fmt))
        }
        None => Ok(boxed_writer(format, io::stdout(), fmt)),
    }
}

fn boxed_writer<W: Write + 'static>(
    format: OutputFormat,
    writer: W,
    fmt: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, fmt.currency)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, fmt)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    currency: Currency,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, currency: Currency) -> Self {
        Self { writer, currency }
    }

    fn money(&self, amount: f64) -> String {
        formatting::format_currency(amount, self.currency)
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_breakdown(report)?;
        self.write_time_comparison(report)?;
        self.write_risk_detail(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &Report) -> Result<()> {
        writeln!(self.writer, "# Meeting Management ROI Estimate")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(
            self.writer,
            "Organization size: {} | Meetings per year: {} | Staff: {} | Currency: {}",
            report.input.org_size.as_str(),
            report.input.meetings,
            report.input.staff_count,
            self.currency.code()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &Report) -> Result<()> {
        let r = &report.result;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Hours saved per year | {} |",
            formatting::format_number(r.total_hours_saved)
        )?;
        writeln!(
            self.writer,
            "| Annual cost savings | {} |",
            self.money(r.total_savings)
        )?;
        writeln!(
            self.writer,
            "| Compliance risk exposure | {} |",
            self.money(r.current_risk_exposure)
        )?;
        writeln!(self.writer, "| Prep time recovered | {}% |", r.time_savings_pct)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, report: &Report) -> Result<()> {
        let r = &report.result;
        writeln!(self.writer, "## Savings breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Annual amount | Share |")?;
        writeln!(self.writer, "|----------|---------------|-------|")?;
        writeln!(
            self.writer,
            "| Labor | {} | {}% |",
            self.money(r.labor_savings),
            share_pct(r.shares.labor)
        )?;
        writeln!(
            self.writer,
            "| Printing | {} | {}% |",
            self.money(r.print_savings),
            share_pct(r.shares.print)
        )?;
        writeln!(
            self.writer,
            "| Compliance | {} | {}% |",
            self.money(r.compliance_savings),
            share_pct(r.shares.compliance)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Labor: {} hours x {}/hour. Printing: {} meetings x {} pages x {} copies.",
            formatting::format_number(r.total_hours_saved),
            self.money(report.input.hourly_rate),
            report.input.meetings,
            report.input.packet_pages,
            report.input.printed_copies
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_time_comparison(&mut self, report: &Report) -> Result<()> {
        let r = &report.result;
        writeln!(self.writer, "## Time per meeting")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Manual preparation: {} hours. With automation: {} hours ({}% savings).",
            report.input.manual_hours_per_meeting,
            formatting::format_number(r.automated_hours_per_meeting),
            r.time_savings_pct
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_risk_detail(&mut self, report: &Report) -> Result<()> {
        let r = &report.result;
        writeln!(self.writer, "## Compliance posture")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}** — {}",
            r.compliance_tier.label(),
            risk::tier_advisory(r.compliance_tier)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Average settlement exposure: {}. Annual expected risk cost: {} without \
             automation, {} with.",
            self.money(r.current_risk_exposure),
            self.money(r.annual_risk_cost_without),
            self.money(r.annual_risk_cost_with)
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    fmt: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, fmt: FormattingConfig) -> Self {
        colored::control::set_override(fmt.color.should_use_color());
        Self { writer, fmt }
    }

    fn header(&self, text: &str) -> String {
        text.blue().bold().to_string()
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let r = &report.result;
        let money = |amount: f64| self.fmt.money(amount);

        writeln!(self.writer, "{}", self.header("ESTIMATED ANNUAL VALUE"))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  Hours saved per year      {}",
            formatting::format_number(r.total_hours_saved).bold()
        )?;
        writeln!(
            self.writer,
            "  Annual cost savings       {}",
            money(r.total_savings).bold()
        )?;
        writeln!(
            self.writer,
            "  Compliance risk exposure  {}",
            money(r.current_risk_exposure).bold()
        )?;
        writeln!(
            self.writer,
            "  Prep time recovered       {}",
            format!("{}%", r.time_savings_pct).bold()
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.header("SAVINGS BREAKDOWN"))?;
        let mut table = Table::new();
        table
            .load_preset(UTF8_BORDERS_ONLY)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Category", "Annual amount", "Share", ""]);
        table.add_row(vec![
            "Labor".to_string(),
            money(r.labor_savings),
            format!("{}%", share_pct(r.shares.labor)),
            bar(r.shares.labor, BAR_WIDTH),
        ]);
        table.add_row(vec![
            "Printing".to_string(),
            money(r.print_savings),
            format!("{}%", share_pct(r.shares.print)),
            bar(r.shares.print, BAR_WIDTH),
        ]);
        table.add_row(vec![
            "Compliance".to_string(),
            money(r.compliance_savings),
            format!("{}%", share_pct(r.shares.compliance)),
            bar(r.shares.compliance, BAR_WIDTH),
        ]);
        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "  Labor: {} hours x {}/hour",
            formatting::format_number(r.total_hours_saved),
            money(report.input.hourly_rate)
        )?;
        writeln!(
            self.writer,
            "  Printing: {} meetings x {} pages x {} copies",
            report.input.meetings,
            report.input.packet_pages,
            report.input.printed_copies
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.header("TIME PER MEETING"))?;
        let scale = report.input.manual_hours_per_meeting.max(TIME_BAR_HOURS_FLOOR);
        writeln!(
            self.writer,
            "  Manual     {} {} hours",
            bar(report.input.manual_hours_per_meeting / scale, BAR_WIDTH),
            report.input.manual_hours_per_meeting
        )?;
        writeln!(
            self.writer,
            "  Automated  {} {} hours",
            bar(r.automated_hours_per_meeting / scale, BAR_WIDTH),
            formatting::format_number(r.automated_hours_per_meeting)
        )?;
        writeln!(self.writer)?;

        let badge = match r.compliance_tier {
            crate::core::ComplianceTier::High => r.compliance_tier.label().red().bold(),
            crate::core::ComplianceTier::Medium => {
                r.compliance_tier.label().yellow().bold()
            }
            crate::core::ComplianceTier::Low => r.compliance_tier.label().green().bold(),
        };
        writeln!(self.writer, "{}", self.header("COMPLIANCE POSTURE"))?;
        writeln!(self.writer, "  {badge}")?;
        writeln!(self.writer, "  {}", risk::tier_advisory(r.compliance_tier))?;
        writeln!(
            self.writer,
            "  Annual expected risk cost: {} without automation, {} with",
            money(r.annual_risk_cost_without),
            money(r.annual_risk_cost_with)
        )?;
        Ok(())
    }
}

fn share_pct(share: f64) -> i64 {
    (share * 100.0).round() as i64
}

fn bar(fraction: f64, width: usize) -> String {
    let cells = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    "█".repeat(cells)
}
