use comfy_table::{presets, Table};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::calculator::normalize::WORKDAYS_PER_YEAR;
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::presentation::format_currency;
use crate::region::Region;
use crate::report::{CalculatorReport, CONSULTATION_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "terminal" | "text" => Ok(Self::Terminal),
            other => Err(format!(
                "unknown output format '{other}' (expected terminal, markdown or json)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Markdown => f.write_str("markdown"),
            Self::Terminal => f.write_str("terminal"),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &CalculatorReport) -> anyhow::Result<()>;
    fn write_regions(&mut self, regions: &[Region]) -> anyhow::Result<()>;
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
    fn write_report(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_regions(&mut self, regions: &[Region]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(regions)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Automation Savings Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", report.version)?;
        if !report.input.task_description.is_empty() {
            writeln!(self.writer, "Task: {}", report.input.task_description)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_inputs(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let input = &report.input;
        writeln!(self.writer, "## Inputs")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Parameter | Value |")?;
        writeln!(self.writer, "|-----------|-------|")?;
        self.write_row("Region", report.region.name)?;
        self.write_row("Hourly rate", &format!("${:.2}", input.hourly_rate))?;
        self.write_row(
            "Time saved per task",
            &format!("{} {}", input.time_saved, input.time_unit),
        )?;
        self.write_row(
            "Frequency",
            &format!("{} {}", input.frequency, input.frequency_unit),
        )?;
        self.write_row(
            "Implementation",
            &format!("{} days", input.implementation_days),
        )?;
        self.write_row("Cost of AI (one-time)", &format_currency(input.cost_of_ai))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let display = &report.display;
        writeln!(self.writer, "## Savings and ROI (over 3 years)")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Net savings", &display.net_savings)?;
        self.write_row("Gross savings", &display.gross_savings)?;
        self.write_row("ROI", &display.roi_multiple)?;
        self.write_row("Break-even point", &display.break_even)?;
        self.write_row("Full-time equivalent", &display.full_time_equivalent)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_horizons(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let savings = &report.output.savings;
        writeln!(self.writer, "## Projected Savings")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Horizon | Hours | Cost |")?;
        writeln!(self.writer, "|---------|-------|------|")?;
        for (label, totals) in [
            ("1 year", savings.one_year),
            ("3 years", savings.three_years),
            ("5 years", savings.five_years),
        ] {
            writeln!(
                self.writer,
                "| {label} | {:.0} | {} |",
                totals.hours,
                format_currency(totals.cost)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_yearly_chart(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Year-by-Year")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Year | Net Savings | Cost of AI |")?;
        writeln!(self.writer, "|------|-------------|------------|")?;
        for item in &report.output.yearly_savings {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                item.name,
                format_currency(item.net_savings),
                format_currency(item.cost_of_ai)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "_Cost of AI is shown spread over three years; break-even and ROI treat it as a one-time cost._"
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_productivity(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Gross Savings Breakdown")?;
        writeln!(self.writer)?;
        for slice in &report.output.productivity {
            writeln!(self.writer, "- {}: {}%", slice.name, slice.value)?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "[Discuss your custom ROI]({CONSULTATION_URL})"
        )?;
        Ok(())
    }

    fn write_row(&mut self, name: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {name} | {value} |")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_inputs(report)?;
        self.write_summary(report)?;
        self.write_horizons(report)?;
        self.write_yearly_chart(report)?;
        self.write_productivity(report)?;
        Ok(())
    }

    fn write_regions(&mut self, regions: &[Region]) -> anyhow::Result<()> {
        writeln!(self.writer, "| Id | Region | Default hourly rate |")?;
        writeln!(self.writer, "|----|--------|---------------------|")?;
        for region in regions {
            writeln!(
                self.writer,
                "| {} | {} {} | ${:.2} |",
                region.id, region.flag, region.name, region.hourly_rate
            )?;
        }
        Ok(())
    }
}

const PROGRESS_BAR_WIDTH: usize = 40;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    config: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(config),
            config,
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.config.emoji.should_use_emoji() {
            table.load_preset(presets::UTF8_FULL);
        } else {
            table.load_preset(presets::ASCII_FULL);
        }
        table
    }

    fn print_header(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.writer,
            "{} {}",
            f.emoji("💰", "[$]"),
            f.header("Automation Savings Report")
        )?;
        writeln!(self.writer, "{}", f.dim("========================="))?;
        let region = &report.region;
        writeln!(
            self.writer,
            "  Region: {} {} at ${:.2}/hour",
            f.emoji(region.flag, ""),
            region.name,
            report.input.hourly_rate
        )?;
        if !report.input.task_description.is_empty() {
            writeln!(self.writer, "  Task:   {}", report.input.task_description)?;
        }
        writeln!(
            self.writer,
            "  Saves {} {} per task, {} times {}",
            report.input.time_saved,
            report.input.time_unit,
            report.input.frequency,
            report.input.frequency_unit
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        let display = &report.display;
        writeln!(self.writer, "{}", f.header("Savings and ROI (over 3 years)"))?;
        writeln!(
            self.writer,
            "  Net savings:   {}",
            f.figure(&display.net_savings)
        )?;
        writeln!(
            self.writer,
            "  Gross savings: {}",
            f.figure(&display.gross_savings)
        )?;
        writeln!(self.writer, "  ROI:           {}", f.figure(&display.roi_multiple))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_horizons(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let savings = &report.output.savings;
        let mut table = self.table();
        table.set_header(vec!["Horizon", "Hours saved", "Cost saved"]);
        for (label, totals) in [
            ("1 year", savings.one_year),
            ("3 years", savings.three_years),
            ("5 years", savings.five_years),
        ] {
            table.add_row(vec![
                label.to_string(),
                format!("{:.0}", totals.hours),
                format_currency(totals.cost),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_yearly_chart(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["Year", "Net savings", "Cost of AI"]);
        for item in &report.output.yearly_savings {
            table.add_row(vec![
                item.name.clone(),
                format_currency(item.net_savings),
                format_currency(item.cost_of_ai),
            ]);
        }
        writeln!(self.writer, "{}", self.formatter.header("3-year savings"))?;
        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "{}",
            self.formatter
                .dim("  Cost of AI is spread over three years here; it is paid once.")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_break_even(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        let display = &report.display;
        writeln!(self.writer, "{}", f.header("Break-Even Analysis"))?;
        writeln!(
            self.writer,
            "  Implementation:   {} days",
            report.input.implementation_days
        )?;
        let break_even = if report.output.break_even.is_reachable() {
            f.figure(&display.break_even)
        } else {
            f.warning(&display.break_even)
        };
        writeln!(self.writer, "  Break-even point: {break_even}")?;
        writeln!(
            self.writer,
            "  [{}] {:.0}%",
            progress_bar(display.break_even_progress_percent, PROGRESS_BAR_WIDTH),
            display.break_even_progress_percent
        )?;
        writeln!(
            self.writer,
            "{}",
            f.dim(&format!(
                "  Daily savings assume {WORKDAYS_PER_YEAR} working days a year."
            ))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_workforce(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header("Workforce Impact"))?;
        writeln!(
            self.writer,
            "  Equivalent to {} full-time employees per year",
            f.figure(&report.display.full_time_equivalent)
        )?;
        let breakdown: Vec<String> = report
            .output
            .productivity
            .iter()
            .map(|slice| format!("{} {}%", slice.name, slice.value))
            .collect();
        writeln!(self.writer, "  Gross savings breakdown: {}", breakdown.join(", "))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} Discuss your custom ROI: {}",
            f.emoji("→", "->"),
            f.positive(CONSULTATION_URL)
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CalculatorReport) -> anyhow::Result<()> {
        self.print_header(report)?;
        self.print_summary(report)?;
        self.print_horizons(report)?;
        self.print_yearly_chart(report)?;
        self.print_break_even(report)?;
        self.print_workforce(report)?;
        Ok(())
    }

    fn write_regions(&mut self, regions: &[Region]) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["Id", "Region", "Default hourly rate"]);
        for region in regions {
            let name = if self.config.emoji.should_use_emoji() {
                format!("{} {}", region.flag, region.name)
            } else {
                region.name.to_string()
            };
            table.add_row(vec![
                region.id.to_string(),
                name,
                format!("${:.2}", region.hourly_rate),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

/// `####......` with `width` cells, filled to `percent`.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn create_writer(
    format: OutputFormat,
    formatting: FormattingConfig,
    destination: Box<dyn Write>,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, formatting)),
    }
}
