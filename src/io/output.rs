use crate::compression::CompressionReport;
use crate::core::{AnalyticsSummary, ImpactMetrics, ProgramTrend};
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_ranked(&mut self, ranked: &[ImpactMetrics]) -> anyhow::Result<()>;
    fn write_metrics(&mut self, metrics: &ImpactMetrics) -> anyhow::Result<()>;
    fn write_summary(&mut self, summary: &AnalyticsSummary) -> anyhow::Result<()>;
    fn write_trends(&mut self, trends: &[ProgramTrend]) -> anyhow::Result<()>;
    fn write_compression(&mut self, report: &CompressionReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_ranked(&mut self, ranked: &[ImpactMetrics]) -> anyhow::Result<()> {
        self.write_json(ranked)
    }

    fn write_metrics(&mut self, metrics: &ImpactMetrics) -> anyhow::Result<()> {
        self.write_json(metrics)
    }

    fn write_summary(&mut self, summary: &AnalyticsSummary) -> anyhow::Result<()> {
        self.write_json(summary)
    }

    fn write_trends(&mut self, trends: &[ProgramTrend]) -> anyhow::Result<()> {
        self.write_json(trends)
    }

    fn write_compression(&mut self, report: &CompressionReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_ranked(&mut self, ranked: &[ImpactMetrics]) -> anyhow::Result<()> {
        self.write_header("Program Impact Ranking")?;

        if ranked.is_empty() {
            writeln!(self.writer, "  No programs to rank.")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "  {:>4}  {:<32} {:>8} {:>12} {:>10} {:>9}",
            "#", "Program", "Outcome", "Cost/Benef.", "Growth", "Score"
        )?;
        for (position, metrics) in ranked.iter().enumerate() {
            writeln!(
                self.writer,
                "  {:>4}  {:<32} {:>8.2} {:>12.2} {:>10} {:>9}",
                position + 1,
                truncate_name(&metrics.program_name, 32),
                metrics.outcome_improvement,
                metrics.cost_per_beneficiary,
                format_growth(metrics.growth_rate),
                color_score(metrics.composite_impact_score),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, metrics: &ImpactMetrics) -> anyhow::Result<()> {
        self.write_header("Program Metrics")?;
        writeln!(
            self.writer,
            "  Program: {} (#{})",
            metrics.program_name, metrics.program_id
        )?;
        writeln!(
            self.writer,
            "  Outcome improvement: {:.2}",
            metrics.outcome_improvement
        )?;
        writeln!(
            self.writer,
            "  Cost per beneficiary: {:.2}",
            metrics.cost_per_beneficiary
        )?;
        writeln!(
            self.writer,
            "  Growth rate: {}",
            format_growth(metrics.growth_rate)
        )?;
        writeln!(
            self.writer,
            "  Impact score: {}",
            color_score(metrics.composite_impact_score)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &AnalyticsSummary) -> anyhow::Result<()> {
        self.write_header("Program Impact Summary")?;
        writeln!(self.writer, "  Programs: {}", summary.total_programs)?;
        writeln!(
            self.writer,
            "  Total beneficiaries: {}",
            summary.total_beneficiaries
        )?;
        writeln!(self.writer, "  Total cost: {:.2}", summary.total_cost)?;
        writeln!(
            self.writer,
            "  Average outcome improvement: {:.2}",
            summary.average_outcome_improvement
        )?;
        writeln!(
            self.writer,
            "  Average impact score: {}",
            color_score(summary.average_impact_score)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trends(&mut self, trends: &[ProgramTrend]) -> anyhow::Result<()> {
        self.write_header("Program Trends")?;
        writeln!(
            self.writer,
            "  {:<16} {:>13} {:>12} {:>8}",
            "Period", "Beneficiaries", "Cost", "Outcome"
        )?;
        for trend in trends {
            writeln!(
                self.writer,
                "  {:<16} {:>13} {:>12.2} {:>8.2}",
                trend.time_period, trend.beneficiaries, trend.cost, trend.outcome_improvement
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_compression(&mut self, report: &CompressionReport) -> anyhow::Result<()> {
        self.write_header("Encoded Records")?;
        if !report.enabled {
            writeln!(
                self.writer,
                "  {}",
                "Compression disabled; records shown unencoded.".yellow()
            )?;
        }

        for entry in &report.entries {
            let delta = entry
                .delta
                .map_or_else(|| "-".to_string(), |d| format!("{d:+}"));
            writeln!(
                self.writer,
                "  {:>6}  {:<16} {:<32} {:>8} {:>10}",
                entry.program_id,
                entry.time_period,
                truncate_name(&entry.compressed_name, 32),
                delta,
                entry.reference
            )?;
        }

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  Dictionary entries: {}",
            report.stats.entry_count
        )?;
        writeln!(
            self.writer,
            "  Programs tracked: {}",
            report.stats.tracked_name_count
        )?;
        writeln!(
            self.writer,
            "  Compression ratio: {:.2}",
            report.stats.compression_ratio
        )?;
        Ok(())
    }
}

fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let kept: String = name.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn format_growth(growth_rate: Option<f64>) -> String {
    growth_rate.map_or_else(|| "n/a".to_string(), |g| format!("{:+.1}%", g * 100.0))
}

fn color_score(score: f64) -> ColoredString {
    let text = format!("{score:.2}");
    if score >= 70.0 {
        text.green()
    } else if score >= 40.0 {
        text.yellow()
    } else {
        text.red()
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::{compress_records, EncodingStore};
    use crate::core::ProgramRecord;

    fn metrics(name: &str, score: f64, growth: Option<f64>) -> ImpactMetrics {
        ImpactMetrics {
            program_id: 1,
            program_name: name.to_string(),
            outcome_improvement: 12.5,
            cost_per_beneficiary: 40.0,
            growth_rate: growth,
            composite_impact_score: score,
        }
    }

    #[test]
    fn test_json_writer_ranked() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_ranked(&[metrics("Meals", 71.25, Some(0.1))])
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["program_name"], "Meals");
        assert_eq!(value[0]["composite_impact_score"], 71.25);
    }

    #[test]
    fn test_terminal_writer_ranked() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_ranked(&[
                metrics("Meals", 71.25, Some(0.125)),
                metrics("Shelter", 30.0, None),
            ])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Meals"));
        assert!(output.contains("+12.5%"));
        assert!(output.contains("n/a"));
        assert!(output.contains("71.25"));
    }

    #[test]
    fn test_terminal_writer_single_program() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_metrics(&metrics("Meals", 64.0, Some(-0.2)))
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Program: Meals (#1)"));
        assert!(output.contains("Growth rate: -20.0%"));
        assert!(output.contains("64.00"));
    }

    #[test]
    fn test_terminal_writer_empty_ranking() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_ranked(&[]).unwrap();
        assert!(String::from_utf8(buffer)
            .unwrap()
            .contains("No programs to rank."));
    }

    #[test]
    fn test_terminal_writer_compression() {
        let store = EncodingStore::new();
        let records = vec![
            ProgramRecord::new(1, "Meals", "2025-Q1").with_beneficiaries(100),
            ProgramRecord::new(2, "Meals", "2025-Q2").with_beneficiaries(90),
        ];
        let report = compress_records(&store, &records, true);

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_compression(&report)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("CODE_1"));
        assert!(output.contains("-10"));
        assert!(output.contains("Dictionary entries: 1"));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("short", 10), "short");
        assert_eq!(truncate_name("a very long program name", 10), "a very ...");
    }
}
