use ratatui::style::Color;

use super::charts::{PieChart, PieSlice};
use crate::currency::{format_currency, parse_currency};

pub const COMMITTED_COLOR: Color = Color::Rgb(0x17, 0xa2, 0xb8);
pub const OVER_THRESHOLD_COLOR: Color = Color::Rgb(0xdc, 0x35, 0x45);
pub const AVAILABLE_COLOR: Color = Color::Rgb(0x28, 0xa7, 0x45);

const DOUGHNUT_HOLE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commitment {
    /// Percentage of income taken by the installment, capped at 100.
    pub committed: f64,
    pub remaining: f64,
    pub over_threshold: bool,
}

/// `threshold` is a fraction, e.g. 0.30.
pub fn commitment(installment: f64, income: f64, threshold: f64) -> Commitment {
    let committed = if income > 0.0 {
        (installment * 100.0 / income).min(100.0)
    } else {
        0.0
    };
    Commitment {
        committed,
        remaining: 100.0 - committed,
        over_threshold: committed > threshold * 100.0,
    }
}

/// Income at which the installment takes exactly `threshold` of it.
pub fn suggested_min_income(installment: f64, threshold: f64) -> f64 {
    installment / threshold
}

/// Income field value; blank or unparsable input counts as zero.
///
/// Read the pt-BR way: with a comma present, `.` groups thousands and `,` is
/// the decimal mark (`4.500,00`). Without one, dots count as thousands
/// separators only when every group after the first has three digits
/// (`4.500`, `1.250.000`); a lone dot otherwise is a decimal point (`4500.50`).
pub fn parse_income(input: &str) -> f64 {
    let trimmed = input.trim();
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else if is_thousands_grouped(trimmed) {
        trimmed.replace('.', "")
    } else {
        trimmed.to_string()
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

fn is_thousands_grouped(s: &str) -> bool {
    let mut groups = s.split('.');
    let head_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    let mut tail = groups.peekable();
    head_ok
        && tail.peek().is_some()
        && tail.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

fn slices(c: &Commitment) -> Vec<PieSlice> {
    vec![
        PieSlice {
            label: "Renda Comprometida",
            value: c.committed,
            color: if c.over_threshold {
                OVER_THRESHOLD_COLOR
            } else {
                COMMITTED_COLOR
            },
        },
        PieSlice {
            label: "Renda Disponível",
            value: c.remaining,
            color: AVAILABLE_COLOR,
        },
    ]
}

/// Income field plus the doughnut it drives. The chart is created on the
/// first update and mutated afterwards.
#[derive(Debug, Clone)]
pub struct IncomeCommitment {
    pub income_input: String,
    pub threshold: f64,
    pub current: Commitment,
    pub min_income_text: String,
    chart: Option<PieChart>,
    redraws: usize,
}

impl IncomeCommitment {
    pub fn new(income_input: String, threshold: f64) -> Self {
        Self {
            income_input,
            threshold,
            current: commitment(0.0, 0.0, threshold),
            min_income_text: format_currency(0.0),
            chart: None,
            redraws: 0,
        }
    }

    /// Recomputes from the displayed first-installment text.
    pub fn update(&mut self, first_installment_text: &str) {
        let installment = parse_currency(first_installment_text);
        let income = parse_income(&self.income_input);

        self.min_income_text = format_currency(suggested_min_income(installment, self.threshold));
        self.current = commitment(installment, income, self.threshold);

        let data = slices(&self.current);
        match &mut self.chart {
            Some(chart) => {
                chart.set_slices(data);
                self.redraws += 1;
            }
            None => self.chart = Some(PieChart::new(data, DOUGHNUT_HOLE)),
        }
    }

    pub fn chart(&self) -> Option<&PieChart> {
        self.chart.as_ref()
    }

    /// Updates applied to the existing chart since it was created.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// `Renda Comprometida: 25.00%`
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let chart = self.chart.as_ref()?;
        chart
            .slices
            .get(index)
            .map(|s| format!("{}: {:.2}%", s.label, s.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_income_commits_nothing() {
        let c = commitment(1500.0, 0.0, 0.30);
        assert_eq!(c.committed, 0.0);
        assert_eq!(c.remaining, 100.0);
        assert!(!c.over_threshold);
    }

    #[test]
    fn above_threshold_is_flagged() {
        let c = commitment(1500.0, 4000.0, 0.30);
        assert!((c.committed - 37.5).abs() < 1e-9);
        assert!(c.over_threshold);
    }

    #[test]
    fn exactly_at_threshold_is_not_flagged() {
        let c = commitment(300.0, 1000.0, 0.30);
        assert!(!c.over_threshold);
    }

    #[test]
    fn installment_above_income_caps_at_hundred() {
        let c = commitment(5000.0, 2000.0, 0.30);
        assert_eq!(c.committed, 100.0);
        assert_eq!(c.remaining, 0.0);
        assert!(c.over_threshold);
    }

    #[test]
    fn suggested_income_puts_installment_at_threshold() {
        assert!((suggested_min_income(1500.0, 0.30) - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn income_parsing_is_lenient() {
        assert_eq!(parse_income(""), 0.0);
        assert_eq!(parse_income("abc"), 0.0);
        assert_eq!(parse_income(" 4500,50 "), 4500.5);
    }

    #[test]
    fn income_parsing_reads_pt_br_amounts() {
        assert_eq!(parse_income("4.500,00"), 4500.0);
        assert_eq!(parse_income("4.500"), 4500.0);
        assert_eq!(parse_income("1.250.000"), 1_250_000.0);
        assert_eq!(parse_income("4500.50"), 4500.5);
        assert_eq!(parse_income("4.50"), 4.5);
        assert_eq!(parse_income("4.500,"), 4500.0);
        assert_eq!(parse_income("1.2.3"), 0.0);
    }

    #[test]
    fn grouped_income_commits_against_full_amount() {
        for input in ["4.500,00", "4.500", "4500"] {
            let mut ic = IncomeCommitment::new(input.to_string(), 0.30);
            ic.update("R$ 1.500,00");
            assert!(
                (ic.current.committed - 100.0 / 3.0).abs() < 1e-9,
                "income {input}"
            );
            assert!(ic.current.over_threshold, "income {input}");
        }
    }

    #[test]
    fn update_creates_chart_once_then_mutates() {
        let mut ic = IncomeCommitment::new(String::new(), 0.30);
        assert!(ic.chart().is_none());

        ic.update("R$ 1.500,00");
        assert_eq!(ic.redraws(), 0);
        assert_eq!(ic.min_income_text, "R$ 5.000,00");
        let chart = ic.chart().unwrap();
        assert_eq!(chart.slices[0].color, COMMITTED_COLOR);
        assert_eq!(chart.slices[1].value, 100.0);

        ic.income_input = "4000".to_string();
        ic.update("R$ 1.500,00");
        assert_eq!(ic.redraws(), 1);
        let chart = ic.chart().unwrap();
        assert_eq!(chart.slices[0].color, OVER_THRESHOLD_COLOR);
        assert_eq!(ic.tooltip(0).as_deref(), Some("Renda Comprometida: 37.50%"));
    }

    #[test]
    fn custom_threshold_changes_coloring() {
        let mut ic = IncomeCommitment::new("4000".to_string(), 0.40);
        ic.update("R$ 1.500,00");
        assert!(!ic.current.over_threshold);
        assert_eq!(ic.min_income_text, "R$ 3.750,00");
    }
}
