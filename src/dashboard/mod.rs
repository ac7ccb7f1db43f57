pub mod charts;
pub mod commitment;
pub mod pagination;
pub mod payload;

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::currency::format_currency;
use crate::flash::{FlashLevel, FlashStack};
use charts::{ChartId, ChartNav, LineChart, PieChart, Series};
use commitment::IncomeCommitment;
use pagination::Pagination;
use payload::{ScheduleRow, SummaryData};

/// Loan simulation dashboard: charts, paginated schedule and the income
/// commitment widget, all built from one payload.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub data: SummaryData,
    pub nav: ChartNav,
    pub lines: Vec<LineChart>,
    pub proportion: PieChart,
    pub pagination: Pagination,
    pub income: IncomeCommitment,
    /// Displayed first installment; the commitment widget reads it back.
    pub first_installment_text: String,
    /// Month index under the tooltip cursor.
    pub cursor: usize,
}

impl Dashboard {
    pub fn new(data: SummaryData, config: &Config) -> Self {
        let series = Series::from(&data);
        let first_installment_text = format_currency(data.first_installment());
        let mut income =
            IncomeCommitment::new(config.income.clone(), config.commitment_threshold);
        income.update(&first_installment_text);

        Self {
            lines: series.line_charts(),
            proportion: series.proportion_chart(),
            pagination: Pagination::new(data.amortization_schedule.len(), config.rows_per_page),
            nav: ChartNav::default(),
            income,
            first_installment_text,
            cursor: 0,
            data,
        }
    }

    /// Builds the dashboard from the configured summary file. A missing
    /// file name skips the dashboard; load failures are logged and reported
    /// once here.
    pub fn init(config: &Config, flashes: &mut FlashStack) -> Option<Self> {
        let Some(path) = &config.summary else {
            warn!("summary data not provided, charts will not be initialized");
            return None;
        };

        match SummaryData::from_file(path) {
            Ok(data) => {
                info!(
                    path = %path.display(),
                    rows = data.amortization_schedule.len(),
                    "summary data loaded"
                );
                Some(Self::new(data, config))
            }
            Err(err) => {
                error!(error = %err, "failed to load summary data or initialize charts");
                flashes.push(
                    FlashLevel::Error,
                    "Não foi possível carregar os dados da simulação.",
                );
                None
            }
        }
    }

    pub fn select_chart(&mut self, id: ChartId) {
        if self.nav.select(id) {
            debug!(chart = id.data_chart(), "chart selected");
        }
    }

    /// Activates the chart behind the `index`-th selector button.
    pub fn select_button(&mut self, index: usize) {
        if let Some(id) = self.nav.buttons().get(index).copied() {
            self.select_chart(id);
        }
    }

    pub fn cycle_chart(&mut self, forward: bool) {
        self.nav.cycle(forward);
        debug!(chart = self.nav.active().data_chart(), "chart selected");
    }

    pub fn active_line(&self) -> Option<&LineChart> {
        let active = self.nav.active();
        self.lines.iter().find(|l| l.id == active)
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let last = self.data.amortization_schedule.len().saturating_sub(1);
        self.cursor = if forward {
            (self.cursor + 1).min(last)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    /// Readout for the active chart: the point under the cursor for line
    /// charts, every slice for the pie.
    pub fn tooltips(&self) -> Vec<String> {
        match self.active_line() {
            Some(line) => line.tooltip(self.cursor).into_iter().collect(),
            None => (0..self.proportion.slices.len())
                .filter_map(|i| self.proportion.tooltip(i))
                .collect(),
        }
    }

    pub fn next_page(&mut self) {
        if self.pagination.next() {
            debug!(page = self.pagination.current_page(), "page changed");
        }
    }

    pub fn prev_page(&mut self) {
        if self.pagination.prev() {
            debug!(page = self.pagination.current_page(), "page changed");
        }
    }

    pub fn page_rows(&self) -> &[ScheduleRow] {
        &self.data.amortization_schedule[self.pagination.window()]
    }

    pub fn income_input(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            self.income.income_input.push(c);
            self.income.update(&self.first_installment_text);
        }
    }

    pub fn income_backspace(&mut self) {
        if self.income.income_input.pop().is_some() {
            self.income.update(&self.first_installment_text);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn rows(n: u32) -> Vec<ScheduleRow> {
        (1..=n)
            .map(|m| ScheduleRow {
                month: m,
                installment_value: 1500.0,
                interest_paid: 100.0,
                amortized_value: 1400.0,
                remaining_balance: 1400.0 * f64::from(n - m),
            })
            .collect()
    }

    fn dashboard(n: u32, income: &str) -> Dashboard {
        let data = SummaryData {
            amortization_schedule: rows(n),
            total_principal: 1400.0 * f64::from(n),
            total_interest: 100.0 * f64::from(n),
        };
        let config = Config {
            income: income.to_string(),
            ..Config::default()
        };
        Dashboard::new(data, &config)
    }

    #[test]
    fn initial_state() {
        let d = dashboard(25, "");
        assert_eq!(d.nav.active(), ChartId::Balance);
        assert_eq!(d.first_installment_text, "R$ 1.500,00");
        assert_eq!(d.pagination.total_pages(), 3);
        assert_eq!(d.page_rows().len(), 10);
        assert_eq!(d.income.current.committed, 0.0);
    }

    #[test]
    fn last_page_shows_remaining_rows() {
        let mut d = dashboard(25, "");
        d.next_page();
        d.next_page();
        d.next_page();
        let months: Vec<u32> = d.page_rows().iter().map(|r| r.month).collect();
        assert_eq!(months, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn typing_income_recomputes_in_place() {
        let mut d = dashboard(3, "");
        for c in "4000".chars() {
            d.income_input(c);
        }
        assert!(d.income.current.over_threshold);
        assert!(d.income.redraws() >= 4);
        d.income_input('x');
        assert_eq!(d.income.income_input, "4000");
        d.income_backspace();
        assert_eq!(d.income.income_input, "400");
        assert_eq!(d.income.current.committed, 100.0);
    }

    #[test]
    fn typed_pt_br_income_is_read_with_thousands_separator() {
        let mut d = dashboard(3, "");
        for c in "4.500,00".chars() {
            d.income_input(c);
        }
        assert_eq!(d.income.income_input, "4.500,00");
        assert!((d.income.current.committed - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(
            d.income.tooltip(0).as_deref(),
            Some("Renda Comprometida: 33.33%")
        );
    }

    #[test]
    fn select_button_follows_button_order() {
        let mut d = dashboard(3, "");
        d.select_button(4);
        assert_eq!(d.nav.active(), ChartId::TotalProportion);
        d.select_button(9);
        assert_eq!(d.nav.active(), ChartId::TotalProportion);
    }

    #[test]
    fn cursor_tooltip_follows_active_chart() {
        let mut d = dashboard(3, "");
        d.move_cursor(true);
        d.move_cursor(true);
        d.move_cursor(true);
        assert_eq!(d.cursor, 2);
        assert_eq!(d.tooltips(), vec!["Saldo Devedor (R$): R$ 0,00".to_string()]);

        d.select_chart(ChartId::TotalProportion);
        assert_eq!(d.tooltips().len(), 2);
        assert!(d.tooltips()[1].starts_with("Juros Total: R$ 300,00"));
    }

    #[test]
    fn missing_summary_skips_dashboard() {
        let mut flashes = FlashStack::default();
        assert!(Dashboard::init(&Config::default(), &mut flashes).is_none());
        assert!(flashes.is_empty());
    }

    #[test]
    fn unreadable_summary_is_caught_and_reported() {
        let mut flashes = FlashStack::default();
        let config = Config {
            summary: Some(PathBuf::from("/nonexistent/summary.json")),
            ..Config::default()
        };
        assert!(Dashboard::init(&config, &mut flashes).is_none());
        assert_eq!(flashes.messages()[0].level, FlashLevel::Error);
    }
}
