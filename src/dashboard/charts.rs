use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::style::Color;

use super::payload::SummaryData;
use crate::currency::format_currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Balance,
    Interest,
    Amortization,
    TotalInstallment,
    TotalProportion,
}

impl ChartId {
    /// Buttons in declaration order.
    pub const ALL: [ChartId; 5] = [
        ChartId::Balance,
        ChartId::Interest,
        ChartId::Amortization,
        ChartId::TotalInstallment,
        ChartId::TotalProportion,
    ];

    /// The `data-chart` identifier of the selector button.
    pub fn data_chart(self) -> &'static str {
        match self {
            ChartId::Balance => "balanceChart",
            ChartId::Interest => "interestChart",
            ChartId::Amortization => "amortizationChart",
            ChartId::TotalInstallment => "totalInstallmentChart",
            ChartId::TotalProportion => "totalProportionChart",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ChartId::Balance => "Saldo Devedor",
            ChartId::Interest => "Juros",
            ChartId::Amortization => "Amortização",
            ChartId::TotalInstallment => "Parcela Total",
            ChartId::TotalProportion => "Proporção",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartId::Balance => "Evolução do Saldo Devedor",
            ChartId::Interest => "Juros Pagos por Mês",
            ChartId::Amortization => "Amortização do Principal por Mês",
            ChartId::TotalInstallment => "Parcela Total por Mês",
            ChartId::TotalProportion => "Proporção Total: Principal vs. Juros",
        }
    }

    pub fn dataset_label(self) -> &'static str {
        match self {
            ChartId::Balance => "Saldo Devedor (R$)",
            ChartId::Interest => "Juros Pagos (R$)",
            ChartId::Amortization => "Valor Amortizado (R$)",
            ChartId::TotalInstallment => "Parcela Total (R$)",
            ChartId::TotalProportion => "Principal vs. Juros",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ChartId::Balance => Color::Rgb(0x00, 0x7b, 0xff),
            ChartId::Interest => Color::Rgb(0xdc, 0x35, 0x45),
            ChartId::Amortization => Color::Rgb(0x28, 0xa7, 0x45),
            ChartId::TotalInstallment => Color::Rgb(0xff, 0xc1, 0x07),
            ChartId::TotalProportion => Color::Rgb(0x17, 0xa2, 0xb8),
        }
    }
}

/// Which chart container is shown. Exactly one is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartNav {
    buttons: Vec<ChartId>,
    active: usize,
}

impl ChartNav {
    /// Starts on the first declared button. `buttons` must not be empty.
    pub fn new(buttons: Vec<ChartId>) -> Self {
        debug_assert!(!buttons.is_empty());
        Self { buttons, active: 0 }
    }

    pub fn buttons(&self) -> &[ChartId] {
        &self.buttons
    }

    pub fn active(&self) -> ChartId {
        self.buttons[self.active]
    }

    pub fn is_visible(&self, id: ChartId) -> bool {
        self.active() == id
    }

    /// Returns false when no button targets `id`.
    pub fn select(&mut self, id: ChartId) -> bool {
        match self.buttons.iter().position(|b| *b == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        let len = self.buttons.len();
        self.active = if forward {
            (self.active + 1) % len
        } else {
            (self.active + len - 1) % len
        };
    }
}

impl Default for ChartNav {
    fn default() -> Self {
        Self::new(ChartId::ALL.to_vec())
    }
}

/// Line chart over the schedule months, built once per payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub id: ChartId,
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl LineChart {
    fn new(id: ChartId, months: &[u32], values: &[f64]) -> Self {
        let points: Vec<(f64, f64)> = months
            .iter()
            .zip(values)
            .map(|(m, v)| (f64::from(*m), *v))
            .collect();

        let x_min = points.first().map(|p| p.0).unwrap_or(0.0);
        let x_max = points.last().map(|p| p.0).unwrap_or(1.0).max(x_min + 1.0);
        // Axes begin at zero.
        let y_max = values.iter().copied().fold(0.0_f64, f64::max);
        let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

        Self {
            id,
            points,
            x_bounds: [x_min, x_max],
            y_bounds: [0.0, y_max],
        }
    }

    /// Tooltip for the point at `index`, e.g. `Juros Pagos (R$): R$ 91,00`.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.points
            .get(index)
            .map(|(_, y)| tooltip_label(self.id.dataset_label(), *y))
    }

    /// Three evenly spaced currency labels for the y axis.
    pub fn y_labels(&self) -> Vec<String> {
        let [lo, hi] = self.y_bounds;
        vec![
            format_currency(lo),
            format_currency((lo + hi) / 2.0),
            format_currency(hi),
        ]
    }
}

pub fn tooltip_label(dataset: &str, value: f64) -> String {
    format!("{dataset}: {}", format_currency(value))
}

/// Projected columns of the schedule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub months: Vec<u32>,
    pub remaining_balance: Vec<f64>,
    pub interest_paid: Vec<f64>,
    pub amortized_value: Vec<f64>,
    pub installment: Vec<f64>,
    pub total_principal: f64,
    pub total_interest: f64,
}

impl From<&SummaryData> for Series {
    fn from(data: &SummaryData) -> Self {
        let rows = &data.amortization_schedule;
        Self {
            months: rows.iter().map(|r| r.month).collect(),
            remaining_balance: rows.iter().map(|r| r.remaining_balance).collect(),
            interest_paid: rows.iter().map(|r| r.interest_paid).collect(),
            amortized_value: rows.iter().map(|r| r.amortized_value).collect(),
            installment: rows.iter().map(|r| r.installment_value).collect(),
            total_principal: data.total_principal,
            total_interest: data.total_interest,
        }
    }
}

impl Series {
    pub fn line_charts(&self) -> Vec<LineChart> {
        vec![
            LineChart::new(ChartId::Balance, &self.months, &self.remaining_balance),
            LineChart::new(ChartId::Interest, &self.months, &self.interest_paid),
            LineChart::new(ChartId::Amortization, &self.months, &self.amortized_value),
            LineChart::new(ChartId::TotalInstallment, &self.months, &self.installment),
        ]
    }

    pub fn proportion_chart(&self) -> PieChart {
        PieChart::new(
            vec![
                PieSlice {
                    label: "Principal Total",
                    value: self.total_principal,
                    color: Color::Rgb(0x17, 0xa2, 0xb8),
                },
                PieSlice {
                    label: "Juros Total",
                    value: self.total_interest,
                    color: Color::Rgb(0xfd, 0x7e, 0x14),
                },
            ],
            0.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: Color,
}

/// Pie or doughnut (`inner_radius > 0`) with its canvas points cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub inner_radius: f64,
    coords: Vec<Vec<(f64, f64)>>,
}

impl PieChart {
    pub fn new(slices: Vec<PieSlice>, inner_radius: f64) -> Self {
        let mut chart = Self {
            slices,
            inner_radius,
            coords: Vec::new(),
        };
        chart.rebuild();
        chart
    }

    /// Replaces the data in place and recomputes the geometry.
    pub fn set_slices(&mut self, slices: Vec<PieSlice>) {
        self.slices = slices;
        self.rebuild();
    }

    fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value.max(0.0)).sum()
    }

    /// Percentage of the whole taken by slice `index`.
    pub fn share(&self, index: usize) -> f64 {
        let total = self.total();
        match self.slices.get(index) {
            Some(slice) if total > 0.0 => slice.value.max(0.0) / total * 100.0,
            _ => 0.0,
        }
    }

    /// `Principal Total: R$ 1.000,00 (80.00%)`
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.slices.get(index).map(|slice| {
            format!(
                "{}: {} ({:.2}%)",
                slice.label,
                format_currency(slice.value),
                self.share(index)
            )
        })
    }

    pub fn slice_coords(&self) -> impl Iterator<Item = (&PieSlice, &[(f64, f64)])> {
        self.slices
            .iter()
            .zip(self.coords.iter().map(Vec::as_slice))
    }

    fn rebuild(&mut self) {
        let total = self.total();
        let mut start = 0.0;
        self.coords = self
            .slices
            .iter()
            .map(|slice| {
                let fraction = if total > 0.0 {
                    slice.value.max(0.0) / total
                } else {
                    0.0
                };
                let points = wedge_points(start, start + fraction, self.inner_radius, 1.0);
                start += fraction;
                points
            })
            .collect();
    }
}

/// Sample points filling the ring sector between two fractions of a turn,
/// starting at twelve o'clock and running clockwise.
pub fn wedge_points(start: f64, end: f64, inner: f64, outer: f64) -> Vec<(f64, f64)> {
    const ANGLE_STEP: f64 = TAU / 360.0;
    const RADIUS_STEP: f64 = 0.02;

    let mut points = Vec::new();
    let mut turn = start * TAU;
    let stop = end * TAU;
    while turn < stop {
        let angle = FRAC_PI_2 - turn;
        let mut r = inner;
        while r <= outer {
            points.push((r * angle.cos(), r * angle.sin()));
            r += RADIUS_STEP;
        }
        turn += ANGLE_STEP;
    }
    points
}
