use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
    },
    Frame,
};

use crate::app::App;
use crate::currency::format_currency;
use crate::dashboard::charts::{ChartId, LineChart, PieChart};
use crate::dashboard::Dashboard;

pub(super) fn render_dashboard_screen(f: &mut Frame, app: &App, area: Rect) {
    let Some(dashboard) = app.dashboard.as_ref() else {
        let notice = Paragraph::new(vec![
            Line::from("Dados da simulação indisponíveis."),
            Line::from(""),
            Line::from("Inicie com --summary <arquivo.json> ou use Ctrl+R para recarregar."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Gráficos"));
        f.render_widget(notice, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(columns[0]);

    let table_rows = table_height(dashboard.pagination.window().len());
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(6),
                Constraint::Length(table_rows),
                Constraint::Length(1),
                Constraint::Min(8),
            ]
            .as_ref(),
        )
        .split(columns[1]);

    render_chart_buttons(f, dashboard, left[0]);
    match dashboard.active_line() {
        Some(line) => render_line_chart(f, line, dashboard.cursor, left[1]),
        None => render_pie(f, &dashboard.proportion, ChartId::TotalProportion.title(), left[1]),
    }
    render_tooltips(f, dashboard, left[2]);

    render_summary(f, dashboard, right[0]);
    render_table(f, dashboard, right[1]);
    render_pager(f, dashboard, right[2]);
    render_income(f, dashboard, right[3]);
}

/// Rows plus borders and header; at least one body row is reserved.
fn table_height(rows: usize) -> u16 {
    u16::try_from(rows.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(3)
}

fn render_chart_buttons(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let mut spans = Vec::new();
    for (i, id) in dashboard.nav.buttons().iter().enumerate() {
        let style = if dashboard.nav.is_visible(*id) {
            Style::default()
                .fg(Color::Black)
                .bg(id.color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" F{} {} ", i + 1, id.button_label()), style));
        spans.push(Span::raw(" "));
    }
    let buttons = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Gráficos"));
    f.render_widget(buttons, area);
}

fn render_line_chart(f: &mut Frame, line: &LineChart, cursor: usize, area: Rect) {
    let cursor_point: Vec<(f64, f64)> = line.points.get(cursor).copied().into_iter().collect();

    let datasets = vec![
        Dataset::default()
            .name(line.id.dataset_label())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(line.id.color()))
            .data(&line.points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::White))
            .data(&cursor_point),
    ];

    let [x_min, x_max] = line.x_bounds;
    let x_labels = vec![
        Span::raw(format!("{x_min:.0}")),
        Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
        Span::raw(format!("{x_max:.0}")),
    ];
    let y_labels: Vec<Span> = line.y_labels().into_iter().map(Span::raw).collect();

    let mut y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds(line.y_bounds)
        .labels(y_labels);
    if line.id == ChartId::Balance {
        y_axis = y_axis.title("Saldo (R$)");
    }

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(line.id.title()),
        )
        .x_axis(
            Axis::default()
                .title("Mês")
                .style(Style::default().fg(Color::Gray))
                .bounds(line.x_bounds)
                .labels(x_labels),
        )
        .y_axis(y_axis);
    f.render_widget(chart, area);
}

fn render_pie(f: &mut Frame, pie: &PieChart, title: &str, area: Rect) {
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .marker(symbols::Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for (slice, coords) in pie.slice_coords() {
                ctx.draw(&Points {
                    coords,
                    color: slice.color,
                });
            }
        });
    f.render_widget(canvas, area);
}

fn render_tooltips(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let month = dashboard
        .data
        .amortization_schedule
        .get(dashboard.cursor)
        .map(|row| row.month);
    let mut lines: Vec<Line> = dashboard
        .tooltips()
        .into_iter()
        .map(|t| Line::styled(t, Style::default().fg(Color::Yellow)))
        .collect();
    if dashboard.active_line().is_some() {
        if let Some(month) = month {
            lines.insert(0, Line::from(format!("Mês {month}")));
        }
    }
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Detalhes")),
        area,
    );
}

fn render_summary(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let data = &dashboard.data;
    let text = vec![
        Line::from(vec![
            Span::styled("Principal Total: ", bold),
            Span::styled(format_currency(data.total_principal), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Juros Total: ", bold),
            Span::styled(format_currency(data.total_interest), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::styled("Total Pago: ", bold),
            Span::raw(format_currency(data.total_paid())),
            Span::raw(format!("  ({} parcelas)", data.amortization_schedule.len())),
        ]),
        Line::from(vec![
            Span::styled("Primeira Parcela: ", bold),
            Span::styled(
                dashboard.first_installment_text.clone(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];
    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Resumo")),
        area,
    );
}

fn render_table(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let header = Row::new(vec!["Mês", "Parcela", "Juros", "Amortizado", "Saldo Devedor"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .height(1);

    let rows = dashboard.page_rows().iter().map(|row| {
        Row::new(vec![
            Cell::from(row.month.to_string()),
            Cell::from(format_currency(row.installment_value)),
            Cell::from(format_currency(row.interest_paid)),
            Cell::from(format_currency(row.amortized_value)),
            Cell::from(format_currency(row.remaining_balance)),
        ])
        .height(1)
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(17),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Tabela de Amortização"));
    f.render_widget(table, area);
}

fn render_pager(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let pages = &dashboard.pagination;
    let control = |label: &'static str, disabled: bool| {
        let style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Span::styled(label, style)
    };
    let line = Line::from(vec![
        control("◀ Anterior (PgUp)", pages.prev_disabled()),
        Span::raw(format!(
            "   Página {} de {}   ",
            pages.current_page(),
            pages.total_pages()
        )),
        control("Próxima (PgDn) ▶", pages.next_disabled()),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_income(f: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let income = &dashboard.income;
    let committed_style = if income.current.over_threshold {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut text = vec![
        Line::from(vec![
            Span::styled("Renda mensal: ", bold),
            Span::styled(
                format!("R$ {}▏", income.income_input),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Comprometimento: ", bold),
            Span::styled(format!("{:.2}%", income.current.committed), committed_style),
        ]),
    ];
    // Doughnut readout, one line per segment.
    if let Some(chart) = income.chart() {
        for (index, slice) in chart.slices.iter().enumerate() {
            if let Some(tooltip) = income.tooltip(index) {
                text.push(Line::styled(tooltip, Style::default().fg(slice.color)));
            }
        }
    }
    text.extend([
        Line::from(""),
        Line::from(vec![
            Span::styled("Renda mínima sugerida: ", bold),
            Span::styled(income.min_income_text.clone(), Style::default().fg(Color::Cyan)),
        ]),
        Line::styled(
            format!("(parcela até {:.0}% da renda)", income.threshold * 100.0),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Sua Renda")),
        chunks[0],
    );

    if let Some(chart) = income.chart() {
        render_pie(f, chart, "Comprometimento Mensal da Renda", chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_height_saturates_for_huge_pages() {
        assert_eq!(table_height(0), 4);
        assert_eq!(table_height(10), 13);
        assert_eq!(table_height(65_532), u16::MAX);
        assert_eq!(table_height(65_533), u16::MAX);
        assert_eq!(table_height(65_535), u16::MAX);
        assert_eq!(table_height(1_000_000), u16::MAX);
    }
}
