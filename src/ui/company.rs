use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::form::{CompanyForm, FieldState, Slot};

const SLOT_HEIGHT: u16 = 4;

pub(super) fn render_company_screen(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Nova Financeira (* obrigatório)");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let visible = usize::from((inner.height / SLOT_HEIGHT).max(1));
    let form = &mut app.form;
    form.ensure_visible(visible);

    let end = (form.scroll + visible).min(form.order.len());
    let constraints: Vec<Constraint> = (form.scroll..end)
        .map(|_| Constraint::Length(SLOT_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, position) in (form.scroll..end).enumerate() {
        render_slot(f, form, position, rows[row]);
    }
}

fn render_slot(f: &mut Frame, form: &CompanyForm, position: usize, area: Rect) {
    let slot = form.order[position];
    let focused = form.focus == position;
    let state = form.state_of(slot);

    let (label, required, value) = match slot {
        Slot::Text(i) => {
            let field = &form.fields[i];
            let cursor = if focused { "▏" } else { "" };
            (
                field.spec.label,
                field.spec.required,
                format!("{}{cursor}", field.value),
            )
        }
        Slot::Country => (
            form.country.label,
            true,
            format!("◀ {} ▶", form.country.display()),
        ),
    };

    let border = match state {
        FieldState::Invalid(_) => Style::default().fg(Color::Red),
        FieldState::Valid => Style::default().fg(Color::Green),
        FieldState::Untouched if focused => Style::default().fg(Color::Yellow),
        FieldState::Untouched => Style::default().fg(Color::DarkGray),
    };
    let title = if required {
        format!("{label} *")
    } else {
        label.to_string()
    };
    let title_style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)].as_ref())
        .split(area);

    let input = Paragraph::new(value)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(title, title_style)),
        );
    f.render_widget(input, chunks[0]);

    // Inline alert; present only while the field is invalid.
    if let Some(message) = state.error() {
        let alert = Paragraph::new(Line::from(vec![Span::styled(
            format!("⚠ {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )]));
        f.render_widget(alert, chunks[1]);
    }
}
