mod company;
mod dashboard;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::nav::MENU;

const MAX_FLASHES: usize = 3;

pub fn ui(f: &mut Frame, app: &mut App) {
    let flash_rows = app.flashes.messages().len().min(MAX_FLASHES) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(flash_rows),
                Constraint::Min(0),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.size());

    render_title(f, app, chunks[0]);
    render_flashes(f, app, chunks[1]);

    let help = match app.screen {
        Screen::Dashboard => {
            dashboard::render_dashboard_screen(f, app, chunks[2]);
            "Tab/F1-F5: gráfico | ←/→: mês | PgUp/PgDn: página | 0-9: renda | Ctrl+P: PDF | Ctrl+R: recalcular | q: sair"
        }
        Screen::Company => {
            company::render_company_screen(f, app, chunks[2]);
            "Tab/↓: próximo | Shift+Tab/↑: anterior | ←/→: país | Enter: enviar | Esc: voltar"
        }
    };
    let help = Paragraph::new(format!("{help} | Ctrl+N: menu | Ctrl+D: fechar aviso"))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[3]);

    if app.nav.expanded {
        render_nav_menu(f, app, chunks[0]);
    }
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let page = match app.screen {
        Screen::Dashboard => "Simulação de Empréstimo",
        Screen::Company => "Adicionar Financeira",
    };
    let toggler = if app.nav.expanded { "✕" } else { "☰" };
    let title = Paragraph::new(Line::from(vec![
        Span::styled(format!("{toggler} "), Style::default().fg(Color::Yellow)),
        Span::styled(
            "Simulador de Empréstimos",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {page}"), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, area);
}

fn render_flashes(f: &mut Frame, app: &App, area: Rect) {
    let messages = app.flashes.messages();
    let shown = &messages[messages.len().saturating_sub(MAX_FLASHES)..];
    let lines: Vec<Line> = shown
        .iter()
        .map(|m| {
            Line::from(vec![
                Span::styled("[x] ", Style::default().fg(Color::DarkGray)),
                Span::styled(m.text.clone(), Style::default().fg(m.level.color())),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn render_nav_menu(f: &mut Frame, app: &App, anchor: Rect) {
    let width = 30.min(anchor.width);
    let height = (MENU.len() as u16 + 2).min(f.size().height.saturating_sub(anchor.y + 1));
    let area = Rect::new(anchor.x, anchor.y + 1, width, height);

    let lines: Vec<Line> = MENU
        .iter()
        .enumerate()
        .map(|(i, (screen, label))| {
            let marker = if i == app.nav.cursor { "▶ " } else { "  " };
            let style = if i == app.nav.cursor {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if *screen == app.screen {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::styled(format!("{marker}{label}"), style)
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Menu")),
        area,
    );
}
