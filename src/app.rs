use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::cli::StartScreen;
use crate::config::{Config, PDF_STUB_MESSAGE};
use crate::dashboard::Dashboard;
use crate::error::FormError;
use crate::flash::{FlashLevel, FlashStack};
use crate::form::{CompanyForm, SubmitOutcome};
use crate::nav::NavToggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Company,
}

impl From<StartScreen> for Screen {
    fn from(value: StartScreen) -> Self {
        match value {
            StartScreen::Dashboard => Screen::Dashboard,
            StartScreen::Company => Screen::Company,
        }
    }
}

/// Page controller: owns every piece of UI state for the session.
pub struct App {
    pub screen: Screen,
    pub config: Config,
    pub nav: NavToggle,
    pub flashes: FlashStack,
    pub form: CompanyForm,
    pub dashboard: Option<Dashboard>,
}

impl App {
    pub fn new(config: Config) -> Result<Self, FormError> {
        let mut flashes = FlashStack::default();
        let dashboard = Dashboard::init(&config, &mut flashes);
        Ok(Self {
            screen: config.start_screen.into(),
            form: CompanyForm::company()?,
            nav: NavToggle::default(),
            flashes,
            dashboard,
            config,
        })
    }

    /// Drops the dashboard state and loads the summary again from scratch.
    pub fn recalculate(&mut self) {
        if self.config.summary.is_none() {
            warn!("recalculation requested without a summary file");
            self.flashes.push(
                FlashLevel::Warning,
                "Nenhum arquivo de simulação informado para recalcular.",
            );
            return;
        }
        info!("recalculating dashboard");
        self.dashboard = Dashboard::init(&self.config, &mut self.flashes);
    }

    pub fn generate_pdf(&mut self) {
        self.flashes.push(FlashLevel::Info, PDF_STUB_MESSAGE);
    }

    fn submit_company(&mut self) -> Result<(), FormError> {
        match self.form.submit() {
            SubmitOutcome::Accepted(submission) => {
                match serde_json::to_string(&submission) {
                    Ok(payload) => info!(%payload, "company form submitted"),
                    Err(err) => {
                        warn!(error = %err, "company form submitted, payload not serializable")
                    }
                }
                self.flashes
                    .push(FlashLevel::Success, "Financeira adicionada com sucesso!");
                self.form = CompanyForm::company()?;
            }
            SubmitOutcome::Blocked { first_invalid } => {
                info!(?first_invalid, "company form blocked by validation");
            }
        }
        Ok(())
    }
}

/// Returns `Ok(true)` when the user asked to quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool, FormError> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('n') => {
                app.nav.toggle();
                return Ok(false);
            }
            KeyCode::Char('d') => {
                app.flashes.dismiss_latest();
                return Ok(false);
            }
            _ => {}
        }
    }

    if app.nav.expanded {
        handle_nav_input(app, key);
        return Ok(false);
    }

    match app.screen {
        Screen::Dashboard => Ok(handle_dashboard_input(app, key)),
        Screen::Company => {
            handle_company_input(app, key)?;
            Ok(false)
        }
    }
}

fn handle_nav_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.nav.move_cursor(true),
        KeyCode::Up | KeyCode::Char('k') => app.nav.move_cursor(false),
        KeyCode::Enter => app.screen = app.nav.choose(),
        KeyCode::Esc => app.nav.collapse(),
        _ => {}
    }
}

fn handle_company_input(app: &mut App, key: KeyEvent) -> Result<(), FormError> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.input(c);
        }
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Left => app.form.cycle_choice(false),
        KeyCode::Right => app.form.cycle_choice(true),
        KeyCode::Enter => app.submit_company()?,
        KeyCode::Esc => app.screen = Screen::Dashboard,
        _ => {}
    }
    Ok(())
}

fn handle_dashboard_input(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('p') => app.generate_pdf(),
            KeyCode::Char('r') => app.recalculate(),
            _ => {}
        }
        return false;
    }

    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        return true;
    }

    let Some(dashboard) = app.dashboard.as_mut() else {
        return false;
    };

    match key.code {
        KeyCode::Tab => dashboard.cycle_chart(true),
        KeyCode::BackTab => dashboard.cycle_chart(false),
        KeyCode::F(n @ 1..=12) => dashboard.select_button(usize::from(n) - 1),
        KeyCode::Left => dashboard.move_cursor(false),
        KeyCode::Right => dashboard.move_cursor(true),
        KeyCode::PageUp | KeyCode::Char('<') => dashboard.prev_page(),
        KeyCode::PageDown | KeyCode::Char('>') => dashboard.next_page(),
        KeyCode::Backspace => dashboard.income_backspace(),
        KeyCode::Char(c) => dashboard.income_input(c),
        _ => {}
    }
    false
}
