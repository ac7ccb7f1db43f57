use crate::app::Screen;

pub const MENU: [(Screen, &str); 2] = [
    (Screen::Dashboard, "Simulação de Empréstimo"),
    (Screen::Company, "Adicionar Financeira"),
];

/// Collapsible navigation menu. `expanded` doubles as the list's active flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavToggle {
    pub expanded: bool,
    pub cursor: usize,
}

impl NavToggle {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = MENU.len();
        self.cursor = if down {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    /// Screen under the cursor; collapses the menu.
    pub fn choose(&mut self) -> Screen {
        self.collapse();
        MENU[self.cursor].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_expanded() {
        let mut nav = NavToggle::default();
        assert!(!nav.expanded);
        nav.toggle();
        assert!(nav.expanded);
        nav.toggle();
        assert!(!nav.expanded);
    }

    #[test]
    fn choose_returns_selected_screen_and_collapses() {
        let mut nav = NavToggle::default();
        nav.toggle();
        nav.move_cursor(true);
        assert_eq!(nav.choose(), Screen::Company);
        assert!(!nav.expanded);
    }

    #[test]
    fn cursor_wraps() {
        let mut nav = NavToggle::default();
        nav.move_cursor(false);
        assert_eq!(nav.cursor, MENU.len() - 1);
        nav.move_cursor(true);
        assert_eq!(nav.cursor, 0);
    }
}
