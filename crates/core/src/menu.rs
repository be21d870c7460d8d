//! Collapsible navigation menu state.

/// Binary open/closed state for the dropdown menu, initially closed.
#[derive(Debug, Clone, Default)]
pub struct MenuController {
    open: bool,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hard flip: open becomes closed, closed becomes open.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close after a menu entry was selected (or any other dismissal).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// An escape signal. Only consumed while the menu is open — the caller
    /// polls the key in the open state only, so a closed menu never observes
    /// it. Returns whether the signal had any effect.
    pub fn on_escape(&mut self) -> bool {
        if self.open {
            self.open = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_double_toggle_returns() {
        let mut menu = MenuController::new();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut menu = MenuController::new();
        assert!(!menu.on_escape(), "closed menu ignores escape");
        menu.toggle();
        assert!(menu.on_escape());
        assert!(!menu.is_open());
        assert!(!menu.on_escape(), "second escape has no effect");
    }
}
