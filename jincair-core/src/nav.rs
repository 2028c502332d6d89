//! Navigation state machine.
//!
//! The mobile menu and accordion dropdowns were previously implicit in CSS
//! class membership. Here they are one explicit state value with a single
//! transition function; the browser layer re-renders classes from the state
//! after every event, so state and DOM cannot diverge.

/// Derived per-page navigation state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub menu_open: bool,
    /// Id of the currently expanded dropdown, if any. Accordion style: at
    /// most one open at a time.
    pub open_dropdown: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    ToggleMenu,
    CloseMenu,
    ToggleDropdown(String),
    OutsideClick,
}

impl NavState {
    /// Apply one event, returning the next state.
    #[must_use]
    pub fn apply(self, event: NavEvent) -> Self {
        match event {
            NavEvent::ToggleMenu => {
                if self.menu_open {
                    Self::default()
                } else {
                    Self {
                        menu_open: true,
                        open_dropdown: self.open_dropdown,
                    }
                }
            }
            NavEvent::CloseMenu | NavEvent::OutsideClick => Self::default(),
            NavEvent::ToggleDropdown(id) => {
                let open_dropdown = if self.open_dropdown.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
                Self {
                    menu_open: self.menu_open,
                    open_dropdown,
                }
            }
        }
    }
}
