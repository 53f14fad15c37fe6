//! Off-canvas navigation menu used on narrow screens.

use campus_core::{RenderOp, Target};

#[derive(Debug, Clone)]
pub struct OffcanvasMenu {
    open: bool,
    desktop_breakpoint: u32,
}

impl OffcanvasMenu {
    pub fn new(desktop_breakpoint: u32) -> Self {
        Self {
            open: false,
            desktop_breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) -> Vec<RenderOp> {
        self.open = open;
        vec![RenderOp::SetVisible {
            target: Target::Offcanvas,
            visible: open,
        }]
    }

    /// Close the menu once the window is desktop-sized.
    pub fn on_resize(&mut self, width: u32) -> Vec<RenderOp> {
        if width >= self.desktop_breakpoint && self.open {
            tracing::debug!(width, "desktop width reached, closing off-canvas menu");
            return self.set_open(false);
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_at_breakpoint() {
        let mut menu = OffcanvasMenu::new(992);
        menu.set_open(true);
        assert!(menu.on_resize(991).is_empty());
        assert!(menu.is_open());
        assert_eq!(menu.on_resize(992).len(), 1);
        assert!(!menu.is_open());
    }

    #[test]
    fn closed_menu_ignores_resize() {
        let mut menu = OffcanvasMenu::new(992);
        assert!(menu.on_resize(1_400).is_empty());
    }
}
