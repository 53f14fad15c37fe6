//! Department tab navigation.

use campus_core::{RenderOp, Target};
use campus_model::{CampusError, ConfigError, Result};

const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone)]
pub struct TabSet {
    tabs: Vec<String>,
    active: usize,
}

impl TabSet {
    /// The first tab starts active.
    pub fn new(tabs: Vec<String>) -> std::result::Result<Self, ConfigError> {
        if tabs.is_empty() {
            return Err(ConfigError::EmptyTabs);
        }
        Ok(Self { tabs, active: 0 })
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn active(&self) -> &str {
        &self.tabs[self.active]
    }

    /// Activate `tab_id`. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, tab_id: &str) -> Result<Vec<RenderOp>> {
        let Some(index) = self.tabs.iter().position(|tab| tab == tab_id) else {
            tracing::warn!(tab = tab_id, "unknown department tab");
            return Err(CampusError::UnknownTab(tab_id.to_string()));
        };
        self.active = index;
        tracing::debug!(tab = tab_id, "department tab selected");
        Ok(self.render())
    }

    /// Button and panel state for every tab.
    pub fn render(&self) -> Vec<RenderOp> {
        let mut ops = Vec::with_capacity(self.tabs.len() * 2);
        for (index, tab) in self.tabs.iter().enumerate() {
            let button = Target::TabButton(tab.clone());
            let active = index == self.active;
            ops.push(if active {
                RenderOp::AddClass {
                    target: button,
                    class: ACTIVE_CLASS,
                }
            } else {
                RenderOp::RemoveClass {
                    target: button,
                    class: ACTIVE_CLASS,
                }
            });
            ops.push(RenderOp::SetVisible {
                target: Target::TabPanel(tab.clone()),
                visible: active,
            });
        }
        ops
    }
}
