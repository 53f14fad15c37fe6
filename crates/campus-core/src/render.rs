//! Render operations and the surface they are projected onto.
//!
//! Components never touch a document directly. They describe what should be
//! visible as [`RenderOp`]s, and the host applies them through a
//! [`RenderSurface`]. A surface that lacks a target reports it with `false`
//! from [`RenderSurface::apply`]; callers treat that as "nothing to update".

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use campus_model::{FieldId, FieldValue};
use serde::Serialize;

/// Cost figure slots on the calculator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostFigure {
    AnnualTuition,
    ScholarshipReduction,
    RegistrationFee,
    MaterialsFee,
    Total,
}

impl CostFigure {
    pub const ALL: [CostFigure; 5] = [
        CostFigure::AnnualTuition,
        CostFigure::ScholarshipReduction,
        CostFigure::RegistrationFee,
        CostFigure::MaterialsFee,
        CostFigure::Total,
    ];

    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::AnnualTuition => "annual-tuition",
            Self::ScholarshipReduction => "scholarship-reduction",
            Self::RegistrationFee => "registration-fee",
            Self::MaterialsFee => "materials-fee",
            Self::Total => "total-cost",
        }
    }
}

/// Addressable element of the page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum Target {
    HeroContent,
    HeroTitle,
    HeroSubtitle,
    HeroBackground,
    HeroDot(usize),
    FieldInput(FieldId),
    FieldError(FieldId),
    FormStatus,
    Cost(CostFigure),
    CountdownDays,
    TabButton(String),
    TabPanel(String),
    Reveal(String),
    Article(usize),
    CurrentDate,
    Offcanvas,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeroContent => f.write_str("#hero-content"),
            Self::HeroTitle => f.write_str("#hero-content h1"),
            Self::HeroSubtitle => f.write_str("#hero-content p"),
            Self::HeroBackground => f.write_str("#hero-bg"),
            Self::HeroDot(index) => write!(f, ".hero-dot[{index}]"),
            Self::FieldInput(field) => write!(f, "#{field}"),
            Self::FieldError(field) => write!(f, "#{field}-error"),
            Self::FormStatus => f.write_str("#form-status"),
            Self::Cost(figure) => write!(f, "#{}", figure.element_id()),
            Self::CountdownDays => f.write_str("#countdown-days"),
            Self::TabButton(id) => write!(f, "[data-tab={id}]"),
            Self::TabPanel(id) => write!(f, "#{id}"),
            Self::Reveal(id) => write!(f, "#{id}.fade-in"),
            Self::Article(index) => write!(f, ".main-article[{index}]"),
            Self::CurrentDate => f.write_str("#current-date"),
            Self::Offcanvas => f.write_str("#offcanvasMenu"),
        }
    }
}

/// One change to the visible page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderOp {
    SetText {
        target: Target,
        text: String,
    },
    SetAttribute {
        target: Target,
        name: &'static str,
        value: String,
    },
    SetStyle {
        target: Target,
        property: &'static str,
        value: String,
    },
    AddClass {
        target: Target,
        class: &'static str,
    },
    RemoveClass {
        target: Target,
        class: &'static str,
    },
    SetVisible {
        target: Target,
        visible: bool,
    },
    SetValue {
        target: Target,
        value: FieldValue,
    },
}

impl RenderOp {
    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText {
            target,
            text: text.into(),
        }
    }

    pub fn attribute(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Self::SetAttribute {
            target,
            name,
            value: value.into(),
        }
    }

    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }

    pub fn target(&self) -> &Target {
        match self {
            Self::SetText { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::SetStyle { target, .. }
            | Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::SetVisible { target, .. }
            | Self::SetValue { target, .. } => target,
        }
    }
}

impl fmt::Display for RenderOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetText { target, text } => write!(f, "{target} text = {text:?}"),
            Self::SetAttribute {
                target,
                name,
                value,
            } => write!(f, "{target} [{name}] = {value:?}"),
            Self::SetStyle {
                target,
                property,
                value,
            } => write!(f, "{target} style.{property} = {value}"),
            Self::AddClass { target, class } => write!(f, "{target} +class {class}"),
            Self::RemoveClass { target, class } => write!(f, "{target} -class {class}"),
            Self::SetVisible { target, visible } => {
                write!(f, "{target} {}", if *visible { "shown" } else { "hidden" })
            }
            Self::SetValue { target, value } => match value {
                FieldValue::Text(text) => write!(f, "{target} value = {text:?}"),
                FieldValue::Checked(checked) => write!(f, "{target} checked = {checked}"),
            },
        }
    }
}

/// Host side of rendering.
pub trait RenderSurface {
    /// Whether `target` exists on this surface.
    fn has_target(&self, target: &Target) -> bool;

    /// Apply `op`. Returns false when the target is absent.
    fn apply(&mut self, op: &RenderOp) -> bool;

    /// Called with the virtual time before a batch of operations is applied.
    fn set_time(&mut self, _now_ms: u64) {}
}

/// Apply a batch of operations, skipping absent targets. Returns how many
/// were applied.
pub fn apply_all<S>(surface: &mut S, ops: &[RenderOp]) -> usize
where
    S: RenderSurface + ?Sized,
{
    let mut applied = 0;
    for op in ops {
        if surface.apply(op) {
            applied += 1;
        } else {
            tracing::debug!(target_element = %op.target(), "render target absent, skipped");
        }
    }
    applied
}

/// Which targets a [`RecordingSurface`] pretends to have.
#[derive(Debug, Clone)]
enum Presence {
    All,
    Only(BTreeSet<Target>),
    AllExcept(BTreeSet<Target>),
}

/// A rendered operation with the virtual time it was applied at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEntry {
    pub at_ms: u64,
    pub op: RenderOp,
}

/// In-memory surface that keeps the resulting element state and a log of
/// every applied operation.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    presence: Presence,
    now_ms: u64,
    log: Vec<RenderEntry>,
    texts: BTreeMap<Target, String>,
    attributes: BTreeMap<(Target, &'static str), String>,
    styles: BTreeMap<(Target, &'static str), String>,
    classes: BTreeMap<Target, BTreeSet<&'static str>>,
    visible: BTreeMap<Target, bool>,
    values: BTreeMap<Target, FieldValue>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// A surface where every target exists.
    pub fn new() -> Self {
        Self::with_presence(Presence::All)
    }

    /// A surface holding only `targets`.
    pub fn with_targets(targets: impl IntoIterator<Item = Target>) -> Self {
        Self::with_presence(Presence::Only(targets.into_iter().collect()))
    }

    /// A surface holding everything except `targets`.
    pub fn without_targets(targets: impl IntoIterator<Item = Target>) -> Self {
        Self::with_presence(Presence::AllExcept(targets.into_iter().collect()))
    }

    fn with_presence(presence: Presence) -> Self {
        Self {
            presence,
            now_ms: 0,
            log: Vec::new(),
            texts: BTreeMap::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            classes: BTreeMap::new(),
            visible: BTreeMap::new(),
            values: BTreeMap::new(),
        }
    }

    pub fn log(&self) -> &[RenderEntry] {
        &self.log
    }

    /// Take the log, leaving element state in place.
    pub fn drain_log(&mut self) -> Vec<RenderEntry> {
        std::mem::take(&mut self.log)
    }

    pub fn text(&self, target: &Target) -> Option<&str> {
        self.texts.get(target).map(String::as_str)
    }

    pub fn attribute(&self, target: &Target, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|((t, n), _)| t == target && *n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn style(&self, target: &Target, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|((t, p), _)| t == target && *p == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes
            .get(target)
            .is_some_and(|classes| classes.contains(class))
    }

    pub fn is_visible(&self, target: &Target) -> Option<bool> {
        self.visible.get(target).copied()
    }

    pub fn value(&self, target: &Target) -> Option<&FieldValue> {
        self.values.get(target)
    }
}

impl RenderSurface for RecordingSurface {
    fn has_target(&self, target: &Target) -> bool {
        match &self.presence {
            Presence::All => true,
            Presence::Only(targets) => targets.contains(target),
            Presence::AllExcept(targets) => !targets.contains(target),
        }
    }

    fn apply(&mut self, op: &RenderOp) -> bool {
        if !self.has_target(op.target()) {
            return false;
        }
        match op {
            RenderOp::SetText { target, text } => {
                self.texts.insert(target.clone(), text.clone());
            }
            RenderOp::SetAttribute {
                target,
                name,
                value,
            } => {
                self.attributes
                    .insert((target.clone(), *name), value.clone());
            }
            RenderOp::SetStyle {
                target,
                property,
                value,
            } => {
                self.styles
                    .insert((target.clone(), *property), value.clone());
            }
            RenderOp::AddClass { target, class } => {
                self.classes.entry(target.clone()).or_default().insert(*class);
            }
            RenderOp::RemoveClass { target, class } => {
                if let Some(classes) = self.classes.get_mut(target) {
                    classes.remove(class);
                }
            }
            RenderOp::SetVisible { target, visible } => {
                self.visible.insert(target.clone(), *visible);
            }
            RenderOp::SetValue { target, value } => {
                self.values.insert(target.clone(), value.clone());
            }
        }
        self.log.push(RenderEntry {
            at_ms: self.now_ms,
            op: op.clone(),
        });
        true
    }

    fn set_time(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }
}
