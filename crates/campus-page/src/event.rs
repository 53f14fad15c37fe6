//! Input events and timer tasks understood by the page.

use campus_model::{Acknowledgement, CostResult, FieldId, FieldValue};
use campus_rotator::CarouselTask;
use campus_validate::SubmitOutcome;
use serde::{Deserialize, Serialize};

use crate::reveal::ScrollEntry;

/// A user interaction, with everything the handler needs in its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    DotClicked {
        index: usize,
    },
    NextSlide,
    PreviousSlide,
    TabClicked {
        tab: String,
    },
    FieldInput {
        field: FieldId,
        value: FieldValue,
    },
    FieldBlur {
        field: FieldId,
    },
    Submit,
    SaveDraft,
    CostChanged {
        base_cost: String,
        scholarship_percent: String,
    },
    Scroll {
        viewport_height: f64,
        elements: Vec<ScrollEntry>,
    },
    Resize {
        width: u32,
    },
    MenuToggled {
        open: bool,
    },
    ConfirmableClick {
        message: String,
    },
}

/// An input event delivered at a virtual time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub at_ms: u64,
    pub event: InputEvent,
}

/// Timer tasks of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTask {
    Carousel(CarouselTask),
    RefreshCountdown,
    RevealArticle { index: usize },
}

impl From<CarouselTask> for PageTask {
    fn from(task: CarouselTask) -> Self {
        Self::Carousel(task)
    }
}

/// What handling an event produced, beyond render operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Updated,
    Submitted(SubmitOutcome),
    DraftSaved(Acknowledgement),
    Cost(CostResult),
    Confirmed,
    Prevented,
}
