//! Hero carousel controller: autoplay, manual navigation and the two-phase
//! content swap, all driven through the page scheduler.

use campus_core::{RenderOp, RenderSurface, Scheduler, Target, TimerId};
use campus_model::{ManualNavigation, Result, SiteConfig, Slide};
use serde::Serialize;

use crate::rotator::{ChangeCause, SlideChange, SlideRotator};
use crate::transition;

/// Timer tasks owned by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum CarouselTask {
    /// Autoplay tick.
    Autoplay,
    /// End of the transition window: show slide `index`.
    Swap { index: usize },
}

/// Settings that shape carousel timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselOptions {
    pub transition_ms: u64,
    pub manual_navigation: ManualNavigation,
}

impl From<&SiteConfig> for CarouselOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            transition_ms: config.transition_ms,
            manual_navigation: config.manual_navigation,
        }
    }
}

/// Targets that must exist before autoplay is armed.
pub fn required_targets() -> [Target; 3] {
    [Target::HeroContent, Target::HeroBackground, Target::HeroDot(0)]
}

#[derive(Debug)]
pub struct HeroCarousel {
    rotator: SlideRotator,
    options: CarouselOptions,
    autoplay: Option<TimerId>,
    mounted: bool,
}

impl HeroCarousel {
    pub fn new(rotator: SlideRotator, options: CarouselOptions) -> Self {
        Self {
            rotator,
            options,
            autoplay: None,
            mounted: false,
        }
    }

    /// Build from configuration.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let rotator = SlideRotator::new(config.resolved_slides(), config.autoplay_interval_ms)?;
        Ok(Self::new(rotator, CarouselOptions::from(config)))
    }

    pub fn rotator(&self) -> &SlideRotator {
        &self.rotator
    }

    pub fn current_slide(&self) -> &Slide {
        self.rotator.current_slide()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn autoplay_timer(&self) -> Option<TimerId> {
        self.autoplay
    }

    /// Sync the indicators and arm autoplay.
    ///
    /// When the surface lacks the hero content, background or dots, the
    /// carousel stays inert and returns no operations.
    pub fn mount<T, S>(&mut self, scheduler: &mut Scheduler<T>, surface: &S) -> Vec<RenderOp>
    where
        T: From<CarouselTask>,
        S: RenderSurface + ?Sized,
    {
        let missing: Vec<String> = required_targets()
            .iter()
            .filter(|target| !surface.has_target(target))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            tracing::error!(?missing, "hero carousel elements missing, autoplay not started");
            return Vec::new();
        }

        if !self.mounted {
            self.mounted = true;
            self.arm_autoplay(scheduler);
            tracing::info!(
                slides = self.rotator.len(),
                interval_ms = self.rotator.interval_ms(),
                "hero carousel started"
            );
        }
        transition::indicators(self.rotator.current_index(), self.rotator.len())
    }

    /// Handle a carousel timer.
    pub fn handle<T>(&mut self, task: CarouselTask, scheduler: &mut Scheduler<T>) -> Vec<RenderOp>
    where
        T: From<CarouselTask>,
    {
        match task {
            CarouselTask::Autoplay => {
                let change = self.rotator.advance();
                tracing::debug!(to = change.to, "autoplay advance");
                self.begin_swap(change, scheduler)
            }
            CarouselTask::Swap { index } => match self.rotator.slide(index) {
                Some(slide) => {
                    tracing::debug!(index, image = %slide.image, "hero content swapped");
                    transition::swap_in(slide)
                }
                None => Vec::new(),
            },
        }
    }

    /// Dot click.
    pub fn jump_to<T>(
        &mut self,
        index: usize,
        scheduler: &mut Scheduler<T>,
    ) -> Result<Vec<RenderOp>>
    where
        T: From<CarouselTask>,
    {
        let change = self.rotator.jump_to(index).inspect_err(|error| {
            tracing::warn!(%error, "slide jump rejected");
        })?;
        Ok(self.manual_change(change, scheduler))
    }

    pub fn next<T>(&mut self, scheduler: &mut Scheduler<T>) -> Vec<RenderOp>
    where
        T: From<CarouselTask>,
    {
        let change = self.rotator.next();
        self.manual_change(change, scheduler)
    }

    pub fn previous<T>(&mut self, scheduler: &mut Scheduler<T>) -> Vec<RenderOp>
    where
        T: From<CarouselTask>,
    {
        let change = self.rotator.previous();
        self.manual_change(change, scheduler)
    }

    fn manual_change<T>(
        &mut self,
        change: SlideChange,
        scheduler: &mut Scheduler<T>,
    ) -> Vec<RenderOp>
    where
        T: From<CarouselTask>,
    {
        debug_assert_ne!(change.cause, ChangeCause::Autoplay);
        tracing::debug!(
            from = change.from,
            to = change.to,
            cause = ?change.cause,
            "manual slide change"
        );
        if self.options.manual_navigation == ManualNavigation::RestartCadence
            && let Some(timer) = self.autoplay.take()
        {
            scheduler.cancel(timer);
            self.arm_autoplay(scheduler);
        }
        self.begin_swap(change, scheduler)
    }

    /// Phase one now, phase two after the transition window. The slide to
    /// show is captured here, so overlapping swaps settle on the latest one.
    fn begin_swap<T>(&mut self, change: SlideChange, scheduler: &mut Scheduler<T>) -> Vec<RenderOp>
    where
        T: From<CarouselTask>,
    {
        scheduler.schedule_once(
            self.options.transition_ms,
            T::from(CarouselTask::Swap { index: change.to }),
        );
        let mut ops = transition::fade_out();
        ops.extend(transition::indicators(change.to, self.rotator.len()));
        ops
    }

    fn arm_autoplay<T>(&mut self, scheduler: &mut Scheduler<T>)
    where
        T: From<CarouselTask>,
    {
        let timer = scheduler.schedule_every(
            self.rotator.interval_ms(),
            T::from(CarouselTask::Autoplay),
        );
        self.autoplay = Some(timer);
    }
}
