//! The page: owns every component, routes input events and timer tasks to
//! them, and applies the resulting render operations to the surface.

use campus_core::{Clock, RenderOp, RenderSurface, Scheduler, Target, apply_all};
use campus_model::{CampusError, Result, SiteConfig};
use campus_rotator::HeroCarousel;
use campus_validate::{FormSession, FormValidator};
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::articles;
use crate::calculator::{self, CostCalculator};
use crate::confirm::{FixedAnswer, Prompt};
use crate::countdown::Countdown;
use crate::date;
use crate::event::{EventOutcome, InputEvent, PageTask, ScheduledEvent};
use crate::menu::OffcanvasMenu;
use crate::reveal::ScrollReveal;
use crate::tabs::TabSet;

/// Elements of the host document that vary from page to page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Number of `.main-article` elements.
    pub articles: usize,
    /// Ids of `.fade-in` elements.
    pub reveal_ids: Vec<String>,
}

pub struct Page<S: RenderSurface> {
    config: SiteConfig,
    scheduler: Scheduler<PageTask>,
    surface: S,
    origin: NaiveDateTime,
    carousel: HeroCarousel,
    form: FormSession,
    calculator: CostCalculator,
    countdown: Countdown,
    tabs: TabSet,
    reveal: ScrollReveal,
    menu: OffcanvasMenu,
    prompt: Box<dyn Prompt>,
    mounted: bool,
}

impl<S: RenderSurface> Page<S> {
    /// Build every component. Fails on invalid configuration; nothing is
    /// scheduled until [`Page::mount`].
    pub fn new(config: SiteConfig, surface: S, clock: &dyn Clock) -> Result<Self> {
        config.validate()?;
        let carousel = HeroCarousel::from_config(&config)?;
        let form = FormSession::new(FormValidator::admission(&config)?);
        let tabs = TabSet::new(config.tabs.clone())?;
        Ok(Self {
            scheduler: Scheduler::new(),
            surface,
            origin: clock.now(),
            carousel,
            form,
            calculator: CostCalculator::from_config(&config),
            countdown: Countdown::new(config.countdown_deadline, config.countdown_refresh_ms),
            tabs,
            reveal: ScrollReveal::from_config(&config),
            menu: OffcanvasMenu::new(config.desktop_breakpoint),
            prompt: Box::new(FixedAnswer(true)),
            mounted: false,
            config,
        })
    }

    /// Replace the confirmation prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Prompt + 'static) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn carousel(&self) -> &HeroCarousel {
        &self.carousel
    }

    pub fn form(&self) -> &FormSession {
        &self.form
    }

    pub fn calculator(&self) -> &CostCalculator {
        &self.calculator
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn reveal(&self) -> &ScrollReveal {
        &self.reveal
    }

    pub fn menu(&self) -> &OffcanvasMenu {
        &self.menu
    }

    /// Virtual milliseconds since the page was built.
    pub fn elapsed_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Wall-clock time as seen by the page.
    pub fn now(&self) -> NaiveDateTime {
        let elapsed = i64::try_from(self.scheduler.now_ms()).unwrap_or(i64::MAX);
        self.origin + TimeDelta::milliseconds(elapsed)
    }

    /// Number of armed timers.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Start every component. Mounting twice does nothing.
    pub fn mount(&mut self, layout: &PageLayout) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let mut ops = self.carousel.mount(&mut self.scheduler, &self.surface);
        ops.extend(self.reveal.observe(layout.reveal_ids.iter().cloned()));

        let now = self.now();
        if self.surface.has_target(&Target::CurrentDate) {
            ops.extend(date::render(now.date()));
        }
        for index in 0..layout.articles {
            self.scheduler.schedule_once(
                articles::reveal_delay_ms(index, self.config.article_stagger_ms),
                PageTask::RevealArticle { index },
            );
        }

        ops.extend(self.tabs.render());
        ops.extend(calculator::render(&self.calculator.result()));

        ops.extend(self.countdown.refresh(now));
        self.scheduler
            .schedule_every(self.countdown.refresh_ms(), PageTask::RefreshCountdown);

        tracing::info!(
            articles = layout.articles,
            reveal = layout.reveal_ids.len(),
            "page mounted"
        );
        self.apply(&ops);
    }

    /// Handle one user interaction.
    ///
    /// Out-of-range slides and unknown tabs are reported as errors and leave
    /// the page unchanged.
    pub fn handle(&mut self, event: InputEvent) -> Result<EventOutcome> {
        tracing::trace!(?event, "input event");
        let (outcome, ops) = match event {
            InputEvent::DotClicked { index } => (
                EventOutcome::Updated,
                self.carousel.jump_to(index, &mut self.scheduler)?,
            ),
            InputEvent::NextSlide => (
                EventOutcome::Updated,
                self.carousel.next(&mut self.scheduler),
            ),
            InputEvent::PreviousSlide => (
                EventOutcome::Updated,
                self.carousel.previous(&mut self.scheduler),
            ),
            InputEvent::TabClicked { tab } => (EventOutcome::Updated, self.tabs.select(&tab)?),
            InputEvent::FieldInput { field, value } => {
                (EventOutcome::Updated, self.form.input(field, value))
            }
            InputEvent::FieldBlur { field } => (EventOutcome::Updated, self.form.blur(field)),
            InputEvent::Submit => {
                let (outcome, ops) = self.form.submit();
                (EventOutcome::Submitted(outcome), ops)
            }
            InputEvent::SaveDraft => {
                let (ack, ops) = self.form.save_draft();
                (EventOutcome::DraftSaved(ack), ops)
            }
            InputEvent::CostChanged {
                base_cost,
                scholarship_percent,
            } => {
                let (result, ops) = self.calculator.update(&base_cost, &scholarship_percent);
                (EventOutcome::Cost(result), ops)
            }
            InputEvent::Scroll {
                viewport_height,
                elements,
            } => (
                EventOutcome::Updated,
                self.reveal.on_scroll(viewport_height, &elements),
            ),
            InputEvent::Resize { width } => (EventOutcome::Updated, self.menu.on_resize(width)),
            InputEvent::MenuToggled { open } => (EventOutcome::Updated, self.menu.set_open(open)),
            InputEvent::ConfirmableClick { message } => {
                if self.prompt.confirm(&message) {
                    (EventOutcome::Confirmed, Vec::new())
                } else {
                    tracing::debug!("confirmation refused, default action prevented");
                    (EventOutcome::Prevented, Vec::new())
                }
            }
        };
        self.apply(&ops);
        Ok(outcome)
    }

    /// Fire every timer due up to `until_ms` and leave the clock there.
    pub fn run_until(&mut self, until_ms: u64) {
        while let Some(fired) = self.scheduler.pop_due(until_ms) {
            self.surface.set_time(fired.at_ms);
            let ops = self.dispatch(fired.task);
            apply_all(&mut self.surface, &ops);
        }
        self.scheduler.finish_at(until_ms);
        self.surface.set_time(self.scheduler.now_ms());
    }

    pub fn advance_by(&mut self, ms: u64) {
        let until = self.scheduler.now_ms().saturating_add(ms);
        self.run_until(until);
    }

    /// Deliver `script` in time order, running timers in between, then run
    /// until `until_ms`. Each event's result is returned with its time.
    pub fn play(
        &mut self,
        script: &[ScheduledEvent],
        until_ms: u64,
    ) -> Vec<(u64, std::result::Result<EventOutcome, CampusError>)> {
        let mut ordered: Vec<&ScheduledEvent> = script.iter().collect();
        ordered.sort_by_key(|scheduled| scheduled.at_ms);

        let mut results = Vec::with_capacity(ordered.len());
        for scheduled in ordered {
            self.run_until(scheduled.at_ms);
            let result = self.handle(scheduled.event.clone());
            if let Err(error) = &result {
                tracing::warn!(at_ms = scheduled.at_ms, %error, "scripted event rejected");
            }
            results.push((self.scheduler.now_ms(), result));
        }
        self.run_until(until_ms);
        results
    }

    fn dispatch(&mut self, task: PageTask) -> Vec<RenderOp> {
        match task {
            PageTask::Carousel(task) => self.carousel.handle(task, &mut self.scheduler),
            PageTask::RefreshCountdown => {
                let now = self.now();
                self.countdown.refresh(now)
            }
            PageTask::RevealArticle { index } => articles::reveal(index),
        }
    }

    fn apply(&mut self, ops: &[RenderOp]) {
        self.surface.set_time(self.scheduler.now_ms());
        apply_all(&mut self.surface, ops);
    }
}
