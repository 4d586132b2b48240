use std::time::Duration;

use ratatui::layout::Rect;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::ui::mvi::UiEffect;
use crate::ui::layout::layout_regions;
use crate::ui::result_panel::{body_rows, result_anchor};
use crate::ui::submission::{RequestId, Settlement, SubmissionController, SubmissionState};
use crate::ui::typing::{TypingAnimator, TypingCadence};
use crate::ui::url_field::UrlField;

/// UI root. Owns the banner animator and the submission controller; the two
/// never talk to each other.
pub struct App<C: Clock = SystemClock> {
    should_quit: bool,
    banner: TypingAnimator<C>,
    url_field: UrlField,
    submission: SubmissionController,
    /// Body scroll offset in screen rows.
    scroll: u16,
    spinner_tick: u8,
    /// Text area of the body: width excludes the side borders.
    body_width: u16,
    body_height: u16,
}

/// Screen size assumed until the first resize.
const INITIAL_SCREEN: (u16, u16) = (80, 24);

impl<C: Clock> App<C> {
    /// Mount the UI. The banner starts animating right away.
    pub fn new(config: &Config, submission: SubmissionController, clock: C) -> Self {
        let banner = TypingAnimator::start(
            config.banner.phrases.clone(),
            TypingCadence::from(&config.banner),
            clock,
        );
        let mut app = Self {
            should_quit: false,
            banner,
            url_field: UrlField::new(),
            submission,
            scroll: 0,
            spinner_tick: 0,
            body_width: 0,
            body_height: 0,
        };
        app.resize(INITIAL_SCREEN.0, INITIAL_SCREEN.1);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn banner(&self) -> &TypingAnimator<C> {
        &self.banner
    }

    pub fn url_field(&self) -> &UrlField {
        &self.url_field
    }

    pub fn url_field_mut(&mut self) -> &mut UrlField {
        &mut self.url_field
    }

    pub fn submission(&self) -> &SubmissionState {
        self.submission.state()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    /// Submit whatever is in the URL field.
    pub fn submit(&mut self) -> Option<RequestId> {
        let request_id = self.submission.submit(self.url_field.value());
        self.run_effects();
        request_id
    }

    pub fn on_settled(&mut self, settlement: Settlement) -> bool {
        let changed = self.submission.apply(settlement);
        self.run_effects();
        changed
    }

    /// Periodic tick from the event thread; drives the loading spinner.
    pub fn on_tick(&mut self) {
        if self.submission.state().is_pending() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Fire the banner's pending tick if due. Returns true when it changed.
    pub fn poll_banner(&mut self) -> bool {
        self.banner.poll()
    }

    /// How long the event loop may sleep before the banner needs a redraw.
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.banner.time_until_redraw()
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll() as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }

    /// Track the terminal size so scroll limits follow the wrapped body.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        let body = layout_regions(Rect::new(0, 0, cols, rows)).body;
        self.body_width = body.width.saturating_sub(2);
        self.body_height = body.height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Unmount: clears the banner's pending tick.
    pub fn teardown(&mut self) {
        self.banner.stop();
    }

    /// Furthest offset that still fills the body; the last row sits at the
    /// bottom edge.
    fn max_scroll(&self) -> u16 {
        let rows = body_rows(self.submission.state(), self.spinner_tick, self.body_width);
        let max = rows.saturating_sub(self.body_height as usize);
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    fn run_effects(&mut self) {
        for effect in self.submission.take_effects() {
            match effect {
                UiEffect::ScrollToResult => {
                    self.scroll = result_anchor(self.body_width).min(self.max_scroll());
                }
            }
        }
    }
}
