//! Window shell - chrome, square resize clamp, fullscreen transitions.

use crate::appearance::Appearance;
use crate::notifications::{
    DeferredScheduler, DeferredTask, Dispatcher, Handler, NotificationContext, ShellCapabilities,
    ShellNotification,
};
use crate::window::ShellWindow;
use std::collections::VecDeque;
use std::rc::Rc;
use uhr_core::{clamp_square, DominantAxis, FrameSize, ScreenBounds, ShellConfig, MIN_SIDE};

/// Sizes closer than this are treated as equal. Logical sizes go through a
/// physical-pixel round trip and rarely come back exact.
const SIZE_TOLERANCE: f64 = 0.5;

/// What the shell did with a reported resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    /// Already square and in range.
    Accepted(FrameSize),
    /// The window was resized to this square frame.
    Corrected(FrameSize),
    /// Fullscreen frames are taken as they come.
    Fullscreen(FrameSize),
    /// Part of a redraw nudge, or there is no window.
    Ignored,
}

/// What should happen when the user closes the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    Exit,
    Hide,
}

pub struct WindowShell<W: ShellWindow> {
    window: Option<W>,
    dispatcher: Dispatcher<W>,
    axis: DominantAxis,
    close_action: CloseAction,
    last_frame: FrameSize,
    fullscreen: bool,
    screen_id: Option<String>,
    min_side: f64,
    nudge_frames: VecDeque<FrameSize>,
}

impl<W: ShellWindow + 'static> WindowShell<W> {
    /// Build the shell and register its notification handlers.
    ///
    /// `window` may be absent, in which case every operation is a no-op.
    pub fn new(
        window: Option<W>,
        config: &ShellConfig,
        capabilities: ShellCapabilities,
        scheduler: Rc<dyn DeferredScheduler>,
    ) -> Self {
        let mut dispatcher = Dispatcher::new();
        for notification in ShellNotification::ALL {
            dispatcher.register(notification, background_handler());
        }
        if capabilities.needs_redraw_nudge {
            let delay = capabilities.redraw_nudge_delay;
            dispatcher.register(
                ShellNotification::ExitedFullscreen,
                Box::new(move |_: &W, _: &NotificationContext| {
                    scheduler.schedule(delay, DeferredTask::RedrawNudge)
                }),
            );
        }

        let close_action = if config.close_terminates {
            CloseAction::Exit
        } else if capabilities.supports_reopen {
            CloseAction::Hide
        } else {
            log::info!("Hidden windows cannot be reopened here, close will exit");
            CloseAction::Exit
        };

        Self {
            window,
            dispatcher,
            axis: config.dominant_axis,
            close_action,
            last_frame: FrameSize::ZERO,
            fullscreen: false,
            screen_id: None,
            min_side: MIN_SIDE,
            nudge_frames: VecDeque::new(),
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn last_frame(&self) -> FrameSize {
        self.last_frame
    }

    /// Add a handler for a notification, run after the built-in ones.
    pub fn on(&mut self, notification: ShellNotification, handler: Handler<W>) {
        self.dispatcher.register(notification, handler);
    }

    /// Initial window setup at launch.
    pub fn launch(&mut self) {
        let Some(window) = self.window.as_ref() else {
            log::warn!("No window at launch, shell inactive");
            return;
        };

        self.fullscreen = window.is_fullscreen();
        self.screen_id = window.screen_id();
        self.last_frame = window.inner_size();
        self.min_side = min_side_for(window.screen_bounds());
        window.set_min_inner_size(FrameSize::square(self.min_side));
        window.apply_appearance(Appearance::for_fullscreen(self.fullscreen));

        log::info!(
            "Window shell ready at {}x{} (fullscreen: {})",
            self.last_frame.width,
            self.last_frame.height,
            self.fullscreen
        );
    }

    /// Deliver a notification: update fullscreen state, then run handlers.
    pub fn notify(&mut self, notification: ShellNotification) {
        match notification {
            ShellNotification::EnteredFullscreen => self.fullscreen = true,
            ShellNotification::ExitedFullscreen => self.fullscreen = false,
            ShellNotification::ScreenChanged => {}
        }
        log::debug!("{:?} (fullscreen: {})", notification, self.fullscreen);

        let Some(window) = self.window.as_ref() else {
            return;
        };
        let ctx = NotificationContext {
            notification,
            fullscreen: self.fullscreen,
        };
        self.dispatcher.dispatch(window, &ctx);
    }

    /// Compare the window's fullscreen flag with the last observed one and
    /// deliver the matching notification on a change.
    pub fn poll_fullscreen(&mut self) -> Option<ShellNotification> {
        let now = self.window.as_ref()?.is_fullscreen();
        if now == self.fullscreen {
            return None;
        }
        let notification = if now {
            ShellNotification::EnteredFullscreen
        } else {
            ShellNotification::ExitedFullscreen
        };
        self.notify(notification);
        Some(notification)
    }

    /// Deliver `ScreenChanged` when the hosting screen differs from the last one.
    pub fn poll_screen(&mut self) -> bool {
        let Some(window) = self.window.as_ref() else {
            return false;
        };
        let current = window.screen_id();
        if current == self.screen_id {
            return false;
        }
        log::info!("Window moved to screen {:?}", current);
        self.screen_id = current;
        self.notify(ShellNotification::ScreenChanged);
        true
    }

    /// Scale factor changes always count as a screen change.
    pub fn on_scale_factor_changed(&mut self) {
        if let Some(window) = self.window.as_ref() {
            self.screen_id = window.screen_id();
        }
        self.notify(ShellNotification::ScreenChanged);
    }

    /// Handle a resize reported by the window system.
    ///
    /// Non-square sizes are snapped to a square whose side follows the
    /// dominant dimension, clamped to `[300, smaller screen side]`.
    pub fn on_resized(&mut self, reported: FrameSize) -> ResizeOutcome {
        if self.window.is_none() {
            return ResizeOutcome::Ignored;
        }
        self.poll_fullscreen();

        if self.take_nudge_frame(reported) {
            self.last_frame = reported;
            return ResizeOutcome::Ignored;
        }
        if self.fullscreen {
            self.last_frame = reported;
            return ResizeOutcome::Fullscreen(reported);
        }

        let Some(window) = self.window.as_ref() else {
            return ResizeOutcome::Ignored;
        };
        let screen = window
            .screen_bounds()
            .unwrap_or(ScreenBounds::new(f64::INFINITY, f64::INFINITY));
        let target = clamp_square(reported, self.last_frame, screen, self.axis);

        // Minimum follows screens smaller than MIN_SIDE
        let min_side = min_side_for(Some(screen));
        if min_side != self.min_side {
            log::debug!("Minimum side now {}", min_side);
            window.set_min_inner_size(FrameSize::square(min_side));
            self.min_side = min_side;
        }

        if approx_eq(target, reported) {
            self.last_frame = reported;
            return ResizeOutcome::Accepted(reported);
        }

        log::debug!(
            "Clamping {}x{} to {}x{}",
            reported.width,
            reported.height,
            target.width,
            target.height
        );
        window.set_inner_size(target);
        self.last_frame = target;
        ResizeOutcome::Corrected(target)
    }

    /// Grow the window by one point and shrink it back to force the web view
    /// to repaint. The two resulting resize reports are not clamped.
    pub fn redraw_nudge(&mut self) {
        if self.fullscreen {
            return;
        }
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let original = window.inner_size();
        let widened = original.widened(1.0);
        log::debug!("Redraw nudge at {}x{}", original.width, original.height);

        self.nudge_frames.push_back(widened);
        self.nudge_frames.push_back(original);
        window.set_inner_size(widened);
        window.set_inner_size(original);
    }

    /// Pointer went down on the drag overlay.
    pub fn start_drag(&self) {
        if let Some(window) = self.window.as_ref() {
            window.start_drag();
        }
    }

    /// Decide what a close request does; hides the window when not exiting.
    pub fn on_close_requested(&self) -> CloseAction {
        if self.close_action == CloseAction::Hide {
            if let Some(window) = self.window.as_ref() {
                log::info!("Close requested, hiding window");
                window.set_visible(false);
            }
        }
        self.close_action
    }

    /// The application was re-activated (dock click) with no visible window.
    pub fn on_reopen(&self) {
        if let Some(window) = self.window.as_ref() {
            window.set_visible(true);
        }
    }

    /// Consume queued nudge frames up to one matching `reported`.
    ///
    /// Back-to-back resizes may be coalesced into a single report, so a match
    /// on a later frame drops the earlier ones too. A report matching none of
    /// them means the nudge reports were lost and the queue is cleared.
    fn take_nudge_frame(&mut self, reported: FrameSize) -> bool {
        if self.nudge_frames.is_empty() {
            return false;
        }
        match self
            .nudge_frames
            .iter()
            .position(|frame| approx_eq(*frame, reported))
        {
            Some(index) => {
                self.nudge_frames.drain(..=index);
                true
            }
            None => {
                self.nudge_frames.clear();
                false
            }
        }
    }
}

fn background_handler<W: ShellWindow + 'static>() -> Handler<W> {
    Box::new(|window: &W, ctx: &NotificationContext| {
        window.apply_appearance(Appearance::for_fullscreen(ctx.fullscreen));
    })
}

fn min_side_for(screen: Option<ScreenBounds>) -> f64 {
    screen.map_or(MIN_SIDE, |s| MIN_SIDE.min(s.max_side()))
}

fn approx_eq(a: FrameSize, b: FrameSize) -> bool {
    (a.width - b.width).abs() < SIZE_TOLERANCE && (a.height - b.height).abs() < SIZE_TOLERANCE
}
