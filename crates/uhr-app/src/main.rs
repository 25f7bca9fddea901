//! Uhr - a station clock on the desktop
//!
//! Opens a borderless, transparent, always-square window and loads the
//! bundled clock page into it.

mod events;
mod ipc;
mod platform;
mod webview;
mod window;

use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use muda::{Menu, MenuEvent};
use tao::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::WindowBuilder,
};
use tracing::{debug, error, info, warn};

use uhr_content::{ContentHost, DocumentSpec, LoadOutcome, LoadStatus, ResourceDir};
use uhr_core::{init_logging, LogConfig, ShellConfig, UhrError, UhrResult, MIN_SIDE};
use uhr_shell::{
    Appearance, CloseAction, DeferredScheduler, NotificationContext, ResizeOutcome,
    ShellNotification, WindowShell,
};

use events::{ProxyScheduler, UserEvent};
use platform::menu_ids;
use window::ClockWindow;

fn main() {
    if let Err(e) = init_logging(LogConfig::from_env()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run() {
        error!("Uhr failed to start: {}", e);
        std::process::exit(1);
    }
}

fn run() -> UhrResult<()> {
    let config = ShellConfig::from_env()?;
    let platform = platform::get_platform_manager();
    info!(
        "Starting Uhr on {} ({})",
        platform.platform_name(),
        platform.capabilities().webview_engine.name()
    );

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let builder = WindowBuilder::new()
        .with_title("Uhr")
        .with_inner_size(LogicalSize::new(config.initial_side, config.initial_side))
        .with_min_inner_size(LogicalSize::new(MIN_SIDE, MIN_SIDE))
        .with_decorations(false)
        .with_transparent(true);

    #[cfg(target_os = "macos")]
    let builder = {
        use tao::platform::macos::WindowBuilderExtMacOS;
        builder.with_has_shadow(false)
    };

    let window = builder
        .build(&event_loop)
        .map_err(|e| UhrError::window(e.to_string()))?;

    // `event_loop.run` never returns, so this lives until the process exits
    let menu = Menu::new();
    if let Err(e) = platform.initialize_menu(&window, &menu) {
        warn!("{}", e);
    }
    let menu_proxy = Mutex::new(proxy.clone());
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        if let Ok(proxy) = menu_proxy.lock() {
            let _ = proxy.send_event(UserEvent::Menu(event.id.0.clone()));
        }
    }));

    let surface = webview::build_webview(&window, proxy.clone(), &config)?;
    let clock = Rc::new(ClockWindow::new(window));

    let scheduler: Rc<dyn DeferredScheduler> = Rc::new(ProxyScheduler::new(proxy));
    let capabilities =
        platform.shell_capabilities(Duration::from_millis(config.redraw_nudge_delay_ms));
    let mut shell = WindowShell::new(Some(clock.clone()), &config, capabilities, scheduler);

    // The web view paints its own background over the window's (not on macOS,
    // where wry ignores the call and the window background shows through)
    for notification in ShellNotification::ALL {
        let surface = surface.clone();
        shell.on(
            notification,
            Box::new(move |_: &Rc<ClockWindow>, ctx: &NotificationContext| {
                surface.apply_appearance(Appearance::for_fullscreen(ctx.fullscreen));
            }),
        );
    }
    shell.launch();
    surface.apply_appearance(Appearance::for_fullscreen(shell.is_fullscreen()));

    // A configured side larger than the screen is corrected here
    let initial = match shell.on_resized(shell.last_frame()) {
        ResizeOutcome::Corrected(frame) => frame,
        _ => shell.last_frame(),
    };

    let resources = ResourceDir::locate(config.resource_dir.as_deref());
    info!("Resources: {}", resources.root().display());
    let mut host = ContentHost::new(
        surface,
        resources,
        DocumentSpec::from_config(&config),
        config.reload_on_resize,
    );
    if host.attach(initial) == LoadStatus::Failed {
        warn!("Clock document not loaded, window stays empty");
    }

    event_loop.run(move |event, _target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => match shell.on_resized(clock.logical(size)) {
                    ResizeOutcome::Accepted(frame) | ResizeOutcome::Fullscreen(frame) => {
                        host.on_size_changed(frame);
                    }
                    ResizeOutcome::Corrected(_) | ResizeOutcome::Ignored => {}
                },
                WindowEvent::Moved(_) => {
                    shell.poll_fullscreen();
                    shell.poll_screen();
                }
                WindowEvent::Focused(true) => {
                    shell.poll_fullscreen();
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    shell.on_scale_factor_changed();
                }
                WindowEvent::CloseRequested => {
                    if shell.on_close_requested() == CloseAction::Exit {
                        info!("Window closed, exiting");
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            },

            Event::Reopen { .. } => shell.on_reopen(),

            Event::UserEvent(user_event) => match user_event {
                UserEvent::StartDrag => shell.start_drag(),
                UserEvent::RedrawNudge => shell.redraw_nudge(),
                UserEvent::ContentLoaded => host.on_outcome(LoadOutcome::Finished),
                UserEvent::ContentFailed { document: true, reason } => {
                    host.on_outcome(LoadOutcome::ProvisionalFailed(reason));
                }
                UserEvent::ContentFailed { document: false, reason } => {
                    host.on_outcome(LoadOutcome::Failed(reason));
                }
                UserEvent::Menu(id) if id == menu_ids::TOGGLE_FULLSCREEN => {
                    clock.toggle_fullscreen();
                }
                UserEvent::Menu(id) => debug!("Unhandled menu item {}", id),
            },

            _ => {}
        }
    })
}
