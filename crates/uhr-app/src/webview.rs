//! WRY web view hosting the clock document.
//!
//! The composed document is served through the `uhr` custom protocol so that
//! relative references in the page resolve against the resource directory.
//!
//! The web view background follows fullscreen state on Linux and Windows
//! only; on macOS wry ignores `set_background_color` and the transparent web
//! view shows the window background through.

use std::borrow::Cow;
use std::rc::Rc;

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::{debug, info, warn};
use url::Url;
use wry::http::{header::CONTENT_TYPE, Request, Response};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use uhr_content::{document_url, ContentSurface, DocumentSlot, ProtocolResponse, SCHEME};
use uhr_core::{ShellConfig, UhrError, UhrResult};
use uhr_shell::Appearance;

use crate::events::UserEvent;
use crate::ipc::{IpcMessage, DRAG_OVERLAY};

/// Content surface backed by a WRY web view.
pub struct ClockSurface {
    webview: WebView,
    slot: DocumentSlot,
}

impl ClockSurface {
    /// Repaint the page background to match the window.
    ///
    /// wry does not implement this on macOS, where the window background
    /// alone turns black in fullscreen.
    pub fn apply_appearance(&self, appearance: Appearance) {
        if let Err(e) = self.webview.set_background_color(appearance.background()) {
            warn!("Failed to set web view background: {}", e);
        }
    }
}

impl ContentSurface for ClockSurface {
    fn load_document(&self, html: &str, base_url: &Url) -> UhrResult<()> {
        self.slot.publish(html, base_url);
        debug!("Loading clock document from {}", document_url());
        self.webview
            .load_url(document_url())
            .map_err(|e| UhrError::webview(e.to_string()))
    }
}

/// Build the clock web view as a child of `window`.
pub fn build_webview(
    window: &Window,
    proxy: EventLoopProxy<UserEvent>,
    config: &ShellConfig,
) -> UhrResult<Rc<ClockSurface>> {
    let slot = DocumentSlot::new();

    let protocol_slot = slot.clone();
    let protocol_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let ipc_proxy = proxy;

    let mut builder = WebViewBuilder::new()
        .with_transparent(true)
        .with_background_color((0, 0, 0, 0))
        .with_devtools(cfg!(debug_assertions))
        .with_custom_protocol(SCHEME.to_string(), move |_id, request: Request<Vec<u8>>| {
            let path = request.uri().path().to_string();
            let answer = protocol_slot.resolve(&path);
            if answer.status == 404 {
                let reason = format!("{} not found", path);
                let _ = protocol_proxy.send_event(UserEvent::ContentFailed {
                    document: answer.document,
                    reason,
                });
            }
            into_http(answer)
        })
        .with_on_page_load_handler(move |event, url| match event {
            PageLoadEvent::Started => debug!("Page load started: {}", url),
            PageLoadEvent::Finished => {
                let _ = load_proxy.send_event(UserEvent::ContentLoaded);
            }
        })
        .with_ipc_handler(move |message: Request<String>| {
            match IpcMessage::parse(message.body()) {
                Ok(IpcMessage::StartDrag) => {
                    let _ = ipc_proxy.send_event(UserEvent::StartDrag);
                }
                Err(e) => warn!("Ignoring IPC message {:?}: {}", message.body(), e),
            }
        });

    if config.drag_overlay {
        builder = builder.with_initialization_script(DRAG_OVERLAY);
    }

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(window);

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| UhrError::window("window has no GTK container"))?;
        builder.build_gtk(vbox)
    };

    let webview = webview.map_err(|e| UhrError::webview(e.to_string()))?;
    info!("Clock web view created");

    Ok(Rc::new(ClockSurface { webview, slot }))
}

fn into_http(answer: ProtocolResponse) -> Response<Cow<'static, [u8]>> {
    let status = answer.status;
    let mime = answer.mime;
    match Response::builder()
        .status(status)
        .header(CONTENT_TYPE, mime)
        .body(Cow::Owned(answer.body))
    {
        Ok(response) => response,
        Err(e) => {
            warn!("Could not build protocol response: {}", e);
            let mut fallback = Response::new(Cow::Borrowed(&b""[..]));
            *fallback.status_mut() = wry::http::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        }
    }
}
