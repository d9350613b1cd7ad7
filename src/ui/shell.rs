use anyhow::Result;

use crate::{
    domain::{
        dialog::{DialogAnswer, DialogState},
        events::{AppEvent, UiAction},
        form_state::FormValues,
        host_user::{AppliedTheme, ThemeParams},
        user_info::UserInfoView,
    },
    infra::outbox::JsonLinesOutbox,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, Dialogs, HostBridge, Page},
        dispatch::dispatch,
        form_controller::FormController,
        page,
    },
};

use super::{host_surface::HostSurface, terminal::TerminalSession, view};

/// Something the page and its dialogs can be drawn onto.
pub trait Screen {
    fn show(&mut self, surface: &HostSurface, dialog: Option<&DialogState>) -> Result<()>;
}

impl Screen for TerminalSession {
    fn show(&mut self, surface: &HostSurface, dialog: Option<&DialogState>) -> Result<()> {
        self.draw(|frame| view::render(frame, surface, dialog))
    }
}

/// Web view emulated in the terminal. Dialogs run nested event loops, so they
/// block the calling operation exactly like the host's own modals.
pub struct EmulatedWebView<S: Screen> {
    screen: S,
    events: Box<dyn AppEventSource>,
    surface: HostSurface,
}

impl<S: Screen> EmulatedWebView<S> {
    pub fn new(screen: S, events: Box<dyn AppEventSource>, surface: HostSurface) -> Self {
        Self {
            screen,
            events,
            surface,
        }
    }

    pub fn surface(&self) -> &HostSurface {
        &self.surface
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_open()
    }

    /// Draws the page, waits for one event and returns the action it triggers.
    pub fn poll_page(&mut self) -> Result<Option<UiAction>> {
        self.screen.show(&self.surface, None)?;

        let Some(event) = self.events.next_event()? else {
            return Ok(None);
        };

        let action = match event {
            AppEvent::Tick => None,
            AppEvent::QuitRequested => {
                self.surface.close();
                None
            }
            AppEvent::InputKey(key) => {
                let main_button = self.surface.main_button_action();
                page::handle_key(self.surface.form_mut(), main_button, &key)
            }
            AppEvent::Paste(text) => {
                page::paste(self.surface.form_mut(), &text);
                None
            }
        };

        Ok(action)
    }

    fn run_dialog(&mut self, mut dialog: DialogState) -> Result<DialogAnswer> {
        loop {
            self.screen.show(&self.surface, Some(&dialog))?;

            match self.events.next_event()? {
                Some(AppEvent::InputKey(key)) => {
                    if let Some(answer) = dialog.handle_key(&key) {
                        return Ok(answer);
                    }
                }
                Some(AppEvent::Paste(text)) => dialog.paste(&text),
                Some(AppEvent::QuitRequested) => {
                    self.surface.close();
                    return Ok(dialog.abandoned());
                }
                Some(AppEvent::Tick) | None => {}
            }
        }
    }
}

impl<S: Screen> HostBridge for EmulatedWebView<S> {
    fn expand(&mut self) {
        self.surface.expand();
    }

    fn theme_params(&self) -> ThemeParams {
        self.surface.theme_params().clone()
    }

    fn show_alert(&mut self, text: &str) -> Result<()> {
        self.run_dialog(DialogState::alert(text))?;
        Ok(())
    }

    fn send_data(&mut self, data: &str) -> Result<()> {
        self.surface.send_data(data)
    }

    fn close(&mut self) -> Result<()> {
        self.surface.close();
        Ok(())
    }

    fn set_main_button(&mut self, text: &str, on_click: UiAction) {
        self.surface.set_main_button(text, on_click);
    }
}

impl<S: Screen> Dialogs for EmulatedWebView<S> {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        match self.run_dialog(DialogState::prompt(message))? {
            DialogAnswer::Submitted(text) => Ok(Some(text)),
            _ => Ok(None),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(self.run_dialog(DialogState::confirm(message))? == DialogAnswer::Confirmed)
    }
}

impl<S: Screen> Page for EmulatedWebView<S> {
    fn form_values(&self) -> FormValues {
        self.surface.form().values()
    }

    fn set_name_value(&mut self, value: &str) {
        self.surface.form_mut().set_name(value);
    }

    fn render_user_info(&mut self, view: UserInfoView) {
        self.surface.form_mut().set_user_info(view);
    }

    fn apply_theme(&mut self, theme: AppliedTheme) {
        self.surface.form_mut().set_theme(theme);
    }
}

pub fn start(context: &AppContext, event_source: Box<dyn AppEventSource>) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        outbox = %context.config.host.outbox_path.display(),
        "starting web view emulator"
    );

    let outbox = JsonLinesOutbox::new(context.config.host.outbox_path.clone());
    let surface = HostSurface::new(context.config.host.theme.clone(), Box::new(outbox));
    let webview = EmulatedWebView::new(TerminalSession::new()?, event_source, surface);

    let mut controller = FormController::new(webview, context.user.clone());
    run_page(&mut controller)?;

    tracing::info!(
        delivered = controller.webview().surface().delivered(),
        "web view emulator stopped"
    );
    Ok(())
}

/// Boots the page script and pumps page events until the view closes.
pub fn run_page<S: Screen>(controller: &mut FormController<EmulatedWebView<S>>) -> Result<()> {
    controller.init();
    dispatch(controller, UiAction::PageLoaded);

    while controller.webview().is_open() {
        if let Some(action) = controller.webview_mut().poll_page()? {
            dispatch(controller, action);
        }
    }

    Ok(())
}
