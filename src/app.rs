use crate::input::{handle_key, Action};
use crate::surface::SurfaceUpdate;
use crate::ui::dashboard;
use crate::ui::theme::{Theme, ThemeVariant};
use crate::view::ViewState;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{debug, info};
use ratatui::widgets::ListState;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Redraw at least this often so the header clock keeps moving.
const REDRAW_TICK: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Key(KeyEvent),
    Resize,
}

pub struct App {
    pub theme:         Theme,
    pub theme_variant: ThemeVariant,
    pub view:          ViewState,
    pub list_state:    ListState,
    pub should_quit:   bool,
}

impl App {
    pub fn new(theme_variant: ThemeVariant) -> Self {
        Self {
            theme:         Theme::for_variant(theme_variant),
            theme_variant,
            view:          ViewState::default(),
            list_state:    ListState::default(),
            should_quit:   false,
        }
    }

    pub fn apply(&mut self, update: SurfaceUpdate) {
        self.view.apply(update);
        if self.list_state.selected().is_none() && !self.view.volumes.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let len = self.view.volumes.len();
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectUp => {
                if len > 0 {
                    let i = self.list_state.selected().unwrap_or(0).saturating_sub(1);
                    self.list_state.select(Some(i));
                }
            }
            Action::SelectDown => {
                if len > 0 {
                    let i = (self.list_state.selected().unwrap_or(0) + 1).min(len - 1);
                    self.list_state.select(Some(i));
                }
            }
            Action::JumpTop => {
                if len > 0 { self.list_state.select(Some(0)); }
            }
            Action::JumpBottom => {
                if len > 0 { self.list_state.select(Some(len - 1)); }
            }
            Action::Confirm => {
                if let Some(i) = self.list_state.selected() {
                    self.view.select(i);
                }
            }
            Action::CycleTheme => {
                self.theme_variant = self.theme_variant.next();
                self.theme = Theme::for_variant(self.theme_variant);
                debug!("theme switched to {}", self.theme_variant.name());
            }
            Action::None => {}
        }
    }

    // ── Main event loop ───────────────────────────────────────────────

    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
        mut updates: UnboundedReceiver<SurfaceUpdate>,
        mut events: UnboundedReceiver<UiEvent>,
    ) -> Result<()> {
        let mut redraw = tokio::time::interval(REDRAW_TICK);
        loop {
            terminal.draw(|f| dashboard::render(f, self))?;

            tokio::select! {
                Some(update) = updates.recv() => {
                    self.apply(update);
                    // Drain whatever else is queued before the next frame.
                    while let Ok(update) = updates.try_recv() {
                        self.apply(update);
                    }
                }
                ev = events.recv() => match ev {
                    Some(UiEvent::Key(key)) => self.handle_action(handle_key(key)),
                    Some(UiEvent::Resize)   => {}
                    None                    => self.should_quit = true,
                },
                _ = redraw.tick() => {}
            }

            if self.should_quit { break; }
        }
        info!("UI loop finished");
        Ok(())
    }
}

/// Read terminal events on a plain thread and hand them to the UI loop.
pub fn spawn_input_thread(tx: UnboundedSender<UiEvent>) {
    std::thread::spawn(move || loop {
        let ui_event = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => UiEvent::Key(key),
            Ok(Event::Resize(_, _)) => UiEvent::Resize,
            Ok(_) => continue,
            Err(e) => {
                debug!("terminal input closed: {}", e);
                break;
            }
        };
        if tx.send(ui_event).is_err() {
            break;
        }
    });
}
