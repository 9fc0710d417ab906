use std::time::{Duration, Instant};

use byeol_config::Config;
use byeol_core::{Rgb, hsl_to_rgb};
use byeol_field::ParticleField;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::Stylize,
    symbols::Marker,
    text::Line,
    widgets::{Paragraph, canvas::Canvas},
};

use crate::counter::CountUp;
use crate::konami::KonamiTracker;
use crate::sky::{SkyFrame, UNITS_PER_COL, UNITS_PER_ROW};
use crate::typing::TypingLoop;

mod counter;
mod konami;
mod sky;
mod typing;

/// Event poll timeout, which doubles as the frame interval (~30 fps).
const FRAME_MS: u64 = 33;
/// Surfaces narrower than this many units draw at most [`NARROW_CAP`]
/// particles.
const NARROW_WIDTH: f32 = 768.0;
const NARROW_CAP: usize = 30;
/// How long a toast stays on screen.
const TOAST_MS: u64 = 3000;
/// Duration of the Konami rainbow sweep.
const RAINBOW_MS: u64 = 2000;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();
    result
}

/// A transient status message.
#[derive(Debug)]
struct Toast {
    message: String,
    expires_at_ms: u64,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Persisted preferences (currently just the theme).
    config: Config,
    /// The particle simulation.
    field: ParticleField,
    /// Geometry recorded by the latest tick, replayed onto the canvas.
    frame: SkyFrame,
    /// Tagline typing loop.
    typing: TypingLoop,
    /// Count-up animation for the particle stat.
    counter: CountUp,
    /// Easter egg key-sequence tracker.
    konami: KonamiTracker,
    /// Currently visible toast, if any.
    toast: Option<Toast>,
    /// While set, the particle color sweeps through the rainbow.
    rainbow_until_ms: Option<u64>,
    /// Wall-clock anchor for the elapsed-milliseconds clock.
    started: Instant,
    /// Elapsed milliseconds as of the last rendered frame.
    last_update_ms: u64,
}

impl App {
    /// Construct a new instance of [`App`]. The field starts empty and is
    /// populated on the first frame, once the terminal size is known.
    pub fn new() -> Self {
        Self {
            running: false,
            config: Config::load(),
            field: ParticleField::new(0.0, 0.0),
            frame: SkyFrame::default(),
            typing: TypingLoop::new(),
            counter: CountUp::new(0),
            konami: KonamiTracker::default(),
            toast: None,
            rainbow_until_ms: None,
            started: Instant::now(),
            last_update_ms: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders one frame: advance every animation, then draw the sky canvas
    /// with the overlay text on top.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;

        let area = frame.area();
        let width = area.width as f32 * UNITS_PER_COL;
        let height = area.height as f32 * UNITS_PER_ROW;

        // Repopulate when the surface size changes. This also covers the
        // first frame, since the field starts at 0x0.
        if (width, height) != self.field.size() {
            self.field.on_resize(width, height);
            self.counter.retarget(self.field.len());
        }
        // Narrow terminals draw a reduced subset for performance.
        self.field
            .set_render_cap((width < NARROW_WIDTH).then_some(NARROW_CAP));

        self.typing.update(elapsed_ms);
        self.counter.update(delta_ms);
        if self.toast.as_ref().is_some_and(|t| elapsed_ms >= t.expires_at_ms) {
            self.toast = None;
        }
        if self.rainbow_until_ms.is_some_and(|until| elapsed_ms >= until) {
            self.rainbow_until_ms = None;
        }

        self.field.tick(&mut self.frame);

        let color = self.particle_color(elapsed_ms);
        let sky = &self.frame;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width as f64])
            .y_bounds([0.0, height as f64])
            .paint(|ctx| sky.paint(ctx, color, height));
        frame.render_widget(canvas, area);

        let accent = self.config.theme.accent();

        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1), // Title
            Constraint::Length(1), // Tagline
            Constraint::Fill(2),
            Constraint::Length(1), // Stats / toast
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let title = Paragraph::new(Line::from("✦  b y e o l  ✦".bold().fg(accent)))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let tagline = Line::from(vec![
            "weaving ".dark_gray(),
            self.typing.text().fg(accent),
            "▌".fg(accent),
        ])
        .centered();
        frame.render_widget(tagline, chunks[2]);

        let status: Line = match &self.toast {
            Some(toast) => Line::from(toast.message.clone().bold().fg(accent)),
            None => Line::from(
                format!(
                    "{} particles · {} theme",
                    self.counter.value(),
                    self.config.theme.name()
                )
                .dark_gray(),
            ),
        };
        frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), chunks[4]);

        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "c".bold().fg(accent),
            " cycle theme".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[5]);
    }

    /// The particle color for this frame: the theme's color, unless the
    /// Konami rainbow sweep is running.
    fn particle_color(&self, elapsed_ms: u64) -> Rgb {
        match self.rainbow_until_ms {
            Some(until) => {
                let remaining = until.saturating_sub(elapsed_ms) as f32;
                let phase = 1.0 - remaining / RAINBOW_MS as f32;
                hsl_to_rgb(phase * 360.0, 0.8, 0.6)
            }
            None => self.config.theme.particle_color(),
        }
    }

    /// Reads the crossterm events and updates the state of [`App`]. Uses
    /// polling with a timeout so the animation keeps its frame rate.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(FRAME_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                // Dimension changes are picked up during render.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.konami.press(key.code) {
            let now = self.last_update_ms;
            self.show_toast("Konami code activated! You found the easter egg!");
            self.rainbow_until_ms = Some(now + RAINBOW_MS);
        }
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.cycle_theme(),
            _ => {}
        }
    }

    /// Cycle to the next color theme and persist the choice. The in-memory
    /// theme applies either way.
    fn cycle_theme(&mut self) {
        self.config.theme = self.config.theme.next();
        if self.config.save().is_err() {
            self.show_toast("couldn't save the theme preference");
        }
    }

    fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            expires_at_ms: self.last_update_ms + TOAST_MS,
        });
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
