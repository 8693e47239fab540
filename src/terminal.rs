use crate::config::SceneConfig;
use crate::error::InitError;
use crate::graphics::{Canvas, Color};
use crate::scheduler::{FixedRateScheduler, FrameScheduler};
use crate::state::InputEvent;
use crate::surface::DrawingSurface;
use crate::time::{Clock, FpsCounter, SystemClock};
use crate::widget::SphereWidget;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
    },
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};
use std::time::Instant;

/// Host settings that do not affect the scene itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOptions {
    pub fps: u32,
    pub debug: bool,
}

/// What the host does with a terminal event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Quit,
    ToggleDebug,
    Input(InputEvent),
    Ignore,
}

/// One terminal cell covering two vertically stacked pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: TermColor,
    pub bg: TermColor,
}

const UPPER_HALF: char = '\u{2580}';
const LOWER_HALF: char = '\u{2584}';

/// Restores the terminal when dropped
struct TerminalGuard;

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(
            out,
            EnterAlternateScreen,
            Hide,
            EnableMouseCapture,
            EnableFocusChange,
            Clear(ClearType::All)
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if let Err(err) = execute!(
            out,
            DisableFocusChange,
            DisableMouseCapture,
            ResetColor,
            Show,
            LeaveAlternateScreen
        ) {
            log::warn!("failed to restore the terminal screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("failed to leave raw mode: {}", err);
        }
    }
}

/// Terminal size in cells, failing when there is nothing to draw on
pub fn acquire_size() -> Result<(u16, u16), InitError> {
    let (cols, rows) = match termsize::get() {
        Some(size) => (size.cols, size.rows),
        None => terminal::size().map_err(|_| InitError::SurfaceUnavailable)?,
    };
    if cols == 0 || rows == 0 {
        return Err(InitError::SurfaceTooSmall { cols, rows });
    }
    Ok((cols, rows))
}

/// Canvas pixels for a terminal of `cols` x `rows` cells
pub fn canvas_size(cols: u16, rows: u16) -> (usize, usize) {
    (cols as usize, rows as usize * 2)
}

pub fn translate(event: Event) -> Control {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Control::Quit,
            KeyCode::Char('d') | KeyCode::Char('D') => Control::ToggleDebug,
            _ => Control::Ignore,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                // aim at the middle of the cell
                Control::Input(InputEvent::PointerMoved {
                    x: mouse.column as f64 + 0.5,
                })
            }
            _ => Control::Ignore,
        },
        Event::FocusLost => Control::Input(InputEvent::PointerLeft),
        Event::Resize(cols, rows) => {
            let (width, height) = canvas_size(cols, rows);
            Control::Input(InputEvent::Resized { width, height })
        }
        _ => Control::Ignore,
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

pub fn cell(top: Option<Color>, bottom: Option<Color>) -> Cell {
    match (top, bottom) {
        (None, None) => Cell {
            glyph: ' ',
            fg: TermColor::Reset,
            bg: TermColor::Reset,
        },
        (Some(top), bottom) => Cell {
            glyph: UPPER_HALF,
            fg: term_color(top),
            bg: bottom.map_or(TermColor::Reset, term_color),
        },
        (None, Some(bottom)) => Cell {
            glyph: LOWER_HALF,
            fg: term_color(bottom),
            bg: TermColor::Reset,
        },
    }
}

/// Writes the whole canvas, two pixel rows per terminal row
pub fn present<W: Write>(out: &mut W, canvas: &Canvas) -> io::Result<()> {
    let (width, height) = canvas.size();
    queue!(out, BeginSynchronizedUpdate)?;
    for row in 0..height.div_ceil(2) {
        queue!(out, MoveTo(0, row as u16))?;
        let mut colors: Option<(TermColor, TermColor)> = None;
        for x in 0..width {
            let cell = cell(canvas.pixel(x, row * 2), canvas.pixel(x, row * 2 + 1));
            if colors != Some((cell.fg, cell.bg)) {
                queue!(out, SetForegroundColor(cell.fg), SetBackgroundColor(cell.bg))?;
                colors = Some((cell.fg, cell.bg));
            }
            queue!(out, Print(cell.glyph))?;
        }
    }
    queue!(out, ResetColor, EndSynchronizedUpdate)?;
    out.flush()
}

fn overlay_lines<S: DrawingSurface>(widget: &SphereWidget<S>, fps: f64) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )];
    if let Some(params) = widget.last_params() {
        lines.push(format!(
            "t: {:.2}  twist: {:.2}  sign: {:+}",
            params.t, params.twist, params.twist_sign
        ));
    }
    let pointer = widget.pointer();
    lines.push(format!("Offset: {:.2} -> {:.2}", pointer.offset, pointer.goal));
    lines.push(format!("FPS: {:.2}", fps));
    lines
}

fn draw_overlay<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(1, row as u16), ResetColor, Print(line))?;
    }
    out.flush()
}

/// Runs the animation until the user quits
pub fn run(config: SceneConfig, options: TerminalOptions) -> Result<(), InitError> {
    let (cols, rows) = acquire_size()?;
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    let (width, height) = canvas_size(cols, rows);
    log::info!("drawing on a {}x{} canvas at {} fps", width, height, options.fps);
    let mut widget = SphereWidget::new(config, Canvas::new(width, height));
    let mut scheduler = FixedRateScheduler::new(options.fps);
    let clock = SystemClock;
    let mut fps = FpsCounter::new(Instant::now());
    let mut debug = options.debug;
    let mut wipe = false;

    scheduler.request_frame();
    while scheduler.is_armed() {
        loop {
            let wait = scheduler.time_until_due(Instant::now());
            if wait.is_zero() {
                break;
            }
            if !event::poll(wait)? {
                continue;
            }
            match translate(event::read()?) {
                Control::Quit => return Ok(()),
                Control::ToggleDebug => {
                    debug = !debug;
                    wipe = true;
                }
                Control::Input(input) => {
                    wipe |= matches!(input, InputEvent::Resized { .. });
                    widget.push_event(input);
                }
                Control::Ignore => {}
            }
        }

        scheduler.fire(Instant::now());
        widget.frame(&mut scheduler, clock.now_seconds());

        if wipe {
            queue!(stdout, Clear(ClearType::All))?;
            wipe = false;
        }
        present(&mut stdout, widget.surface())?;
        if debug {
            draw_overlay(&mut stdout, &overlay_lines(&widget, fps.fps()))?;
        }
        if let Some(rate) = fps.tick(Instant::now()) {
            log::debug!("{:.1} frames per second", rate);
        }
    }
    Ok(())
}
