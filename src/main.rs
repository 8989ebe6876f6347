use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::env;
use std::io::{BufWriter, stdout};
use std::time::{Duration, Instant};

use pyroterm::canvas::Canvas;
use pyroterm::display::{FireworksDisplay, PageView};
use pyroterm::geom::{Rect, Vec2};
use pyroterm::term::TermCanvas;
use pyroterm::util::Rgb;

/// The simulated document the viewport scrolls over. The header band at the
/// top is where rockets launch from and where clicks trigger big shells.
struct Page {
    viewport: Vec2,
    doc_pages: f32,
    scroll_y: f32,
    is_home: bool,
}

impl Page {
    fn new(cols: u16, rows: u16, doc_pages: f32) -> Self {
        Self {
            viewport: Vec2::new(cols as f32, rows as f32 * 2.0),
            doc_pages,
            scroll_y: 0.0,
            is_home: true,
        }
    }

    fn doc_height(&self) -> f32 {
        self.viewport.y * self.doc_pages
    }

    fn header(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport.x, self.viewport.y * 0.85)
    }

    fn scroll_by(&mut self, dy: f32) {
        let max = (self.doc_height() - self.viewport.y).max(0.0);
        self.scroll_y = (self.scroll_y + dy).clamp(0.0, max);
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Vec2::new(cols as f32, rows as f32 * 2.0);
        self.scroll_by(0.0);
    }

    /// Sampled fresh every frame and every click.
    fn view(&self) -> PageView {
        PageView {
            scroll: Vec2::new(0.0, self.scroll_y),
            header: Some(self.header()),
            is_home: self.is_home,
        }
    }
}

fn print_usage() {
    eprintln!("pyroterm - scroll-aware firework display for the terminal");
    eprintln!();
    eprintln!("Usage: pyroterm [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --bg-color RRGGBB  Background color as hex (e.g., --bg-color 1a1b26)");
    eprintln!("  --doc-pages N      Document height in viewports (default 3)");
    eprintln!();
    eprintln!("Controls:");
    eprintln!("  click              Launch a firework (big shells inside the header)");
    eprintln!("  wheel / arrows     Scroll the document");
    eprintln!("  PgUp / PgDn        Scroll one viewport");
    eprintln!("  f                  Toggle the effect on/off");
    eprintln!("  h                  Toggle home view");
    eprintln!();
    eprintln!("Press 'q', ESC, or Ctrl+C to exit");
}

fn run(doc_pages: f32, bg: Rgb) -> std::io::Result<()> {
    let stdout = stdout();
    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout);

    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        EnterAlternateScreen,
        Hide,
        Clear(ClearType::All),
        EnableMouseCapture
    )?;

    let (cols, rows) = terminal::size()?;
    let mut canvas = TermCanvas::new(cols, rows, bg);
    let mut page = Page::new(cols, rows, doc_pages);
    let mut display = FireworksDisplay::new();
    display.start();

    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;
    const FIXED_DT: f32 = 1.0 / 60.0;

    loop {
        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.code == KeyCode::Char('q')
                        || key.code == KeyCode::Esc
                        || (key.code == KeyCode::Char('c')
                            && key.modifiers.contains(event::KeyModifiers::CONTROL))
                    {
                        break;
                    }
                    match key.code {
                        KeyCode::Char('f') => {
                            if display.is_enabled() {
                                display.stop();
                                canvas.clear();
                                execute!(stdout, Clear(ClearType::All))?;
                            } else {
                                display.start();
                            }
                        }
                        KeyCode::Char('h') => page.is_home = !page.is_home,
                        KeyCode::Up => page.scroll_by(-2.0),
                        KeyCode::Down => page.scroll_by(2.0),
                        KeyCode::PageUp => {
                            let dy = -page.viewport.y;
                            page.scroll_by(dy);
                        }
                        KeyCode::PageDown => {
                            let dy = page.viewport.y;
                            page.scroll_by(dy);
                        }
                        _ => {}
                    }
                }
                Event::Mouse(MouseEvent {
                    kind, column, row, ..
                }) => match kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        let at = Vec2::new(column as f32, row as f32 * 2.0);
                        display.handle_click(at, &page.view());
                    }
                    MouseEventKind::ScrollUp => page.scroll_by(-4.0),
                    MouseEventKind::ScrollDown => page.scroll_by(4.0),
                    _ => {}
                },
                Event::Resize(new_cols, new_rows) => {
                    // The surface follows the terminal; simulation state is
                    // untouched.
                    canvas = TermCanvas::new(new_cols, new_rows, bg);
                    page.resize(new_cols, new_rows);
                    execute!(stdout, Clear(ClearType::All))?;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        accumulator += frame_time;
        if accumulator > FIXED_DT * 3.0 {
            accumulator = FIXED_DT * 3.0;
        }

        while accumulator >= FIXED_DT {
            display.frame(&mut canvas, &page.view(), FIXED_DT);
            accumulator -= FIXED_DT;
        }

        canvas.render(&mut stdout)?;
    }

    execute!(stdout, Show, LeaveAlternateScreen, DisableMouseCapture)?;
    terminal::disable_raw_mode()?;

    Ok(())
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut bg = Rgb(0, 0, 0);
    let mut doc_pages = 3.0f32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bg-color" => {
                if i + 1 < args.len() {
                    if let Some(color) = Rgb::from_hex(&args[i + 1]) {
                        bg = color;
                        i += 2;
                    } else {
                        eprintln!("Invalid hex color: {}", args[i + 1]);
                        eprintln!("Expected format: RRGGBB (e.g., 1a1b26)");
                        std::process::exit(1);
                    }
                } else {
                    eprintln!("--bg-color requires a hex color value");
                    std::process::exit(1);
                }
            }
            "--doc-pages" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<f32>() {
                        Ok(n) if n >= 1.0 => {
                            doc_pages = n;
                            i += 2;
                        }
                        _ => {
                            eprintln!("--doc-pages expects a number >= 1");
                            std::process::exit(1);
                        }
                    }
                } else {
                    eprintln!("--doc-pages requires a value");
                    std::process::exit(1);
                }
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            arg => {
                eprintln!("Unknown option: {}", arg);
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }

    run(doc_pages, bg)
}
