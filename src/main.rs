//! boxgrid demo binary
//!
//! Run with: cargo run -- <table.json>
//!
//! Draws the table described by a JSON document and lets the user walk a
//! highlighted cursor over its data cells.
//!
//! Keys:
//! - Arrows: move the cursor
//! - Enter: toggle selection of the cell under the cursor
//! - r: redraw the whole table
//! - q / Esc: quit

use std::collections::{HashSet, VecDeque};
use std::env;
use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use boxgrid::{
    AnsiSurface, Color, ErrorKind, InputEvent, InputParser, Key, Surface, TableDisplay, TableDocument,
};

type Display = TableDisplay<AnsiSurface<io::Stdout>>;

const CURSOR_BG: Color = Color::BrightBlue;
const CURSOR_FG: Color = Color::BrightWhite;
const SELECTED_BG: Color = Color::Yellow;
const SELECTED_FG: Color = Color::Black;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stderr stays out of the way of the table on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let mut path = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("boxgrid-demo v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("Usage: boxgrid-demo <table.json>");
                println!();
                println!("Keys:");
                println!("  arrows    Move the cursor");
                println!("  Enter     Toggle selection");
                println!("  r         Redraw");
                println!("  q, Esc    Quit");
                return Ok(());
            }
            other => path = Some(other.to_string()),
        }
    }

    let path = match path {
        Some(path) => path,
        None => {
            eprintln!("Error: a table document is required (see --help)");
            std::process::exit(1);
        }
    };

    let (table, config) = TableDocument::load(&path)?.into_parts()?;
    info!("Loaded {} ({} columns, {} rows)", path, table.columns(), table.rows());

    let mut display = TableDisplay::new(table, config, AnsiSurface::stdout())?;

    crossterm::terminal::enable_raw_mode()?;
    let result = match display.surface_mut().enter() {
        Ok(()) => run(&mut display),
        Err(e) => Err(e.into()),
    };
    display.surface_mut().leave()?;
    crossterm::terminal::disable_raw_mode()?;
    result
}

/// How long a lone ESC waits for the rest of an escape sequence
const ESCAPE_TIMEOUT: Duration = Duration::from_millis(50);

/// Key reader fed by raw input chunks
struct Keys {
    parser: InputParser,
    pending: VecDeque<InputEvent>,
    input: Receiver<Vec<u8>>,
}

impl Keys {
    fn new(input: Receiver<Vec<u8>>) -> Self {
        Self {
            parser: InputParser::new(),
            pending: VecDeque::new(),
            input,
        }
    }

    /// Keys read from stdin on a background thread
    fn stdin() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut stdin = io::stdin();
            let mut buf = [0u8; 64];
            loop {
                match stdin.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        if tx.send(buf[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("stdin read failed: {}", e);
                        break;
                    }
                }
            }
        });
        Self::new(rx)
    }

    /// Next key event; `None` once input is closed
    fn next(&mut self) -> Option<InputEvent> {
        while self.pending.is_empty() {
            let chunk = if self.parser.has_pending_escape() {
                match self.input.recv_timeout(ESCAPE_TIMEOUT) {
                    Ok(chunk) => chunk,
                    Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => {
                        self.pending.extend(self.parser.take_pending_escape());
                        continue;
                    }
                }
            } else {
                self.input.recv().ok()?
            };
            self.pending.extend(self.parser.parse(&chunk));
        }
        self.pending.pop_front()
    }
}

fn is_quit(event: InputEvent) -> bool {
    matches!(
        event,
        InputEvent::Char('q') | InputEvent::Char('Q') | InputEvent::Key(Key::Escape)
    )
}

/// Compose until the table fits; false if the user gave up
fn compose_until_fits(display: &mut Display, keys: &mut Keys) -> Result<bool, Box<dyn std::error::Error>> {
    loop {
        match display.layout_and_compose() {
            Ok(()) => return Ok(true),
            Err(e) if e.kind() == ErrorKind::Viewport => {
                let surface = display.surface_mut();
                surface.set_colors(None, None)?;
                surface.clear()?;
                surface.write_str(&e.to_string())?;
                surface.set_cursor(0, 1)?;
                surface.write_str("Resize the terminal and press a key, or q to quit.")?;
                surface.flush()?;

                match keys.next() {
                    Some(event) if !is_quit(event) => continue,
                    _ => return Ok(false),
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Cell cursor and selection over the data rows
struct Picker {
    col: usize,
    row: usize,
    selected: HashSet<(usize, usize)>,
}

impl Picker {
    fn colors(&self, col: usize, row: usize) -> (Option<Color>, Option<Color>) {
        if (col, row) == (self.col, self.row) {
            (Some(CURSOR_BG), Some(CURSOR_FG))
        } else if self.selected.contains(&(col, row)) {
            (Some(SELECTED_BG), Some(SELECTED_FG))
        } else {
            (None, None)
        }
    }

    /// Recolor one cell from the picker state and repaint it
    fn paint(&self, display: &mut Display, col: usize, row: usize) -> Result<(), Box<dyn std::error::Error>> {
        let (background, foreground) = self.colors(col, row);
        display.change_cell_color(col, row, background, foreground)?;
        display.refresh_cell(col, row)?;
        Ok(())
    }

    fn move_to(&mut self, display: &mut Display, col: usize, row: usize) -> Result<(), Box<dyn std::error::Error>> {
        let (old_col, old_row) = (self.col, self.row);
        self.col = col;
        self.row = row;
        self.paint(display, old_col, old_row)?;
        self.paint(display, col, row)?;
        display.surface_mut().flush()?;
        Ok(())
    }
}

fn run(display: &mut Display) -> Result<(), Box<dyn std::error::Error>> {
    let mut keys = Keys::stdin();
    if !compose_until_fits(display, &mut keys)? {
        return Ok(());
    }

    let columns = display.table().columns();
    let rows = display.table().rows();

    let mut picker = Picker {
        col: 0,
        row: 1,
        selected: HashSet::new(),
    };
    if rows > 0 {
        picker.paint(display, 0, 1)?;
        display.surface_mut().flush()?;
    }

    while let Some(event) = keys.next() {
        if is_quit(event) {
            break;
        }
        if rows == 0 {
            continue;
        }

        let (col, row) = (picker.col, picker.row);
        let target = match event {
            InputEvent::Key(Key::Up) if row > 1 => Some((col, row - 1)),
            InputEvent::Key(Key::Down) if row < rows => Some((col, row + 1)),
            InputEvent::Key(Key::Left) if col > 0 => Some((col - 1, row)),
            InputEvent::Key(Key::Right) if col + 1 < columns => Some((col + 1, row)),
            InputEvent::Key(Key::Up | Key::Down | Key::Left | Key::Right) => {
                // Edge of the table
                display.surface_mut().beep()?;
                display.surface_mut().flush()?;
                None
            }
            InputEvent::Key(Key::Enter) => {
                if !picker.selected.remove(&(col, row)) {
                    picker.selected.insert((col, row));
                }
                debug!("Selection now {} cells", picker.selected.len());
                None
            }
            InputEvent::Char('r') | InputEvent::Char('R') => {
                display.redraw()?;
                display.refresh_all()?;
                None
            }
            _ => None,
        };

        if let Some((new_col, new_row)) = target {
            picker.move_to(display, new_col, new_row)?;
        }
    }

    Ok(())
}
