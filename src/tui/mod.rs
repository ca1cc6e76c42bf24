// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-ClassCluster-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of ClassCluster and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive seating editor (ratatui + crossterm): a grid panel with
//! conflict/bonus highlighting, an inspector for the seat under the cursor,
//! undo/redo over whole-seating snapshots, and greedy re-optimization. All
//! mutations run on the single event-loop thread; the planner's trial logic
//! and the editor never touch the seating concurrently.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::model::{CellPos, Classroom, Seating, Student};
use crate::plan::greedy_place;
use crate::score::score_seating;
use crate::store::{read_seating, write_seating};

mod hints;

const DESK_COLOR: Color = Color::LightBlue;
const CONFLICT_COLOR: Color = Color::Red;
const CONFLICT_FLASH_COLOR: Color = Color::LightRed;
const BONUS_COLOR: Color = Color::Green;
const BONUS_FLASH_COLOR: Color = Color::LightGreen;
const INSPECTOR_COLOR: Color = Color::DarkGray;
const TOAST_COLOR: Color = Color::Yellow;

const FLASH_INTERVAL: Duration = Duration::from_millis(500);
const TOAST_DURATION: Duration = Duration::from_secs(2);
const UNDO_DEPTH: usize = 50;
const MIN_CELL_WIDTH: usize = 5;

/// Runs the interactive seating editor until the user quits.
pub fn run_with_seating(
    classroom: Classroom,
    seating: Seating,
    roster: Vec<Student>,
    seed: u64,
    csv_path: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(classroom, seating, roster, seed, csv_path);

    while !app.should_quit {
        app.tick_flash();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let (grid_area, inspector_area) = if app.inspector_visible {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_area);
        (panes[0], Some(panes[1]))
    } else {
        (main_area, None)
    };

    let grid = Paragraph::new(Text::from(app.grid_lines()))
        .block(Block::default().borders(Borders::ALL).title(" Classroom "));
    frame.render_widget(grid, grid_area);

    if let Some(inspector_area) = inspector_area {
        let inspector = Paragraph::new(app.inspector_text())
            .style(Style::default().fg(INSPECTOR_COLOR))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(INSPECTOR_COLOR))
                    .title(" Inspector "),
            );
        frame.render_widget(inspector, inspector_area);
    }

    let score = score_seating(&app.classroom, &app.seating);
    let status = match app.active_toast() {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(TOAST_COLOR))),
        None => hints::footer_line(score),
    };
    frame.render_widget(Paragraph::new(status), status_area);
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellTone {
    Neutral,
    Desk,
    Conflict,
    Bonus,
}

struct App {
    classroom: Classroom,
    seating: Seating,
    roster: Vec<Student>,
    cursor: CellPos,
    grabbed: Option<CellPos>,
    undo_stack: Vec<Seating>,
    redo_stack: Vec<Seating>,
    flash_on: bool,
    last_flash: Instant,
    toast: Option<Toast>,
    csv_path: PathBuf,
    rng: StdRng,
    inspector_visible: bool,
    should_quit: bool,
}

impl App {
    fn new(
        classroom: Classroom,
        seating: Seating,
        roster: Vec<Student>,
        seed: u64,
        csv_path: PathBuf,
    ) -> Self {
        Self {
            classroom,
            seating,
            roster,
            cursor: CellPos::new(0, 0),
            grabbed: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            flash_on: false,
            last_flash: Instant::now(),
            toast: None,
            csv_path,
            rng: StdRng::seed_from_u64(seed),
            inspector_visible: true,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if self.grabbed.take().is_some() {
                    self.set_toast("Pick-up cancelled");
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.grab_or_drop(),
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('r') => self.redo(),
            KeyCode::Char('o') => self.reoptimize(),
            KeyCode::Char('x') => self.reset_seating(),
            KeyCode::Char('s') => self.save_csv(),
            KeyCode::Char('L') => self.load_csv(),
            KeyCode::Char('i') => self.inspector_visible = !self.inspector_visible,
            _ => {}
        }
        false
    }

    fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let row = self.cursor.row() as i32 + d_row;
        let col = self.cursor.col() as i32 + d_col;
        if row < 0
            || col < 0
            || row >= self.classroom.rows() as i32
            || col >= self.classroom.cols() as i32
        {
            return;
        }
        self.cursor = CellPos::new(row as usize, col as usize);
    }

    fn grab_or_drop(&mut self) {
        match self.grabbed.take() {
            None => {
                if self.classroom.is_reserved(self.cursor) {
                    self.set_toast("That is the teacher's desk");
                    return;
                }
                if self.seating.occupant(self.cursor).is_none() {
                    self.set_toast("Empty seat");
                    return;
                }
                self.grabbed = Some(self.cursor);
            }
            Some(from) => {
                if from == self.cursor {
                    return;
                }
                if self.classroom.is_reserved(self.cursor) {
                    self.set_toast("Cannot place a student on the teacher's desk");
                    self.grabbed = Some(from);
                    return;
                }
                self.save_undo();
                self.seating.swap(from, self.cursor);
            }
        }
    }

    fn save_undo(&mut self) {
        self.undo_stack.push(self.seating.clone());
        if self.undo_stack.len() > UNDO_DEPTH {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    fn undo(&mut self) {
        let Some(previous) = self.undo_stack.pop() else {
            self.set_toast("Nothing to undo");
            return;
        };
        self.redo_stack.push(std::mem::replace(&mut self.seating, previous));
        self.grabbed = None;
    }

    fn redo(&mut self) {
        let Some(next) = self.redo_stack.pop() else {
            self.set_toast("Nothing to redo");
            return;
        };
        self.undo_stack.push(std::mem::replace(&mut self.seating, next));
        self.grabbed = None;
    }

    fn reset_seating(&mut self) {
        self.save_undo();
        self.seating = self.classroom.empty_seating();
        self.grabbed = None;
    }

    fn reoptimize(&mut self) {
        self.save_undo();
        self.seating = self.classroom.empty_seating();
        greedy_place(&self.classroom, &mut self.seating, &self.roster, &mut self.rng);
        self.grabbed = None;
    }

    fn save_csv(&mut self) {
        match write_seating(&self.csv_path, &self.classroom, &self.seating) {
            Ok(()) => self.set_toast(format!("Saved {}", self.csv_path.display())),
            Err(err) => self.set_toast(format!("Save failed: {err}")),
        }
    }

    fn load_csv(&mut self) {
        match read_seating(&self.csv_path, &self.classroom) {
            Ok(seating) => {
                self.save_undo();
                self.seating = seating;
                self.grabbed = None;
                self.set_toast(format!("Loaded {}", self.csv_path.display()));
            }
            Err(err) => self.set_toast(format!("Load failed: {err}")),
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    fn active_toast(&self) -> Option<String> {
        let toast = self.toast.as_ref()?;
        (toast.expires_at > Instant::now()).then(|| toast.message.clone())
    }

    fn tick_flash(&mut self) {
        if self.last_flash.elapsed() >= FLASH_INTERVAL {
            self.flash_on = !self.flash_on;
            self.last_flash = Instant::now();
        }
    }

    /// Highlight for a cell: conflicts win over bonuses, like the score's
    /// relative weighting of the two.
    fn cell_tone(&self, cell: CellPos) -> CellTone {
        if self.classroom.is_reserved(cell) {
            return CellTone::Desk;
        }
        let Some(student) = self.seating.occupant(cell) else {
            return CellTone::Neutral;
        };

        let mut bonus = false;
        for neighbor_cell in self.classroom.neighbors(cell) {
            let Some(neighbor) = self.seating.occupant(neighbor_cell) else {
                continue;
            };
            if student.avoids(neighbor.name()) {
                return CellTone::Conflict;
            }
            if student.befriends(neighbor.name()) {
                bonus = true;
            }
        }

        if bonus {
            CellTone::Bonus
        } else {
            CellTone::Neutral
        }
    }

    fn cell_style(&self, cell: CellPos) -> Style {
        let mut style = match self.cell_tone(cell) {
            CellTone::Neutral => Style::default(),
            CellTone::Desk => Style::default().bg(DESK_COLOR).fg(Color::Black),
            CellTone::Conflict => {
                let bg = if self.flash_on { CONFLICT_FLASH_COLOR } else { CONFLICT_COLOR };
                Style::default().bg(bg).fg(Color::Black)
            }
            CellTone::Bonus => {
                let bg = if self.flash_on { BONUS_FLASH_COLOR } else { BONUS_COLOR };
                Style::default().bg(bg).fg(Color::Black)
            }
        };
        if self.grabbed == Some(cell) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.cursor == cell {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        style
    }

    fn cell_width(&self) -> usize {
        self.roster
            .iter()
            .map(|student| student.name().chars().count())
            .chain(self.seating.occupied().map(|(_, s)| s.name().chars().count()))
            .max()
            .unwrap_or(0)
            .max(MIN_CELL_WIDTH)
    }

    fn grid_lines(&self) -> Vec<Line<'static>> {
        let width = self.cell_width();
        let mut lines = Vec::with_capacity(self.classroom.rows() * 2);

        for row in 0..self.classroom.rows() {
            let mut spans = Vec::with_capacity(self.classroom.cols() * 2);
            for col in 0..self.classroom.cols() {
                let cell = CellPos::new(row, col);
                let label = if self.classroom.is_reserved(cell) {
                    "T".to_owned()
                } else {
                    self.seating
                        .occupant(cell)
                        .map(|s| s.name().to_owned())
                        .unwrap_or_default()
                };
                spans.push(Span::styled(
                    format!(" {label:<width$} "),
                    self.cell_style(cell),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        lines
    }

    fn inspector_text(&self) -> String {
        match self.seating.occupant(self.cursor) {
            Some(student) => {
                let join = |names: &std::collections::BTreeSet<smol_str::SmolStr>| {
                    if names.is_empty() {
                        "—".to_owned()
                    } else {
                        names.iter().map(|n| n.as_str()).collect::<Vec<_>>().join(", ")
                    }
                };
                format!(
                    "{} {}\nSkill: {}\nAvoid: {}\nFriends: {}\nNext to: {}\nFront: {}  Back: {}\nNear teacher: {}  Far teacher: {}",
                    student.avatar(),
                    student.name(),
                    student.skill(),
                    join(student.avoid()),
                    join(student.friends()),
                    join(student.must_next_to()),
                    student.must_front(),
                    student.must_back(),
                    student.near_teacher(),
                    student.far_teacher(),
                )
            }
            None if self.classroom.is_reserved(self.cursor) => "Teacher's desk".to_owned(),
            None => "Empty seat".to_owned(),
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
