//! Flappy Bird scene rendering.
//!
//! World coordinates (400 x 600 by default) are scaled onto whatever cell
//! grid the terminal provides. The bird, pipes and sky are drawn into a cell
//! buffer and then stamped row-by-row as a Paragraph, which gives
//! per-character colour control.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar,
};
use crate::game::{CollisionCause, GameState, Phase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(135, 206, 250);
const SKY_DIM: Color = Color::Rgb(60, 92, 112);
const PIPE: Color = Color::Rgb(0, 200, 0);
const PIPE_DIM: Color = Color::Rgb(0, 90, 0);
const BIRD: Color = Color::Black;

const PIPE_CHAR: char = '█';
const BIRD_BODY_CHAR: char = '█';

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    fn sky(dimmed: bool) -> Self {
        let bg = if dimmed { SKY_DIM } else { SKY };
        Self {
            ch: ' ',
            fg: bg,
            bg,
        }
    }
}

/// Render the whole game screen for the current phase.
pub fn render_flappy(frame: &mut Frame, area: Rect, state: &GameState) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 8, 20);

    let dimmed = state.phase == Phase::GameOver;
    render_play_field(frame, layout.content, state, dimmed);

    match state.phase {
        Phase::Menu => render_modal(
            frame,
            layout.content,
            Color::Yellow,
            "Flappy Bird",
            &["Press SPACE to Start", "Press ESC to Quit"],
        ),
        Phase::Playing => render_score_hud(frame, layout.content, state.score),
        Phase::GameOver => {
            let score_line = format!("Score: {}", state.score);
            render_modal(
                frame,
                layout.content,
                Color::Red,
                "Game Over",
                &[score_line.as_str(), "Press SPACE to Retry or ESC to Quit"],
            );
        }
    }

    render_status_bar_content(frame, layout.status_bar, state);
    render_info_panel(frame, layout.info_panel, state);
}

/// Build the play field cell grid for a `width` x `height` area.
pub fn build_play_field(state: &GameState, width: u16, height: u16, dimmed: bool) -> Vec<Vec<Cell>> {
    let width = width as usize;
    let height = height as usize;
    let mut buffer = vec![vec![Cell::sky(dimmed); width]; height];
    if width == 0 || height == 0 {
        return buffer;
    }

    let config = &state.config;
    let x_scale = width as f64 / config.screen_width;
    let y_scale = height as f64 / config.screen_height;
    let sky = Cell::sky(dimmed).bg;

    // ── Pipes ─────────────────────────────────────────────────────────
    let pipe_color = if dimmed { PIPE_DIM } else { PIPE };
    for obstacle in &state.obstacles {
        let left = (obstacle.x * x_scale).floor().max(0.0) as usize;
        let right = (obstacle.trailing_edge(config.obstacle_width) * x_scale)
            .ceil()
            .clamp(0.0, width as f64) as usize;

        for (row, cells) in buffer.iter_mut().enumerate() {
            let world_y = (row as f64 + 0.5) / y_scale;
            if world_y >= obstacle.top as f64 && world_y <= obstacle.bottom as f64 {
                continue;
            }
            for cell in cells.iter_mut().take(right).skip(left) {
                *cell = Cell {
                    ch: PIPE_CHAR,
                    fg: pipe_color,
                    bg: sky,
                };
            }
        }
    }

    // ── Bird ──────────────────────────────────────────────────────────
    let (ax, ay, r) = (config.actor_x, state.actor.y, config.actor_radius);
    let row_range = ((ay - r) * y_scale).floor().max(0.0) as usize
        ..(((ay + r) * y_scale).ceil().max(0.0) as usize).min(height);
    let col_range = ((ax - r) * x_scale).floor().max(0.0) as usize
        ..(((ax + r) * x_scale).ceil().max(0.0) as usize).min(width);

    for row in row_range {
        let cy = (row as f64 + 0.5) / y_scale;
        for col in col_range.clone() {
            let cx = (col as f64 + 0.5) / x_scale;
            if (cx - ax).powi(2) + (cy - ay).powi(2) <= r * r {
                buffer[row][col] = Cell {
                    ch: BIRD_BODY_CHAR,
                    fg: BIRD,
                    bg: sky,
                };
            }
        }
    }

    // The centre cell is always drawn so the bird never vanishes at low resolution
    let center_row = (ay * y_scale).floor();
    let center_col = (ax * x_scale).floor() as usize;
    if center_row >= 0.0 && (center_row as usize) < height && center_col < width {
        let glyph = if state.actor.velocity < 0.0 {
            '▲'
        } else {
            '▼'
        };
        buffer[center_row as usize][center_col] = Cell {
            ch: glyph,
            fg: Color::Yellow,
            bg: BIRD,
        };
    }

    buffer
}

/// Render the play field: sky, pipes, bird.
fn render_play_field(frame: &mut Frame, area: Rect, state: &GameState, dimmed: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let buffer = build_play_field(state, area.width, area.height, dimmed);
    let lines: Vec<Line> = buffer
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| {
                        Span::styled(
                            cell.ch.to_string(),
                            Style::default().fg(cell.fg).bg(cell.bg),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// "Score: N" in the top-left corner of the play field.
fn render_score_hud(frame: &mut Frame, area: Rect, score: u32) {
    if area.height == 0 || area.width < 4 {
        return;
    }
    let text = format!(" Score: {} ", score);
    let hud = Rect {
        x: area.x + 1,
        y: area.y,
        width: (text.chars().count() as u16).min(area.width - 1),
        height: 1,
    };
    let paragraph = Paragraph::new(text).style(
        Style::default()
            .fg(Color::White)
            .bg(SKY)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, hud);
}

fn crash_description(cause: Option<CollisionCause>) -> &'static str {
    match cause {
        Some(CollisionCause::Obstacle) => "Crashed into a pipe",
        Some(CollisionCause::Ceiling) => "Flew into the ceiling",
        Some(CollisionCause::Floor) => "Hit the ground",
        None => "Game over",
    }
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, state: &GameState) {
    match state.phase {
        Phase::Menu => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space]", "Start"), ("[Esc]", "Quit")],
        ),
        Phase::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", state.score),
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Esc]", "Quit")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            crash_description(state.last_cause),
            Color::Red,
            &[("[Space]", "Retry"), ("[Esc]", "Quit")],
        ),
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let phase = match state.phase {
        Phase::Menu => ("Ready", Color::Yellow),
        Phase::Playing => ("Flying", Color::Green),
        Phase::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", phase.0),
            Style::default().fg(phase.1).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", state.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Episode: ", label),
            Span::styled(
                format!("{}", state.episode),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                format!("{}", state.obstacles.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
