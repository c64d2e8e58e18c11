//! Terminal presentation of a scenario and its comparison rows.

use std::fmt::Write;

use crossterm::style::{Color, Stylize, style};
use gridsearch_core::{Grid, Tile};
use gridsearch_paths::Algorithm;

use crate::harness::Metrics;

/// Paths are drawn in this order, so DFS ends up on top.
const DRAW_ORDER: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::AStar, Algorithm::Dfs];

fn glyph(a: Algorithm) -> char {
    match a {
        Algorithm::Bfs => '+',
        Algorithm::Dfs => 'o',
        Algorithm::AStar => '*',
    }
}

fn color(a: Algorithm) -> Color {
    match a {
        Algorithm::Bfs => Color::Magenta,
        Algorithm::Dfs => Color::DarkYellow,
        Algorithm::AStar => Color::Cyan,
    }
}

#[derive(Clone, Copy)]
enum Mark {
    Tile(Tile),
    Path(Algorithm),
}

fn paint(mark: Mark, colored: bool) -> String {
    let (ch, fg) = match mark {
        Mark::Tile(Tile::Open) => ('.', None),
        Mark::Tile(Tile::Blocked) => ('#', Some(Color::DarkGrey)),
        Mark::Tile(Tile::Start) => ('S', Some(Color::Green)),
        Mark::Tile(Tile::Exit) => ('E', Some(Color::Red)),
        Mark::Path(a) => (glyph(a), Some(color(a))),
    };
    match fg {
        Some(c) if colored => style(ch).with(c).to_string(),
        _ => ch.to_string(),
    }
}

/// Draw the grid with every successful path overlaid.
pub fn render_grid(grid: &Grid, rows: &[Metrics], colored: bool) -> String {
    let bounds = grid.bounds();
    let mut marks: Vec<Mark> = grid.iter().map(|(_, t)| Mark::Tile(t)).collect();

    for a in DRAW_ORDER {
        let Some(m) = rows.iter().find(|m| m.algorithm == a) else {
            continue;
        };
        if m.path.len() <= 1 {
            continue;
        }
        for &c in &m.path {
            let Some(i) = bounds.index(c) else { continue };
            // Endpoints stay visible.
            if let Mark::Tile(Tile::Start | Tile::Exit) = marks[i] {
                continue;
            }
            marks[i] = Mark::Path(a);
        }
    }

    let width = grid.size().max(1) as usize;
    let mut out = String::new();
    for row in marks.chunks(width) {
        for &m in row {
            out.push_str(&paint(m, colored));
        }
        out.push('\n');
    }
    out
}

/// Milliseconds with two decimals, or whole microseconds below 1 ms.
pub fn format_time(ms: f64) -> String {
    if ms >= 1.0 {
        format!("{ms:.2} ms")
    } else {
        format!("{:.0} \u{3bc}s", ms * 1000.0)
    }
}

/// One line per algorithm: cost, nodes, time and peak frontier.
pub fn render_metrics(rows: &[Metrics], colored: bool) -> String {
    let mut out = String::new();
    for m in rows {
        let line = match &m.error {
            None => format!(
                "{}: Cost={} Nodes={} Time={} MaxMem={}",
                m.algorithm,
                m.cost,
                m.nodes,
                format_time(m.time_ms),
                m.mem
            ),
            Some(e) => format!("{}: Cost={} error: {e}", m.algorithm, m.cost),
        };
        let line = if colored {
            style(line).with(color(m.algorithm)).to_string()
        } else {
            line
        };
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Legend mapping glyphs to algorithms.
pub fn render_legend(colored: bool) -> String {
    DRAW_ORDER
        .iter()
        .map(|&a| format!("{} {}", paint(Mark::Path(a), colored), a))
        .collect::<Vec<_>>()
        .join("   ")
}
