//! # Snake
//!
//! Grid snake on a toroidal board. The simulation is pure: `tick()` advances
//! one step and reports what happened as `GameEvent`s; the host decides
//! what sounds and pixels those turn into.
//!
//! ```text
//! tick:
//!   1. adopt requested heading unless it reverses the current one
//!   2. head' = head + heading, wrapped on both axes
//!   3. head' hits body  → GameOver: reset snake, heading, score, food
//!   4. push head'
//!   5. head' on food    → Eat: score += 1, relocate food (snake grows)
//!   6. otherwise        → Step: drop tail
//! ```

use std::collections::VecDeque;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Board never shrinks below this many columns.
pub const MIN_COLS: u16 = 16;
/// Board never shrinks below this many rows.
pub const MIN_ROWS: u16 = 14;
/// Terminal columns per board cell (cells look square this way).
pub const CELL_WIDTH: u16 = 2;
/// Terminal rows per board cell.
pub const CELL_HEIGHT: u16 = 1;

const INITIAL_SNAKE: [Point; 3] = [
    Point { x: 6, y: 6 },
    Point { x: 5, y: 6 },
    Point { x: 4, y: 6 },
];
const INITIAL_FOOD: Point = Point { x: 10, y: 8 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Unit vector, y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True for a 180° turn (dot product of the two vectors is -1).
    pub fn is_reverse_of(self, other: Direction) -> bool {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        ax * bx + ay * by == -1
    }
}

/// Board size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    pub cols: u16,
    pub rows: u16,
}

impl Grid {
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Board for a drawing surface of `width` × `height` terminal cells.
    /// A zero-sized surface (not laid out yet) yields an empty grid.
    pub fn for_surface(width: u16, height: u16) -> Self {
        if width == 0 || height == 0 {
            return Self::default();
        }
        Self {
            cols: (width / CELL_WIDTH).max(MIN_COLS),
            rows: (height / CELL_HEIGHT).max(MIN_ROWS),
        }
    }

    pub fn is_empty(self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    pub fn contains(self, p: Point) -> bool {
        p.x < self.cols && p.y < self.rows
    }

    pub fn cell_count(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Step from `p` in `dir`, wrapping across edges.
    pub fn step(self, p: Point, dir: Direction) -> Point {
        let (dx, dy) = dir.delta();
        let cols = i32::from(self.cols);
        let rows = i32::from(self.rows);
        let x = (i32::from(p.x) + dx).rem_euclid(cols);
        let y = (i32::from(p.y) + dy).rem_euclid(rows);
        // rem_euclid keeps both inside 0..cols / 0..rows
        Point::new(x as u16, y as u16)
    }
}

/// What a tick did, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Moved one cell without eating
    Step,
    /// Ate the food and grew
    Eat,
    /// Ran into itself; the round was reset
    GameOver,
}

/// How the board reacted to a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    Unchanged,
    /// Everything still fits
    Resized,
    /// Only the food fell outside and was moved back in
    FoodRelocated,
    /// The snake fell outside; the round restarted
    Reset,
}

pub struct SnakeGame {
    snake: VecDeque<Point>,
    food: Point,
    heading: Direction,
    requested: Direction,
    score: u32,
    grid: Grid,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_os_rng())
    }

    /// Deterministic food placement for tests and replays.
    pub fn seeded(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, rng: StdRng) -> Self {
        let mut game = Self {
            snake: INITIAL_SNAKE.into_iter().collect(),
            food: INITIAL_FOOD,
            heading: Direction::default(),
            requested: Direction::default(),
            score: 0,
            grid,
            rng,
        };
        game.place_food();
        game
    }

    pub fn snake(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.snake.iter().copied()
    }

    pub fn head(&self) -> Option<Point> {
        self.snake.front().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.snake.contains(&p)
    }

    /// Queue a heading for the next tick. Applied (or rejected) in `tick()`.
    pub fn steer(&mut self, dir: Direction) {
        self.requested = dir;
    }

    /// Advance one step. A board with no cells does nothing.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if self.grid.is_empty() {
            return None;
        }
        let head = self.head()?;

        if !self.requested.is_reverse_of(self.heading) {
            self.heading = self.requested;
        }

        let next = self.grid.step(head, self.heading);

        if self.snake.iter().skip(1).any(|&p| p == next) {
            info!("Game over at score {}", self.score);
            self.reset_round();
            return Some(GameEvent::GameOver);
        }

        self.snake.push_front(next);

        if next == self.food {
            self.score += 1;
            debug!("Ate food at {:?}, score {}", next, self.score);
            self.place_food();
            Some(GameEvent::Eat)
        } else {
            self.snake.pop_back();
            Some(GameEvent::Step)
        }
    }

    /// Apply a new board size.
    pub fn resize(&mut self, grid: Grid) -> ResizeOutcome {
        if grid == self.grid {
            return ResizeOutcome::Unchanged;
        }
        let was_empty = self.grid.is_empty();
        self.grid = grid;
        if grid.is_empty() {
            return ResizeOutcome::Resized;
        }
        if !self.snake.iter().all(|&p| grid.contains(p)) {
            info!("Snake no longer fits a {}x{} board, restarting", grid.cols, grid.rows);
            self.reset_round();
            return ResizeOutcome::Reset;
        }
        if was_empty || !grid.contains(self.food) {
            self.place_food();
            return ResizeOutcome::FoodRelocated;
        }
        ResizeOutcome::Resized
    }

    fn reset_round(&mut self) {
        self.snake = INITIAL_SNAKE.into_iter().collect();
        self.heading = Direction::default();
        self.requested = Direction::default();
        self.score = 0;
        self.place_food();
    }

    /// Rejection-sample a free cell. No-op on an empty or completely full board.
    fn place_food(&mut self) {
        if self.grid.is_empty() || self.snake.len() >= self.grid.cell_count() {
            return;
        }
        loop {
            let candidate = Point::new(
                self.rng.random_range(0..self.grid.cols),
                self.rng.random_range(0..self.grid.rows),
            );
            if !self.occupies(candidate) {
                self.food = candidate;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> SnakeGame {
        SnakeGame::seeded(Grid::new(20, 15), 7)
    }

    /// Puts food somewhere the snake will not reach in the next few ticks.
    fn park_food(game: &mut SnakeGame, p: Point) {
        game.food = p;
    }

    #[test]
    fn test_initial_state() {
        let g = game();
        assert_eq!(g.len(), 3);
        assert_eq!(g.head(), Some(Point::new(6, 6)));
        assert_eq!(g.heading(), Direction::Right);
        assert_eq!(g.score(), 0);
        assert!(!g.occupies(g.food()));
        assert!(g.grid().contains(g.food()));
    }

    #[test]
    fn test_tick_moves_every_segment() {
        let mut g = game();
        park_food(&mut g, Point::new(0, 0));
        assert_eq!(g.tick(), Some(GameEvent::Step));
        let cells: Vec<Point> = g.snake().collect();
        assert_eq!(
            cells,
            vec![Point::new(7, 6), Point::new(6, 6), Point::new(5, 6)]
        );
    }

    #[test]
    fn test_wraps_right_edge_to_column_zero() {
        let mut g = game();
        park_food(&mut g, Point::new(3, 3));
        g.snake = VecDeque::from(vec![
            Point::new(19, 6),
            Point::new(18, 6),
            Point::new(17, 6),
        ]);
        g.tick();
        assert_eq!(g.head(), Some(Point::new(0, 6)));
    }

    #[test]
    fn test_wraps_top_edge_to_last_row() {
        let mut g = game();
        park_food(&mut g, Point::new(3, 3));
        g.snake = VecDeque::from(vec![
            Point::new(5, 0),
            Point::new(5, 1),
            Point::new(5, 2),
        ]);
        g.heading = Direction::Up;
        g.requested = Direction::Up;
        g.tick();
        assert_eq!(g.head(), Some(Point::new(5, 14)));
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut g = game();
        park_food(&mut g, Point::new(7, 6));
        assert_eq!(g.tick(), Some(GameEvent::Eat));
        assert_eq!(g.score(), 1);
        assert_eq!(g.len(), 4);
        assert_eq!(g.head(), Some(Point::new(7, 6)));
        assert!(!g.occupies(g.food()));
    }

    #[test]
    fn test_reverse_request_is_ignored() {
        let mut g = game();
        park_food(&mut g, Point::new(0, 0));
        g.steer(Direction::Left);
        assert_eq!(g.tick(), Some(GameEvent::Step));
        assert_eq!(g.heading(), Direction::Right);
        assert_eq!(g.head(), Some(Point::new(7, 6)));
    }

    #[test]
    fn test_perpendicular_request_is_applied_next_tick() {
        let mut g = game();
        park_food(&mut g, Point::new(0, 0));
        g.steer(Direction::Down);
        assert_eq!(g.heading(), Direction::Right);
        g.tick();
        assert_eq!(g.heading(), Direction::Down);
        assert_eq!(g.head(), Some(Point::new(6, 7)));
    }

    #[test]
    fn test_self_collision_resets_in_same_tick() {
        let mut g = game();
        park_food(&mut g, Point::new(0, 0));
        // a hook shape: moving up from (5,5) runs into (5,4)
        g.snake = VecDeque::from(vec![
            Point::new(5, 5),
            Point::new(6, 5),
            Point::new(6, 4),
            Point::new(5, 4),
            Point::new(4, 4),
        ]);
        g.heading = Direction::Left;
        g.requested = Direction::Up;
        g.score = 4;

        assert_eq!(g.tick(), Some(GameEvent::GameOver));
        let cells: Vec<Point> = g.snake().collect();
        assert_eq!(cells, INITIAL_SNAKE.to_vec());
        assert_eq!(g.heading(), Direction::Right);
        assert_eq!(g.score(), 0);
        assert!(!g.occupies(g.food()));
    }

    #[test]
    fn test_moving_into_vacated_tail_is_collision() {
        // The body check runs before the tail is dropped.
        let mut g = game();
        park_food(&mut g, Point::new(0, 0));
        g.snake = VecDeque::from(vec![
            Point::new(5, 5),
            Point::new(6, 5),
            Point::new(6, 6),
            Point::new(5, 6),
        ]);
        g.heading = Direction::Left;
        g.requested = Direction::Down;
        assert_eq!(g.tick(), Some(GameEvent::GameOver));
    }

    #[test]
    fn test_empty_grid_is_a_noop() {
        let mut g = SnakeGame::seeded(Grid::default(), 1);
        let food = g.food();
        assert_eq!(g.tick(), None);
        assert_eq!(g.head(), Some(Point::new(6, 6)));
        assert_eq!(g.food(), food);
    }

    #[test]
    fn test_food_never_lands_on_snake() {
        // A tiny board that the snake nearly fills
        let mut g = SnakeGame::seeded(Grid::new(2, 2), 3);
        g.snake = VecDeque::from(vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]);
        for _ in 0..20 {
            g.place_food();
            assert_eq!(g.food(), Point::new(0, 1));
        }
    }

    #[test]
    fn test_grid_for_surface() {
        assert_eq!(Grid::for_surface(0, 40), Grid::default());
        assert_eq!(Grid::for_surface(80, 30), Grid::new(40, 30));
        assert_eq!(Grid::for_surface(10, 5), Grid::new(MIN_COLS, MIN_ROWS));
    }

    #[test]
    fn test_resize_relocates_food_outside_bounds() {
        let mut g = SnakeGame::seeded(Grid::new(40, 30), 11);
        park_food(&mut g, Point::new(35, 25));
        assert_eq!(g.resize(Grid::new(20, 15)), ResizeOutcome::FoodRelocated);
        assert!(g.grid().contains(g.food()));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_resize_resets_when_snake_falls_outside() {
        let mut g = SnakeGame::seeded(Grid::new(40, 30), 11);
        g.snake = VecDeque::from(vec![
            Point::new(30, 20),
            Point::new(29, 20),
            Point::new(28, 20),
        ]);
        g.score = 9;
        assert_eq!(g.resize(Grid::new(20, 15)), ResizeOutcome::Reset);
        assert_eq!(g.score(), 0);
        assert_eq!(g.head(), Some(Point::new(6, 6)));
    }

    #[test]
    fn test_first_layout_places_food() {
        let mut g = SnakeGame::seeded(Grid::default(), 5);
        assert_eq!(g.resize(Grid::new(20, 15)), ResizeOutcome::FoodRelocated);
        assert!(!g.occupies(g.food()));
        assert_eq!(g.resize(Grid::new(20, 15)), ResizeOutcome::Unchanged);
    }

    #[test]
    fn test_direction_reversal() {
        assert!(Direction::Left.is_reverse_of(Direction::Right));
        assert!(Direction::Up.is_reverse_of(Direction::Down));
        assert!(!Direction::Up.is_reverse_of(Direction::Left));
        assert!(!Direction::Up.is_reverse_of(Direction::Up));
    }
}
