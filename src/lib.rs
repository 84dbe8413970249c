use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::console;

const VALUE_MIN: u8 = 1;
const VALUE_MAX: u8 = 9;
const TICK_MS: f32 = 1000.0;
const SEARCH_BUDGET: u32 = 50_000;
const MAX_DIM: usize = 64;

#[wasm_bindgen(start)]
pub fn bootstrap() {
    console_error_panic_hook::set_once();
}

fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic,
    Time,
}

/// Opaque block identity. Allocated from a per-engine counter and never reused.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BlockId(pub u32);

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub value: u8,
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Supply {
    Limited { pool: u32 },
    Unlimited,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TargetRange {
    pub min: u32,
    pub max: u32,
}

impl TargetRange {
    fn clamp(self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct GameSettings {
    pub rows: usize,
    pub cols: usize,
    pub initial_rows: usize,
    pub target_min: u32,
    pub target_max: u32,
    pub time_limit_secs: u32,
    pub points_per_block: u32,
    pub supply: Supply,
    pub difficulty_step: u32,
    pub min_shift: u32,
    pub max_shift: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 6,
            initial_rows: 4,
            target_min: 10,
            target_max: 20,
            time_limit_secs: 10,
            points_per_block: 10,
            supply: Supply::Limited { pool: 100 },
            difficulty_step: 500,
            min_shift: 5,
            max_shift: 10,
        }
    }
}

impl GameSettings {
    /// Clamps values the engine cannot honour (empty or oversized boards,
    /// inverted target ranges, zero-length countdowns) into the nearest usable
    /// setting.
    pub fn sanitized(mut self) -> Self {
        self.rows = self.rows.clamp(1, MAX_DIM);
        self.cols = self.cols.clamp(1, MAX_DIM);
        self.initial_rows = self.initial_rows.min(self.rows);
        self.target_min = self.target_min.max(1);
        self.target_max = self.target_max.max(self.target_min);
        self.time_limit_secs = self.time_limit_secs.max(1);
        self.difficulty_step = self.difficulty_step.max(1);
        self.max_shift = self.max_shift.max(self.min_shift);
        self
    }

    pub fn base_range(&self) -> TargetRange {
        TargetRange {
            min: self.target_min,
            max: self.target_max,
        }
    }

    /// Range the next target is drawn from. Only the supply-limited ruleset
    /// scales with score; the unlimited one always uses the base range.
    pub fn target_range(&self, score: u32) -> TargetRange {
        match self.supply {
            Supply::Unlimited => self.base_range(),
            Supply::Limited { .. } => {
                let multiplier = score / self.difficulty_step;
                TargetRange {
                    min: self
                        .target_min
                        .saturating_add(self.min_shift.saturating_mul(multiplier)),
                    max: self
                        .target_max
                        .saturating_add(self.max_shift.saturating_mul(multiplier)),
                }
            }
        }
    }
}

/// Source of block values and targets.
pub trait NumberSource {
    /// Value for a freshly created block, in `1..=9`.
    fn next_value(&mut self) -> u8;
    fn next_target(&mut self, range: TargetRange) -> u32;
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub enum NumberSourceKind {
    #[default]
    TrueRandom,
    Seeded { seed: u64 },
    Scripted { values: Vec<u8>, targets: Vec<u32> },
}

struct TrueRandom;

impl NumberSource for TrueRandom {
    fn next_value(&mut self) -> u8 {
        thread_rng().gen_range(VALUE_MIN..=VALUE_MAX)
    }

    fn next_target(&mut self, range: TargetRange) -> u32 {
        thread_rng().gen_range(range.min..=range.max)
    }
}

pub struct Seeded {
    rng: StdRng,
}

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NumberSource for Seeded {
    fn next_value(&mut self) -> u8 {
        self.rng.gen_range(VALUE_MIN..=VALUE_MAX)
    }

    fn next_target(&mut self, range: TargetRange) -> u32 {
        self.rng.gen_range(range.min..=range.max)
    }
}

/// Replays fixed lists, wrapping around when exhausted. Out-of-range entries
/// are clamped rather than rejected.
pub struct Scripted {
    values: Vec<u8>,
    targets: Vec<u32>,
    value_cursor: usize,
    target_cursor: usize,
}

impl Scripted {
    pub fn new(values: Vec<u8>, targets: Vec<u32>) -> Self {
        Self {
            values,
            targets,
            value_cursor: 0,
            target_cursor: 0,
        }
    }
}

impl NumberSource for Scripted {
    fn next_value(&mut self) -> u8 {
        if self.values.is_empty() {
            return VALUE_MIN;
        }
        let value = self.values[self.value_cursor % self.values.len()];
        self.value_cursor += 1;
        value.clamp(VALUE_MIN, VALUE_MAX)
    }

    fn next_target(&mut self, range: TargetRange) -> u32 {
        if self.targets.is_empty() {
            return range.min;
        }
        let target = self.targets[self.target_cursor % self.targets.len()];
        self.target_cursor += 1;
        range.clamp(target)
    }
}

fn source_from_kind(kind: NumberSourceKind) -> Box<dyn NumberSource> {
    match kind {
        NumberSourceKind::TrueRandom => Box::new(TrueRandom),
        NumberSourceKind::Seeded { seed } => Box::new(Seeded::new(seed)),
        NumberSourceKind::Scripted { values, targets } => Box::new(Scripted::new(values, targets)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    blocks: Vec<Block>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            blocks: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn at(&self, row: usize, col: usize) -> Option<&Block> {
        self.blocks.iter().find(|b| b.row == row && b.col == col)
    }

    pub fn top_occupied(&self) -> bool {
        self.blocks.iter().any(|b| b.row == 0)
    }

    fn clear(&mut self) {
        self.blocks.clear();
    }

    fn push(&mut self, block: Block) {
        debug_assert!(self.at(block.row, block.col).is_none());
        self.blocks.push(block);
    }

    // Callers check `top_occupied` first.
    fn shift_up(&mut self) {
        for b in self.blocks.iter_mut() {
            b.row -= 1;
        }
    }

    fn remove(&mut self, ids: &[BlockId]) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(|b| !ids.contains(&b.id));
        before - self.blocks.len()
    }

    /// Drops every column's blocks to the floor with no gaps, keeping their
    /// vertical order. Returns whether any block moved.
    pub fn settle(&mut self) -> bool {
        let mut moved = false;
        for col in 0..self.cols {
            let mut column: Vec<usize> = self
                .blocks
                .iter()
                .enumerate()
                .filter(|(_, b)| b.col == col)
                .map(|(idx, _)| idx)
                .collect();
            column.sort_by(|&a, &b| self.blocks[b].row.cmp(&self.blocks[a].row));
            for (depth, idx) in column.into_iter().enumerate() {
                let row = self.rows - 1 - depth;
                if self.blocks[idx].row != row {
                    self.blocks[idx].row = row;
                    moved = true;
                }
            }
        }
        moved
    }
}

/// Searches the board for blocks whose values sum exactly to `target`,
/// preferring blocks nearer the top. Gives up after a fixed node budget.
pub fn find_match(board: &Board, target: u32) -> Option<Vec<BlockId>> {
    let mut candidates: Vec<&Block> = board.blocks().iter().collect();
    candidates.sort_by_key(|b| (b.row, std::cmp::Reverse(b.value)));
    let mut picked = Vec::new();
    let mut budget = SEARCH_BUDGET;
    if search_subset(&candidates, 0, target, &mut picked, &mut budget) {
        Some(picked)
    } else {
        None
    }
}

fn search_subset(
    candidates: &[&Block],
    start: usize,
    remaining: u32,
    picked: &mut Vec<BlockId>,
    budget: &mut u32,
) -> bool {
    if remaining == 0 {
        return true;
    }
    for idx in start..candidates.len() {
        if *budget == 0 {
            return false;
        }
        *budget -= 1;
        let value = candidates[idx].value as u32;
        if value > remaining {
            continue;
        }
        picked.push(candidates[idx].id);
        if search_subset(candidates, idx + 1, remaining - value, picked, budget) {
            return true;
        }
        picked.pop();
    }
    false
}

/// The one-second countdown used by time mode. The engine owns exactly one;
/// `stop` is the only way it goes dormant and is safe to call repeatedly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    running: bool,
    carry_ms: f32,
}

impl Countdown {
    fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
            running: false,
            carry_ms: 0.0,
        }
    }

    fn start(&mut self) {
        self.remaining = self.limit;
        self.carry_ms = 0.0;
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
        self.carry_ms = 0.0;
    }

    fn reset(&mut self) {
        self.remaining = self.limit;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // Returns true when the countdown expired; it rearms at the limit.
    fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.remaining <= 1 {
            self.remaining = self.limit;
            true
        } else {
            self.remaining -= 1;
            false
        }
    }

    fn accumulate(&mut self, dt_ms: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.carry_ms += dt_ms.max(0.0);
        let whole = (self.carry_ms / TICK_MS).floor();
        self.carry_ms -= whole * TICK_MS;
        whole as u32
    }
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Pending,
    Overshot,
    Matched,
    Won,
    Lost,
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoveReport {
    pub outcome: Outcome,
    pub cleared: Vec<BlockId>,
    pub points: u32,
    pub row_added: bool,
    pub target: u32,
    pub is_win: bool,
    pub is_game_over: bool,
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    pub seconds_left: u32,
    pub row_added: bool,
    pub game_over: bool,
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlockView {
    pub id: BlockId,
    pub value: u8,
    pub row: usize,
    pub col: usize,
    pub selected: bool,
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub mode: Option<GameMode>,
    pub rows: usize,
    pub cols: usize,
    pub blocks: Vec<BlockView>,
    pub target: u32,
    pub current_sum: u32,
    pub score: u32,
    pub high_score: u32,
    pub selected_ids: Vec<BlockId>,
    pub is_game_over: bool,
    pub is_win: bool,
    pub time_left: u32,
    pub timer_running: bool,
    pub blocks_pool: Option<u32>,
}

pub struct Game {
    settings: GameSettings,
    source: Box<dyn NumberSource>,
    board: Board,
    target: u32,
    score: u32,
    high_score: u32,
    selected: Vec<BlockId>,
    pool: Option<u32>,
    mode: Option<GameMode>,
    game_over: bool,
    won: bool,
    countdown: Countdown,
    next_id: u32,
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_source(settings, Box::new(TrueRandom))
    }

    pub fn from_kind(settings: GameSettings, kind: NumberSourceKind) -> Self {
        Self::with_source(settings, source_from_kind(kind))
    }

    /// Builds an engine parked at the mode-selection menu.
    pub fn with_source(settings: GameSettings, source: Box<dyn NumberSource>) -> Self {
        let settings = settings.sanitized();
        Self {
            board: Board::new(settings.rows, settings.cols),
            target: settings.target_min,
            score: 0,
            high_score: 0,
            selected: Vec::new(),
            pool: None,
            mode: None,
            game_over: false,
            won: false,
            countdown: Countdown::new(settings.time_limit_secs),
            next_id: 0,
            source,
            settings,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn selected(&self) -> &[BlockId] {
        &self.selected
    }

    pub fn blocks_pool(&self) -> Option<u32> {
        self.pool
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_win(&self) -> bool {
        self.won
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// A session is active once a mode is chosen and until it wins or loses.
    pub fn is_active(&self) -> bool {
        self.mode.is_some() && !self.game_over && !self.won
    }

    pub fn current_sum(&self) -> u32 {
        self.selected
            .iter()
            .filter_map(|id| self.board.get(*id))
            .map(|b| b.value as u32)
            .sum()
    }

    /// Starts a fresh session in `mode`, or returns to the menu when `mode`
    /// is `None`. The high score is the only state carried over.
    pub fn start_session(&mut self, mode: Option<GameMode>) {
        self.countdown.stop();
        self.countdown = Countdown::new(self.settings.time_limit_secs);
        self.board.clear();
        self.selected.clear();
        self.score = 0;
        self.game_over = false;
        self.won = false;
        self.mode = mode;
        self.pool = match self.settings.supply {
            Supply::Limited { pool } => Some(pool),
            Supply::Unlimited => None,
        };

        let Some(mode) = mode else {
            self.pool = None;
            self.target = self.settings.target_min;
            log("[session] back to menu");
            return;
        };

        let bottom = self.settings.rows - 1;
        'fill: for depth in 0..self.settings.initial_rows {
            for col in 0..self.settings.cols {
                if !self.take_from_pool() {
                    break 'fill;
                }
                let block = self.spawn(bottom - depth, col);
                self.board.push(block);
            }
        }
        self.target = self.draw_target(self.settings.base_range());
        if mode == GameMode::Time {
            self.countdown.start();
        }
        log(&format!(
            "[session] started {:?}: {} blocks, target {}",
            mode,
            self.board.len(),
            self.target
        ));
        self.settle_supply();
    }

    /// Toggles `id` in the selection and evaluates the result. Ids that are
    /// not on the board are accepted and then dropped by evaluation.
    pub fn select_block(&mut self, id: BlockId) -> MoveReport {
        if !self.is_active() {
            return self.report(Outcome::Ignored);
        }
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
        self.evaluate()
    }

    pub fn evaluate(&mut self) -> MoveReport {
        if !self.is_active() {
            return self.report(Outcome::Ignored);
        }
        let board = &self.board;
        self.selected.retain(|id| board.get(*id).is_some());

        let sum = self.current_sum();
        if sum == self.target {
            self.resolve_match()
        } else if sum > self.target {
            self.selected.clear();
            self.report(Outcome::Overshot)
        } else {
            self.report(Outcome::Pending)
        }
    }

    fn resolve_match(&mut self) -> MoveReport {
        let cleared = std::mem::take(&mut self.selected);
        let points = (cleared.len() as u32).saturating_mul(self.settings.points_per_block);
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
        self.board.remove(&cleared);

        if self.board.is_empty() {
            self.won = true;
            self.countdown.stop();
            log(&format!("[session] board cleared, score {}", self.score));
            let mut report = self.report(Outcome::Won);
            report.cleared = cleared;
            report.points = points;
            return report;
        }

        self.board.settle();
        self.target = self.draw_target(self.settings.target_range(self.score));
        let mut row_added = false;
        match self.mode {
            Some(GameMode::Classic) => row_added = self.add_row(),
            Some(GameMode::Time) => self.countdown.reset(),
            None => {}
        }
        self.settle_supply();

        let outcome = if self.game_over {
            Outcome::Lost
        } else {
            Outcome::Matched
        };
        let mut report = self.report(outcome);
        report.cleared = cleared;
        report.points = points;
        report.row_added = row_added;
        report
    }

    /// Pushes every block up one row and fills a new bottom row. Fails, and
    /// ends the session, if the top row is already occupied.
    pub fn add_row(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        if self.board.top_occupied() {
            self.game_over = true;
            self.countdown.stop();
            log(&format!("[session] board full, final score {}", self.score));
            return false;
        }
        self.board.shift_up();
        let bottom = self.settings.rows - 1;
        for col in 0..self.settings.cols {
            if !self.take_from_pool() {
                break;
            }
            let block = self.spawn(bottom, col);
            self.board.push(block);
        }
        if self.mode == Some(GameMode::Time) {
            self.countdown.reset();
        }
        true
    }

    /// One second of the external clock. Only time mode reacts.
    pub fn on_tick(&mut self) -> TickReport {
        let mut row_added = false;
        if self.is_active() && self.mode == Some(GameMode::Time) && self.countdown.tick() {
            row_added = self.add_row();
        }
        self.evaluate();
        TickReport {
            seconds_left: self.countdown.remaining(),
            row_added,
            game_over: self.game_over,
        }
    }

    /// Feeds frame time into the countdown and fires `on_tick` for each whole
    /// second. Returns the number of ticks fired.
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        let seconds = self.countdown.accumulate(dt_ms);
        let mut fired = 0;
        for _ in 0..seconds {
            if !self.countdown.is_running() {
                break;
            }
            self.on_tick();
            fired += 1;
        }
        fired
    }

    pub fn snapshot(&self) -> GameView {
        let blocks = self
            .board
            .blocks()
            .iter()
            .map(|b| BlockView {
                id: b.id,
                value: b.value,
                row: b.row,
                col: b.col,
                selected: self.selected.contains(&b.id),
            })
            .collect();
        GameView {
            mode: self.mode,
            rows: self.settings.rows,
            cols: self.settings.cols,
            blocks,
            target: self.target,
            current_sum: self.current_sum(),
            score: self.score,
            high_score: self.high_score,
            selected_ids: self.selected.clone(),
            is_game_over: self.game_over,
            is_win: self.won,
            time_left: self.countdown.remaining(),
            timer_running: self.countdown.is_running(),
            blocks_pool: self.pool,
        }
    }

    // An empty board is never a resting state: refill it if supply remains,
    // otherwise the session is lost.
    fn settle_supply(&mut self) {
        if !self.is_active() || !self.board.is_empty() {
            return;
        }
        match self.pool {
            Some(0) => {
                self.game_over = true;
                self.countdown.stop();
                log(&format!("[session] supply exhausted, final score {}", self.score));
            }
            _ => {
                self.add_row();
            }
        }
    }

    fn take_from_pool(&mut self) -> bool {
        match self.pool.as_mut() {
            None => true,
            Some(0) => false,
            Some(pool) => {
                *pool -= 1;
                true
            }
        }
    }

    fn allocate_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn spawn(&mut self, row: usize, col: usize) -> Block {
        let id = self.allocate_id();
        let value = self.source.next_value().clamp(VALUE_MIN, VALUE_MAX);
        Block { id, value, row, col }
    }

    fn draw_target(&mut self, range: TargetRange) -> u32 {
        range.clamp(self.source.next_target(range))
    }

    fn report(&self, outcome: Outcome) -> MoveReport {
        MoveReport {
            outcome,
            cleared: Vec::new(),
            points: 0,
            row_added: false,
            target: self.target,
            is_win: self.won,
            is_game_over: self.game_over,
        }
    }
}


#[wasm_bindgen]
pub struct GameClient {
    game: Game,
}

#[wasm_bindgen]
impl GameClient {
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue, seed: Option<u32>) -> Result<GameClient, JsValue> {
        let settings: GameSettings = from_value(settings).unwrap_or_default();
        let kind = seed
            .map(|seed| NumberSourceKind::Seeded { seed: seed as u64 })
            .unwrap_or_default();
        Ok(Self {
            game: Game::from_kind(settings, kind),
        })
    }

    #[wasm_bindgen(js_name = startSession)]
    pub fn start_session(&mut self, mode: JsValue) -> Result<(), JsValue> {
        let mode: Option<GameMode> = from_value(mode)?;
        self.game.start_session(mode);
        Ok(())
    }

    #[wasm_bindgen(js_name = selectBlock)]
    pub fn select_block(&mut self, id: u32) -> Result<JsValue, JsValue> {
        let report = self.game.select_block(BlockId(id));
        to_value(&report).map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = onTick)]
    pub fn on_tick(&mut self) -> Result<JsValue, JsValue> {
        let report = self.game.on_tick();
        to_value(&report).map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = tick)]
    pub fn tick(&mut self, dt_ms: f32) -> Result<JsValue, JsValue> {
        self.game.advance(dt_ms);
        to_value(&self.game.snapshot()).map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = snapshot)]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_value(&self.game.snapshot()).map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = highScore)]
    pub fn high_score(&self) -> u32 {
        self.game.high_score()
    }
}
