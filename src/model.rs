//! Core data model for the image puzzle.
//! `AppState` is the single owner of everything the shell shows; components
//! get read-only slices of it plus callbacks that dispatch `AppAction`s.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::{BOARD_MAX_PX, DEFAULT_PIECES, MAX_PIECES, MAX_UPLOADS, MIN_PIECES};
use crate::error::PuzzleError;
use crate::state::completion;
use crate::util::{board_size_for_viewport, clog};

/// Square puzzle layout: `side` rows by `side` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    side: u32,
}

impl Grid {
    /// Validates a requested piece count. Zero counts as "not chosen".
    pub fn from_piece_count(count: u32) -> Result<Self, PuzzleError> {
        if count == 0 {
            return Err(PuzzleError::NoPieceCount);
        }
        if !(MIN_PIECES..=MAX_PIECES).contains(&count) {
            return Err(PuzzleError::PieceCountOutOfRange {
                count,
                min: MIN_PIECES,
                max: MAX_PIECES,
            });
        }
        let side = count.isqrt();
        if side * side != count {
            return Err(PuzzleError::NotSquare { count });
        }
        Ok(Self { side })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn rows(&self) -> u32 {
        self.side
    }

    pub fn cols(&self) -> u32 {
        self.side
    }

    pub fn len(&self) -> usize {
        (self.side * self.side) as usize
    }

    /// (row, col) of a tile id in row-major order.
    pub fn cell(&self, id: u32) -> (u32, u32) {
        (id / self.side, id % self.side)
    }

    /// Width (and height) of one cell in board percent.
    pub fn cell_percent(&self) -> f64 {
        100.0 / self.side as f64
    }

    /// Where tile `id` sits in the solved picture.
    pub fn home(&self, id: u32) -> Position {
        let (row, col) = self.cell(id);
        let step = self.cell_percent();
        Position {
            left: col as f64 * step,
            top: row as f64 * step,
        }
    }
}

/// Offset of a tile's top-left corner in percent of the board size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub name: String,
    pub mime: String,
    /// `data:<mime>;base64,...`, used for the thumbnail and as split input.
    pub data_uri: Rc<str>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Row-major index of the cell this fragment was cut from.
    pub id: u32,
    /// PNG data URI of the fragment.
    pub fragment: Rc<str>,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub images: Vec<UploadedImage>,
    /// Index into `images` of the puzzle source.
    pub selected: Option<usize>,
    /// As typed by the user; validated on start.
    pub piece_count: u32,
    pub board_px: f64,
    /// Layout of the active puzzle, `None` until the first start succeeds.
    pub grid: Option<Grid>,
    pub tiles: Vec<Tile>,
    pub complete: bool,
    /// Drops made in the active puzzle.
    pub moves: u32,
    /// A split is in flight.
    pub preparing: bool,
    /// Bumped on every start; split results tagged with an older value are dropped.
    pub generation: u64,
    /// Generation of the tile set currently on the board.
    pub board_generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            selected: None,
            piece_count: DEFAULT_PIECES,
            board_px: BOARD_MAX_PX,
            grid: None,
            tiles: Vec::new(),
            complete: false,
            moves: 0,
            preparing: false,
            generation: 0,
            board_generation: 0,
        }
    }
}

impl AppState {
    pub fn check_upload(&self) -> Result<(), PuzzleError> {
        if self.images.len() >= MAX_UPLOADS {
            return Err(PuzzleError::UploadLimit { max: MAX_UPLOADS });
        }
        Ok(())
    }

    /// Only `image/*` files are accepted, whatever the picker let through.
    pub fn check_image_mime(mime: &str) -> Result<(), PuzzleError> {
        if !mime.trim().to_ascii_lowercase().starts_with("image/") {
            return Err(PuzzleError::NotAnImage { mime: mime.to_string() });
        }
        Ok(())
    }

    pub fn selected_image(&self) -> Option<&UploadedImage> {
        self.selected.and_then(|i| self.images.get(i))
    }

    /// Everything a start needs, or the reason it cannot happen.
    pub fn puzzle_request(&self) -> Result<(UploadedImage, Grid), PuzzleError> {
        let image = self
            .selected_image()
            .cloned()
            .ok_or(PuzzleError::NoImageSelected)?;
        let grid = Grid::from_piece_count(self.piece_count)?;
        Ok((image, grid))
    }

    pub fn is_active(&self) -> bool {
        self.grid.is_some() && !self.tiles.is_empty()
    }
}

pub enum AppAction {
    AddImage(UploadedImage),
    SelectImage(usize),
    SetPieceCount(u32),
    Resize { viewport_width: f64 },
    BeginPuzzle { generation: u64 },
    PuzzleReady { generation: u64, grid: Grid, tiles: Vec<Tile> },
    PuzzleFailed { generation: u64 },
    MoveTile { id: u32, position: Position },
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use AppAction::*;
        let mut new = (*self).clone();
        match action {
            AddImage(image) => {
                if new.check_upload().is_err() {
                    clog(&format!("upload dropped, already holding {}", new.images.len()));
                    return self;
                }
                new.images.push(image);
                if new.selected.is_none() {
                    new.selected = Some(new.images.len() - 1);
                }
            }
            SelectImage(idx) => {
                if idx >= new.images.len() {
                    return self;
                }
                new.selected = Some(idx);
            }
            SetPieceCount(count) => { new.piece_count = count; }
            Resize { viewport_width } => {
                let px = board_size_for_viewport(viewport_width);
                if px == new.board_px {
                    return self;
                }
                new.board_px = px;
            }
            BeginPuzzle { generation } => {
                new.generation = generation;
                new.preparing = true;
            }
            PuzzleReady { generation, grid, tiles } => {
                if generation != new.generation {
                    clog(&format!("discarding stale split {generation} (current {})", new.generation));
                    return self;
                }
                new.grid = Some(grid);
                new.tiles = tiles;
                new.board_generation = generation;
                new.complete = false;
                new.moves = 0;
                new.preparing = false;
            }
            PuzzleFailed { generation } => {
                if generation != new.generation {
                    return self;
                }
                new.preparing = false;
            }
            MoveTile { id, position } => {
                let Some(grid) = new.grid else { return self };
                let Some(tile) = new.tiles.iter_mut().find(|t| t.id == id) else {
                    return self;
                };
                tile.position = position;
                new.moves = new.moves.saturating_add(1);
                // Sticky until the next tile set is installed.
                new.complete = new.complete || completion::is_complete(&new.tiles, grid.len() as u32);
            }
        }
        Rc::new(new)
    }
}
