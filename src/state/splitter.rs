// Cuts a source image into a square grid of PNG fragments with scattered start positions.

use std::io::Cursor;
use std::rc::Rc;

use image::{DynamicImage, GenericImageView, ImageFormat};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::PuzzleError;
use crate::model::{Grid, Position, Tile};
use crate::util::{from_data_uri, to_data_uri};

pub fn decode(bytes: &[u8]) -> Result<DynamicImage, PuzzleError> {
    image::load_from_memory(bytes).map_err(|e| PuzzleError::Decode(e.to_string()))
}

/// Row-major sub-images. Leftover pixels past `side * piece` on either axis are dropped.
pub fn cut(img: &DynamicImage, grid: Grid) -> Result<Vec<DynamicImage>, PuzzleError> {
    let (width, height) = img.dimensions();
    let piece_w = width / grid.cols();
    let piece_h = height / grid.rows();
    if piece_w == 0 || piece_h == 0 {
        return Err(PuzzleError::ImageTooSmall {
            width,
            height,
            side: grid.side(),
        });
    }
    let mut pieces = Vec::with_capacity(grid.len());
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            pieces.push(img.crop_imm(x * piece_w, y * piece_h, piece_w, piece_h));
        }
    }
    Ok(pieces)
}

pub fn encode_png(img: &DynamicImage) -> Result<String, PuzzleError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| PuzzleError::Encode(e.to_string()))?;
    Ok(to_data_uri("image/png", buf.get_ref()))
}

/// Uniform in `[0,100) x [0,100)`; overlaps are fine.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position {
        left: rng.random_range(0.0..100.0),
        top: rng.random_range(0.0..100.0),
    }
}

pub fn split<R: Rng + ?Sized>(bytes: &[u8], grid: Grid, rng: &mut R) -> Result<Vec<Tile>, PuzzleError> {
    let img = decode(bytes)?;
    cut(&img, grid)?
        .iter()
        .enumerate()
        .map(|(id, piece)| {
            Ok::<_, PuzzleError>(Tile {
                id: id as u32,
                fragment: Rc::from(encode_png(piece)?),
                position: scatter(rng),
            })
        })
        .collect()
}

/// Async entry point used by the shell. Yields to the event loop once so the
/// "preparing" state paints before the decode blocks the thread.
pub async fn split_async(data_uri: Rc<str>, grid: Grid, seed: u64) -> Result<Vec<Tile>, PuzzleError> {
    gloo::timers::future::TimeoutFuture::new(0).await;
    let bytes = from_data_uri(&data_uri)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    split(&bytes, grid, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::collections::BTreeSet;

    // Every pixel encodes the cell it belongs to, so fragments can be traced back.
    fn sample_png(width: u32, height: u32, side: u32) -> Vec<u8> {
        let cell_w = width / side;
        let cell_h = height / side;
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let col = (x / cell_w).min(side - 1) as u8;
            let row = (y / cell_h).min(side - 1) as u8;
            Rgba([row * 20, col * 20, 200, 255])
        });
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn split_yields_every_id_once() {
        for count in [4u32, 9, 16, 25] {
            let grid = Grid::from_piece_count(count).unwrap();
            let tiles = split(&sample_png(100, 60, grid.side()), grid, &mut rng(7)).unwrap();
            assert_eq!(tiles.len(), count as usize);
            let ids: BTreeSet<u32> = tiles.iter().map(|t| t.id).collect();
            assert_eq!(ids, (0..count).collect::<BTreeSet<u32>>());
        }
    }

    #[test]
    fn fragments_match_their_cells() {
        let grid = Grid::from_piece_count(9).unwrap();
        let tiles = split(&sample_png(90, 60, 3), grid, &mut rng(1)).unwrap();
        for tile in &tiles {
            let bytes = from_data_uri(&tile.fragment).unwrap();
            let piece = decode(&bytes).unwrap();
            assert_eq!(piece.dimensions(), (30, 20));
            let (row, col) = grid.cell(tile.id);
            let expected = Rgba([row as u8 * 20, col as u8 * 20, 200, 255]);
            assert_eq!(piece.get_pixel(0, 0), expected, "tile {}", tile.id);
            assert_eq!(piece.get_pixel(29, 19), expected, "tile {}", tile.id);
        }
    }

    #[test]
    fn uneven_sizes_drop_the_remainder() {
        let grid = Grid::from_piece_count(4).unwrap();
        let img = decode(&sample_png(101, 51, 2)).unwrap();
        let pieces = cut(&img, grid).unwrap();
        assert!(pieces.iter().all(|p| p.dimensions() == (50, 25)));
    }

    #[test]
    fn start_positions_are_scattered_in_range() {
        let grid = Grid::from_piece_count(16).unwrap();
        let png = sample_png(64, 64, 4);
        let a = split(&png, grid, &mut rng(1)).unwrap();
        let b = split(&png, grid, &mut rng(2)).unwrap();
        for t in a.iter().chain(&b) {
            assert!((0.0..100.0).contains(&t.position.left));
            assert!((0.0..100.0).contains(&t.position.top));
        }
        let pa: Vec<Position> = a.iter().map(|t| t.position).collect();
        let pb: Vec<Position> = b.iter().map(|t| t.position).collect();
        assert_ne!(pa, pb);
        assert!(pa.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn undecodable_bytes_fail() {
        let grid = Grid::from_piece_count(4).unwrap();
        let err = split(b"definitely not an image", grid, &mut rng(0)).unwrap_err();
        assert!(matches!(err, PuzzleError::Decode(_)));
    }

    #[test]
    fn tiny_images_are_rejected() {
        let grid = Grid::from_piece_count(100).unwrap();
        let err = split(&sample_png(5, 40, 1), grid, &mut rng(0)).unwrap_err();
        assert_eq!(err, PuzzleError::ImageTooSmall { width: 5, height: 40, side: 10 });
    }
}
