/// Everything that can stop an upload or a puzzle start. The display text is
/// what the user sees in the alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("You can upload at most {max} images.")]
    UploadLimit { max: usize },
    #[error("Only image files can be uploaded (got \"{mime}\").")]
    NotAnImage { mime: String },
    #[error("Please select an image first.")]
    NoImageSelected,
    #[error("Please choose the number of pieces.")]
    NoPieceCount,
    #[error("The number of pieces must be between {min} and {max} (got {count}).")]
    PieceCountOutOfRange { count: u32, min: u32, max: u32 },
    #[error("The number of pieces must be a perfect square such as 4, 9 or 16 (got {count}).")]
    NotSquare { count: u32 },
    #[error("Could not read the file: {0}")]
    Read(String),
    #[error("The image data is not a base64 data URI.")]
    InvalidDataUri,
    #[error("Could not decode the image: {0}")]
    Decode(String),
    #[error("Could not encode a puzzle piece: {0}")]
    Encode(String),
    #[error("The image ({width}x{height}) is too small for a {side}x{side} puzzle.")]
    ImageTooSmall { width: u32, height: u32, side: u32 },
}
