use serde::{Deserialize, Serialize};

/// Anything with an intrinsic width and height can be laid out.
///
/// Implement this for your own record type when wrapping it in [`Item`] is
/// inconvenient. Only the two dimensions are ever read.
pub trait Dimensions {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }
}

/// Input record: intrinsic size plus an opaque caller payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<P = ()> {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub payload: P,
}

impl Item<()> {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            payload: (),
        }
    }
}

impl<P> Item<P> {
    pub fn with_payload(width: f64, height: f64, payload: P) -> Self {
        Self {
            width,
            height,
            payload,
        }
    }
}

impl<P> Dimensions for Item<P> {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

impl<T: Dimensions + ?Sized> Dimensions for &T {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }
}

/// Solved geometry for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub left: f64,
    /// Zero-based position inside the row.
    pub index_in_row: usize,
    /// One-based row number.
    pub row_number: usize,
    pub items_in_row: usize,
}

impl Placement {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn is_row_start(&self) -> bool {
        self.index_in_row == 0
    }

    pub fn is_row_end(&self) -> bool {
        self.index_in_row + 1 == self.items_in_row
    }
}

/// Rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl From<&Placement> for Rect {
    fn from(placement: &Placement) -> Self {
        Rect::new(
            placement.left,
            placement.top,
            placement.width,
            placement.height,
        )
    }
}
