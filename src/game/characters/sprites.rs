// Static 8x8 character bitmaps and the renderer seam
//
// Pixel value 0 is ink, 255 is transparent. The display driver scales each
// sprite 4x and tints ink with a palette index.

use super::animation::{FrameData, SpritePose};

/// One 8x8 monochrome sprite, row-major
pub type Bitmap = [[u8; 8]; 8];

/// Sprite edge length in source pixels
pub const SPRITE_SIZE: u32 = 8;

/// Integer upscale applied by the display
pub const SPRITE_SCALE: u32 = 4;

/// Offset from the character position to the sprite's top-left corner
pub const SPRITE_HALF_EXTENT: i32 = (SPRITE_SIZE * SPRITE_SCALE / 2) as i32;

/// Palette index for the normal sprites
pub const COLOUR_NORMAL: u8 = 5;

/// Palette index for the dash sprite
pub const COLOUR_DASH: u8 = 6;

pub const IDLE: Bitmap = [
    [255, 255, 0, 0, 0, 0, 255, 255],
    [255, 255, 0, 0, 0, 0, 255, 255],
    [255, 0, 0, 255, 255, 0, 0, 255],
    [255, 0, 0, 0, 0, 0, 0, 255],
    [255, 0, 255, 255, 255, 255, 0, 255],
    [255, 0, 255, 255, 255, 255, 0, 255],
    [255, 255, 0, 255, 255, 0, 255, 255],
    [255, 255, 0, 255, 255, 0, 255, 255],
];

pub const WALK_1: Bitmap = [
    [255, 255, 0, 0, 0, 0, 255, 255],
    [255, 255, 0, 0, 0, 0, 255, 255],
    [255, 0, 0, 255, 255, 0, 0, 255],
    [255, 0, 0, 0, 0, 0, 0, 255],
    [255, 0, 255, 255, 255, 0, 0, 255],
    [255, 0, 255, 255, 0, 255, 255, 255],
    [255, 255, 0, 0, 255, 0, 255, 255],
    [255, 255, 0, 255, 255, 255, 0, 255],
];

pub const WALK_2: Bitmap = [
    [255, 255, 0, 0, 0, 0, 255, 255],
    [255, 255, 0, 0, 0, 0, 255, 255],
    [255, 0, 0, 255, 255, 0, 0, 255],
    [255, 0, 0, 0, 0, 0, 0, 255],
    [255, 0, 0, 255, 255, 255, 255, 255],
    [255, 0, 255, 255, 0, 255, 255, 255],
    [255, 255, 0, 255, 255, 0, 0, 255],
    [255, 255, 255, 0, 255, 255, 0, 255],
];

/// Speed lines around the body
pub const DASHING: Bitmap = [
    [255, 0, 0, 255, 255, 0, 0, 255],
    [0, 255, 255, 255, 255, 255, 255, 0],
    [0, 255, 0, 0, 0, 0, 255, 0],
    [255, 255, 0, 255, 255, 0, 255, 255],
    [255, 255, 0, 255, 255, 0, 255, 255],
    [0, 255, 0, 0, 0, 0, 255, 0],
    [0, 255, 255, 255, 255, 255, 255, 0],
    [255, 0, 0, 255, 255, 0, 0, 255],
];

/// Bitmap for a frame. Airborne reuses the wide-stride walk frame.
pub fn bitmap_for(frame: &FrameData) -> &'static Bitmap {
    match frame.pose {
        SpritePose::Idle => &IDLE,
        SpritePose::Walk if frame.frame_index == 0 => &WALK_1,
        SpritePose::Walk => &WALK_2,
        SpritePose::Jump => &WALK_2,
        SpritePose::Dash => &DASHING,
    }
}

/// Palette index for a pose
pub fn colour_for(pose: SpritePose) -> u8 {
    match pose {
        SpritePose::Dash => COLOUR_DASH,
        _ => COLOUR_NORMAL,
    }
}

/// One sprite blit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteDraw<'a> {
    /// Top-left corner on screen
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Row-major source pixels, `width * height` long
    pub pixels: &'a [u8],
    pub colour: u8,
    pub scale: u32,
    pub flip_horizontal: bool,
}

impl SpriteDraw<'static> {
    /// Build the blit request for a frame with its centre at `(x, y)`
    pub fn centred(x: i32, y: i32, frame: &FrameData) -> Self {
        let bitmap = bitmap_for(frame);
        Self {
            x: x - SPRITE_HALF_EXTENT,
            y: y - SPRITE_HALF_EXTENT,
            width: SPRITE_SIZE,
            height: SPRITE_SIZE,
            pixels: bytemuck::cast_slice(bitmap.as_slice()),
            colour: colour_for(frame.pose),
            scale: SPRITE_SCALE,
            flip_horizontal: frame.flip_horizontal,
        }
    }
}

/// Display collaborator that blits scaled sprites
pub trait SpriteRenderer {
    fn draw_sprite(&mut self, sprite: &SpriteDraw<'_>);
}
