use serde::Deserialize;

/// A handle to a font loaded by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    /// Name the font was loaded under.
    name: String,
}

impl Font {
    /// Construct a handle for the named font.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name the font was loaded under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The coordinate space the interface is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Camera {
    /// Offset by the game camera.
    #[default]
    World,
    /// Fixed to the window.
    Screen,
}

/// Options handed to the backend when a frame is drawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    /// Horizontal scale factor.
    pub scale_x: f32,
    /// Vertical scale factor.
    pub scale_y: f32,
    /// Rotation in degrees.
    pub angle: f32,
    /// Coordinate space.
    pub camera: Camera,
    /// Line width for outlines.
    pub line_width: i32,
    /// Bitmap to draw into instead of the window.
    pub target: Option<String>,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            camera: Camera::World,
            line_width: 1,
            target: None,
        }
    }
}
