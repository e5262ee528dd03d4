/// Navigation, scene and page tuning constants.
///
/// These keep magic numbers out of the navigator, scene updater and DOM glue.
/// Depths and positions are in world units; times are in seconds unless the
/// name says otherwise.

// Section transitions
pub const TRANSITION_DURATION_SEC: f32 = 0.8;
pub const SLIDE_OFFSET_PCT: f32 = 100.0; // sections above/below the target sit one extent away

// Camera pose per section: depth = index * STEP_Z + BASE_Z, rotation = index * STEP_ANGLE
pub const CAMERA_BASE_Z: f32 = 30.0;
pub const CAMERA_STEP_Z: f32 = -5.0;
pub const CAMERA_STEP_ANGLE: f32 = 0.1;

// Camera projection
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Input
pub const TOUCH_SWIPE_THRESHOLD_PX: f32 = 50.0;

// Frame pacing
pub const TARGET_FPS: f64 = 60.0;
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / TARGET_FPS;

// Starfield
pub const STAR_COUNT: usize = 200;
pub const STAR_SPREAD: f32 = 100.0; // positions are uniform in [-SPREAD/2, SPREAD/2)
pub const STAR_SIZE: f32 = 0.25;
pub const STAR_ROTATION_STEP: f32 = 0.001;
pub const STAR_DEPTH_STEP: f32 = 0.01;
pub const STAR_FAR_Z: f32 = 50.0;
pub const STAR_NEAR_Z: f32 = -50.0;

// Decorative shapes
pub const SHAPE_ROTATION_STEP_X: f32 = 0.005;
pub const SHAPE_ROTATION_STEP_Y: f32 = 0.01;
pub const SHAPE_FLOAT_AMPLITUDE: f32 = 0.5;
pub const SHAPE_DEPTH_APPROACH: f32 = 0.1; // fraction of remaining distance covered per frame
pub const SHAPE_SCALE_NORMALIZATION: f32 = 50.0;
pub const GLOW_OPACITY: f32 = 0.1; // back-facing shell just outside the wireframe
pub const FILL_OPACITY: f32 = 0.05; // front-facing shell just inside it

// Shape layouts (home z / far z / x multiplier)
pub const WIDE_HOME_Z: f32 = 15.0;
pub const WIDE_FAR_Z: f32 = 50.0;
pub const NARROW_HOME_Z: f32 = 8.0;
pub const NARROW_FAR_Z: f32 = 45.0;
pub const NARROW_X_FACTOR: f32 = 0.5;
pub const NARROW_VIEWPORT_MAX_PX: f64 = 768.0;

// Viewport
pub const RESIZE_DEBOUNCE_MS: i32 = 250;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Page lifecycle
pub const LOADING_FADE_MS: i32 = 500;

// Palette
pub const GREEN: [f32; 3] = [0.0, 1.0, 0.533]; // #00ff88
pub const PINK: [f32; 3] = [1.0, 0.0, 0.533]; // #ff0088
pub const BLUE: [f32; 3] = [0.0, 0.533, 1.0]; // #0088ff
pub const ORANGE: [f32; 3] = [1.0, 0.533, 0.0]; // #ff8800
pub const STAR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const CLEAR_COLOR: [f64; 4] = [0.02, 0.02, 0.05, 1.0];
