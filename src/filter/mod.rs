//! Filter Rule Sets
//!
//! Each media kind has a rules struct (defaults plus caller overrides) and two
//! independent predicates:
//!
//! - **structural eligibility** (`should_extract_*`): visibility, tag and
//!   selector exclusion, ARIA role. Cheap, evaluated first.
//! - **content validity** (`is_valid_*`): size bounds, aspect ratio, tracking
//!   pixels, vector icons, degenerate text.
//!
//! An element qualifies iff both return true. Predicates take their
//! configuration as arguments and hold no state, so callers can override any
//! default per invocation.

pub mod image;
pub mod text;
pub mod video;

pub use image::{image_size, is_valid_image, should_extract_image, ImageRules};
pub use text::{is_valid_text, should_extract_text, TextRules};
pub use video::{is_valid_video, should_extract_video, video_size, VideoRules};
