/// Gravatar image size in pixels
pub const AVATAR_SIZE: u32 = 200;

/// Highest gravatar rating allowed
pub const AVATAR_RATING: &str = "pg";

/// Fallback image when the email has no gravatar ("mystery man")
pub const AVATAR_DEFAULT: &str = "mm";

/// Width of the `name` and `email` columns (`VARCHAR(255)`)
pub const MAX_TEXT_COLUMN_CHARS: usize = 255;
