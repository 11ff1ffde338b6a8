// sysexits.h codes, same as the clox driver
pub const EXIT_USAGE: i32 = 64;
pub const EXIT_DATA: i32 = 65;
pub const EXIT_IO: i32 = 74;

pub const PROMPT: &str = "lox > ";
pub const FAREWELL: &str = "Lox is done! canceled by user via Ctrl+D";

pub const KEYWORDS_COUNT: usize = 16;
pub const LOOKAHEAD_MAX_COUNT: usize = 2;
