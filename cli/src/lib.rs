pub mod args;
pub mod render;
pub mod session;

pub mod exitcodes {
    pub const OK: u8 = 0;
    pub const VALIDATION: u8 = 2;
    pub const INCOMPLETE: u8 = 3;
    pub const IO: u8 = 4;
}
