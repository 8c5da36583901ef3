mod common;
mod process;
