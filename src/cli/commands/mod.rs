//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod demo;
pub mod play;
