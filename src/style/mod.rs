pub mod composer;
pub mod state;
