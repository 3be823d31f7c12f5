mod run;

pub use run::{handle_run, RunArgs};
