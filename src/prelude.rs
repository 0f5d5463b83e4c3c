pub use anyhow::{Context, Result, anyhow, bail};
pub use log::*;
