pub use anyhow::{ensure, Result};
