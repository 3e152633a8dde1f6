//! chainlist-demo: build a list from configuration and print its summary
//!
//! ## Configuration
//! - First argument: optional path to a YAML config file
//! - CHAINLIST_CONFIG: path to a YAML config file (optional)
//! - CHAINLIST__DISPLAY__LABEL / CHAINLIST__DISPLAY__MAX_ELEMENTS: summary options
//! - CHAINLIST_LOG: tracing filter (default: info)
//!
//! ```yaml
//! display:
//!   label: DEMO
//!   max_elements: 10
//! demo:
//!   values: [alpha, beta, alpha, gamma]
//!   remove: [alpha, delta]
//! ```

use tracing::{info, warn};

use chainlist::config::Config;
use chainlist::utils::bootstrap::init_tracing;
use chainlist::LinkedList;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let path = std::env::args().nth(1);
    let config = Config::load(path.as_deref())?;

    let mut list: LinkedList<String> = config.demo.values.iter().cloned().collect();
    info!(len = list.len(), "built list from configuration");

    for value in &config.demo.remove {
        match list.remove_value(value) {
            Ok(removed) => info!(value = %removed, len = list.len(), "removed value"),
            Err(e) => warn!(value = %value, error = %e, "could not remove value"),
        }
    }

    println!("{}", list.to_display_string_with(&config.display));
    Ok(())
}
