use std::collections::HashMap;

use word_count::app::wc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The canonical benchmark counts with the standard library hash map
    wc::bench::<HashMap<String, u64>>()
}
