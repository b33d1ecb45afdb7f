use std::collections::BTreeMap;

use word_count::app::wc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    wc::bench::<BTreeMap<String, u64>>()
}
