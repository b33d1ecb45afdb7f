use fnv::FnvHashMap;

use word_count::app::wc;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    wc::bench::<FnvHashMap<String, u64>>()
}
