use freqcache::policy::lfu::LfuCache;
use freqcache::traits::{CoreCache, LfuCacheTrait};

fn main() {
    let mut cache: LfuCache<&str, u32> = LfuCache::new(3);
    cache.put("config", 1);
    cache.put("session", 2);
    cache.put("banner", 3);

    // "config" is read twice and "session" once; "banner" is never read
    cache.get(&"config");
    cache.get(&"config");
    cache.get(&"session");

    for (key, _, freq) in cache.iter_by_frequency() {
        println!("{key}: frequency {freq}");
    }

    // full: the new key displaces the lowest-frequency entry
    cache.put("avatar", 4);
    println!("banner kept? {}", cache.contains(&"banner"));

    // "avatar" is alone at frequency 1, so it is the next victim
    println!("next victim: {:?}", cache.peek_lfu().map(|(k, _)| *k));
    println!("popped: {:?}", cache.pop_lfu());
    println!("min frequency now: {:?}", cache.min_freq());
}

// Expected output:
// banner: frequency 1
// session: frequency 2
// config: frequency 3
// banner kept? false
// next victim: Some("avatar")
// popped: Some(("avatar", 4))
// min frequency now: Some(2)
