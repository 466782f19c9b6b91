#![no_main]

use freqcache::policy::lfu::LfuCache;
use freqcache::traits::CoreCache;
use libfuzzer_sys::fuzz_target;

// Checks every eviction against a scan over (frequency, last touch).
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 8) + 1;
    let mut cache: LfuCache<u8, ()> = LfuCache::new(capacity);
    // (key, freq, last_touch)
    let mut model: Vec<(u8, u64, usize)> = Vec::new();

    for (tick, &byte) in ops.iter().enumerate() {
        let key = byte % 24;
        if byte & 0x80 == 0 {
            cache.get(&key);
            if let Some(entry) = model.iter_mut().find(|e| e.0 == key) {
                entry.1 += 1;
                entry.2 = tick;
            }
            continue;
        }

        if let Some(entry) = model.iter_mut().find(|e| e.0 == key) {
            entry.1 += 1;
            entry.2 = tick;
        } else {
            if model.len() == capacity {
                let victim = (0..model.len())
                    .min_by_key(|&i| (model[i].1, model[i].2))
                    .unwrap();
                model.remove(victim);
            }
            model.push((key, 1, tick));
        }
        cache.put(key, ());

        assert_eq!(cache.len(), model.len());
        for entry in &model {
            assert!(cache.contains(&entry.0));
        }
    }
});
