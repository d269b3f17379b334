#![no_main]

use libfuzzer_sys::fuzz_target;
use rollkit_core::{CarouselConfig, Orientation};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(orientation) = text.parse::<Orientation>() {
        assert_eq!(Orientation::from_code(orientation.code()), Ok(orientation));
        assert_eq!(orientation.as_str().parse::<Orientation>(), Ok(orientation));
    }

    // Anything that loads must be valid and survive a TOML round trip.
    for loaded in [
        CarouselConfig::from_toml_str(text),
        CarouselConfig::from_json_str(text),
    ] {
        let Ok(config) = loaded else {
            continue;
        };
        assert!(config.validate().is_ok());
        assert!(config.each_time_ms >= 0 && config.pause_ms >= 0);
        if let Ok(toml) = config.to_toml_string() {
            let reparsed = CarouselConfig::from_toml_str(&toml);
            assert_eq!(reparsed.ok(), Some(config));
        }
    }
});
