#![no_main]

use libfuzzer_sys::fuzz_target;
use treeselect::{ControlConfig, Diagnostics, SelectControl};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and building a control should never panic
        if let Ok(config) = toml::from_str::<ControlConfig>(content) {
            if let Some(control) = SelectControl::new(&config, &mut Diagnostics::new()) {
                let _ = control.summary(Some(40));
            }
        }
    }
});
