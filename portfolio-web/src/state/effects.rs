//! Effects state: the loaded configuration and the live click-burst arena.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use lib_core::config::EffectsConfig;
use lib_core::model::BurstArena;
use web_sys::HtmlElement;

use crate::utils::config::load_effects_config;

/// Global effects context
#[derive(Clone, Copy)]
pub struct EffectsContext {
    config: StoredValue<EffectsConfig>,
    bursts: StoredValue<Rc<RefCell<BurstArena<HtmlElement>>>, LocalStorage>,
}

impl EffectsContext {
    pub fn new(config: EffectsConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            bursts: StoredValue::new_local(Rc::new(RefCell::new(BurstArena::new()))),
        }
    }

    pub fn config(&self) -> EffectsConfig {
        self.config.get_value()
    }

    /// Borrow the configuration without cloning it.
    pub fn with_config<T>(&self, f: impl FnOnce(&EffectsConfig) -> T) -> T {
        self.config.with_value(f)
    }

    pub fn bursts(&self) -> Rc<RefCell<BurstArena<HtmlElement>>> {
        self.bursts.get_value()
    }
}

pub fn provide_effects_context() -> EffectsContext {
    let context = EffectsContext::new(load_effects_config());
    provide_context(context);
    context
}

pub fn use_effects_context() -> EffectsContext {
    expect_context::<EffectsContext>()
}
