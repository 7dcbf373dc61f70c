use fieldguide_core::EffectsConfig;
use web_sys as web;

use crate::constants::CONFIG_ELEMENT_ID;

/// Effect tunables from the page's optional JSON block, defaults otherwise.
pub fn load(document: &web::Document) -> EffectsConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return EffectsConfig::default();
    };
    match EffectsConfig::from_json(&text) {
        Ok(cfg) => {
            log::info!("effects config loaded from #{}", CONFIG_ELEMENT_ID);
            cfg
        }
        Err(e) => {
            log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            EffectsConfig::default()
        }
    }
}
