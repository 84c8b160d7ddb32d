//! Reading the configuration the host page embeds for the viewer.
//!
//! The host renders a `<script type="application/json">` element with the id
//! [`CONFIG_ELEMENT_ID`]; its text is the [`HostConfig`] document.

#[cfg(test)]
#[path = "host_config_test.rs"]
mod host_config_test;

use crate::net::types::{ConfigError, HostConfig};

pub const CONFIG_ELEMENT_ID: &str = "quotemark-config";

/// Read and parse the embedded configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] when the element is absent and
/// [`ConfigError::Parse`] when its contents are not valid configuration.
pub fn read() -> Result<HostConfig, ConfigError> {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or(ConfigError::Missing(CONFIG_ELEMENT_ID))?;
        HostConfig::from_json(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ConfigError::Missing(CONFIG_ELEMENT_ID))
    }
}
