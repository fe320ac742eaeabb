//! Per-release decoder selection
//!
//! A fresh capability is constructed for every release arrival and dropped
//! once the release has been processed. Construction cost is paid at
//! release granularity, never per track, and nothing is cached across
//! releases.

use crate::config::Config;
use crate::resolver;
use tagsanity_core::traits::{Transliterate, TranslitProvider};
use tagsanity_core::types::{AlbumInfo, Lang};

/// Yield a capability for `target` if one was resolved and is enabled.
///
/// An absent target or a target outside `enabled` yields `None`; the
/// pipeline then runs without its transliteration stage.
pub fn provide(
    provider: &dyn TranslitProvider,
    target: Option<Lang>,
    enabled: &[Lang],
) -> Option<Box<dyn Transliterate>> {
    let lang = target?;
    if !enabled.contains(&lang) {
        return None;
    }
    Some(provider.create(lang))
}

/// Resolve and provide one decoder for a whole release.
///
/// Language and script are release-level properties, so this runs once per
/// release arrival; every track on the release shares the result.
pub fn for_release(
    provider: &dyn TranslitProvider,
    album: &AlbumInfo,
    config: &Config,
) -> Option<Box<dyn Transliterate>> {
    let target = resolver::resolve(
        album.language.as_deref(),
        album.script.as_deref(),
        config.han_preference,
    );
    let decoder = provide(provider, target, &config.langs_enabled);

    match target {
        Some(lang) if decoder.is_some() => {
            tracing::debug!("transliterating release as {}", lang);
        }
        Some(lang) => {
            tracing::debug!("transliteration target {} is not enabled", lang);
        }
        None => {
            tracing::debug!(
                "no transliteration target for language {:?} / script {:?}",
                album.language,
                album.script
            );
        }
    }

    decoder
}
