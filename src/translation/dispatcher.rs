/*!
 * Concurrent per-segment translation dispatch.
 *
 * One request is issued per segment, all logically concurrent; the dispatcher
 * suspends only at the final join point. If any request fails, the run fails
 * with the first error in original segment order and no partial aggregate is
 * returned. Sibling requests are not cancelled; their results are discarded.
 */

use async_trait::async_trait;
use futures::future::join_all;
use log::debug;

use crate::errors::{ProviderError, TranslationError};

use super::aggregate::{TranslationAggregate, TranslationResult};

/// The seam between the translation core and whatever produces translations.
///
/// Implementations may call a hosted model API, a local stub, or anything
/// else; the dispatcher neither knows nor cares. Retry and timeout policy
/// belong to the implementation, not the dispatcher.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one segment of text.
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<TranslationResult, ProviderError>;
}

/// Adapter that lets a plain function value act as a [`Translator`].
pub struct FnTranslator<F>(pub F);

#[async_trait]
impl<F> Translator for FnTranslator<F>
where
    F: Fn(&str, &str, &str) -> Result<TranslationResult, ProviderError> + Send + Sync,
{
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<TranslationResult, ProviderError> {
        (self.0)(text, source_language, target_language)
    }
}

/// Translate every segment concurrently and merge the results.
///
/// Fail-fast: a partial translation would be misleading, so the first error
/// (in original segment order) fails the whole run. Outstanding sibling
/// requests run to completion unobserved before this function returns.
pub async fn translate_all<T>(
    translator: &T,
    segments: &[String],
    source_language: &str,
    target_language: &str,
) -> Result<TranslationAggregate, TranslationError>
where
    T: Translator + ?Sized,
{
    debug!(
        "Dispatching {} segment request(s) ({} -> {})",
        segments.len(),
        source_language,
        target_language
    );

    let requests = segments
        .iter()
        .map(|seg| translator.translate(seg, source_language, target_language));
    let settled = join_all(requests).await;

    let mut results = Vec::with_capacity(settled.len());
    for outcome in settled {
        results.push(outcome?);
    }

    Ok(TranslationAggregate::from_results(results))
}
