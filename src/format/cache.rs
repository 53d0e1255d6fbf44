use tracing::trace;

use super::axis::{
    AxisFormatters, HorizontalFormatterFn, NumericFormatterFn, build_horizontal_formatter,
    build_vertical_formatter,
};
use super::config::FormatterConfig;
use super::spec::FormatterSpec;

/// Rebuild counters of an [`AxisFormatterCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatterCacheStats {
    pub x_generation: u64,
    pub y_generation: u64,
}

#[derive(Clone)]
struct CachedSlot<K, F> {
    key: Option<K>,
    formatter: Option<F>,
    generation: u64,
}

impl<K, F> Default for CachedSlot<K, F> {
    fn default() -> Self {
        Self {
            key: None,
            formatter: None,
            generation: 0,
        }
    }
}

impl<K: PartialEq, F: Clone> CachedSlot<K, F> {
    /// Returns the cached formatter, rebuilding only when `key` changed.
    fn get_or_rebuild(&mut self, key: Option<K>, build: impl FnOnce(&K) -> F) -> Option<F> {
        if self.generation > 0 && self.key == key {
            return self.formatter.clone();
        }
        self.formatter = key.as_ref().map(build);
        self.key = key;
        self.generation = self.generation.saturating_add(1);
        self.formatter.clone()
    }
}

/// Memoizes axis formatters on the value of their resolved spec.
///
/// Editing an unrelated configuration field resolves an equal spec and
/// returns the previously built function.
#[derive(Clone, Default)]
pub struct AxisFormatterCache {
    x: CachedSlot<(FormatterSpec, Option<String>), HorizontalFormatterFn>,
    y: CachedSlot<FormatterSpec, NumericFormatterFn>,
}

impl std::fmt::Debug for AxisFormatterCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisFormatterCache")
            .field("stats", &self.stats())
            .finish()
    }
}

impl AxisFormatterCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, config: Option<&FormatterConfig>) -> AxisFormatters {
        self.resolve_with_date_input(config, None)
    }

    pub fn resolve_with_date_input(
        &mut self,
        config: Option<&FormatterConfig>,
        date_input_format: Option<&str>,
    ) -> AxisFormatters {
        let x_key = FormatterSpec::resolve(config.map(|config| &config.x_axis))
            .map(|spec| (spec, date_input_format.map(str::to_owned)));
        let y_key = FormatterSpec::resolve(config.map(|config| &config.y_axis));

        let before = self.stats();
        let formatters = AxisFormatters {
            x: self.x.get_or_rebuild(x_key, |(spec, date_input)| {
                build_horizontal_formatter(spec, date_input.as_deref())
            }),
            y: self.y.get_or_rebuild(y_key, build_vertical_formatter),
        };
        let after = self.stats();
        if before != after {
            trace!(
                x_generation = after.x_generation,
                y_generation = after.y_generation,
                "rebuilt axis formatters"
            );
        }
        formatters
    }

    #[must_use]
    pub fn stats(&self) -> FormatterCacheStats {
        FormatterCacheStats {
            x_generation: self.x.generation,
            y_generation: self.y.generation,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
