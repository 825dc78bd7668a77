/// Engine knobs. `from_env` follows the `SSSP_*` environment convention;
/// values that fail to parse are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Stop as soon as the target is finalized.
    pub early_exit: bool,
    /// Upper bound on the heap's initial reservation (`min(n, heap_capacity)`).
    pub heap_capacity: usize,
}

pub const DEFAULT_HEAP_CAPACITY: usize = 1024;

impl Default for EngineConfig {
    fn default() -> Self {
        Self { early_exit: true, heap_capacity: DEFAULT_HEAP_CAPACITY }
    }
}

impl EngineConfig {
    /// Reads `SSSP_EARLY_EXIT` (`0`, `false`, `off`, `no` disable it) and
    /// `SSSP_HEAP_CAPACITY` (positive integer).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut cfg = Self::default();
        if let Some(v) = lookup("SSSP_EARLY_EXIT") {
            match v.trim().to_lowercase().as_str() {
                "0" | "false" | "off" | "no" => cfg.early_exit = false,
                "1" | "true" | "on" | "yes" => cfg.early_exit = true,
                _ => {}
            }
        }
        let capacity = lookup("SSSP_HEAP_CAPACITY").and_then(|v| v.trim().parse::<usize>().ok());
        if let Some(cap) = capacity {
            if cap > 0 {
                cfg.heap_capacity = cap;
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |k| vars.get(k).map(|v| v.to_string())
    }

    #[test]
    fn defaults_without_env() {
        let vars = HashMap::new();
        assert_eq!(EngineConfig::from_lookup(lookup(&vars)), EngineConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let vars = HashMap::from([("SSSP_EARLY_EXIT", "off"), ("SSSP_HEAP_CAPACITY", "64")]);
        let cfg = EngineConfig::from_lookup(lookup(&vars));
        assert!(!cfg.early_exit);
        assert_eq!(cfg.heap_capacity, 64);
    }

    #[test]
    fn ignores_garbage() {
        let vars = HashMap::from([("SSSP_EARLY_EXIT", "maybe"), ("SSSP_HEAP_CAPACITY", "0")]);
        assert_eq!(EngineConfig::from_lookup(lookup(&vars)), EngineConfig::default());
    }
}
