//! Configuration access port trait.

use crate::domain::value::Value;

pub trait ConfigPort {
    /// Stored value, or `default` unchanged when the section or key is missing.
    fn get(&self, section: &str, key: &str, default: Value) -> Value;

    fn set(&mut self, section: &str, key: &str, value: Value);

    fn lookup(&self, section: &str, key: &str) -> Option<Value>;

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.lookup(section, key).map(|v| v.to_string())
    }

    fn get_list(&self, section: &str, key: &str, default: Vec<String>) -> Vec<String> {
        self.lookup(section, key)
            .map(|v| v.items())
            .unwrap_or(default)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.lookup(section, key)
            .and_then(|v| v.as_int())
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.lookup(section, key)
            .and_then(|v| v.as_double())
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.lookup(section, key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }
}
